use super::*;

#[test]
fn progress_default_is_idle_and_empty() {
    let progress = Progress::default();
    assert_eq!(progress.value, 0);
    assert_eq!(progress.phase, ProgressPhase::Idle);
    assert_eq!(progress.width(), "0%");
    assert_eq!(progress.label(), LABEL_IDLE);
}

#[test]
fn tick_before_start_is_noop() {
    let mut progress = Progress::default();
    assert!(!progress.tick());
    assert_eq!(progress.value, 0);
}

#[test]
fn run_completes_after_fifty_ticks() {
    let mut progress = Progress::default();
    assert!(progress.start());
    assert_eq!(progress.label(), LABEL_RUNNING);

    let mut ticks = 0;
    while !progress.tick() {
        ticks += 1;
        assert!(progress.is_running());
        assert_eq!(progress.value, ticks * STEP);
    }
    assert_eq!(ticks + 1, COMPLETE / STEP);
    assert_eq!(progress.width(), "100%");
    assert_eq!(progress.label(), LABEL_DONE);
    assert!(!progress.tick());
}

#[test]
fn start_while_running_is_ignored() {
    let mut progress = Progress::default();
    progress.start();
    progress.tick();
    progress.tick();
    assert!(!progress.start());
    assert_eq!(progress.value, 4);
}

#[test]
fn start_after_completion_resets() {
    let mut progress = Progress::default();
    progress.start();
    while !progress.tick() {}
    assert!(progress.start());
    assert_eq!(progress.value, 0);
    assert!(progress.is_running());
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_short_input_leaves_bar_untouched() {
    let mut progress = Progress::default();
    assert_eq!(progress.begin("too short"), Err(DemoError::TextTooShort));
    assert_eq!(progress, Progress::default());
    assert_eq!(progress.value, 0);
    assert_eq!(progress.phase, ProgressPhase::Idle);
}

#[test]
fn begin_short_input_after_completion_keeps_result() {
    let mut progress = Progress::default();
    progress.start();
    while !progress.tick() {}
    let before = progress;
    assert_eq!(progress.begin("   "), Err(DemoError::TextTooShort));
    assert_eq!(progress, before);
    assert_eq!(progress.label(), LABEL_DONE);
}

#[test]
fn begin_valid_input_starts_run_with_trimmed_text() {
    let body = "a".repeat(60);
    let mut progress = Progress::default();
    assert_eq!(progress.begin(&format!("  {body}\n")), Ok(Some(body)));
    assert!(progress.is_running());
    assert_eq!(progress.value, 0);
    assert_eq!(progress.label(), LABEL_RUNNING);
}

#[test]
fn begin_while_running_is_ignored() {
    let text = "b".repeat(50);
    let mut progress = Progress::default();
    assert!(progress.begin(&text).is_ok_and(|t| t.is_some()));
    progress.tick();
    assert_eq!(progress.begin(&text), Ok(None));
    assert_eq!(progress.value, STEP);
}
