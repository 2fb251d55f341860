use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

// =============================================================
// validate_input
// =============================================================

#[test]
fn validate_rejects_short_input() {
    assert_eq!(validate_input("too short"), Err(DemoError::TextTooShort));
}

#[test]
fn validate_counts_after_trimming() {
    let padded = format!("   {}   ", "a".repeat(49));
    assert_eq!(validate_input(&padded), Err(DemoError::TextTooShort));
}

#[test]
fn validate_accepts_fifty_chars_and_returns_trimmed() {
    let body = "a".repeat(50);
    let padded = format!("\n{body}\t");
    assert_eq!(validate_input(&padded), Ok(body.as_str()));
}

#[test]
fn validate_counts_utf16_units() {
    // Each emoji is two UTF-16 units, so 25 of them reach the minimum.
    let emoji = "😀".repeat(25);
    assert_eq!(validate_input(&emoji), Ok(emoji.as_str()));
    assert_eq!(validate_input(&"😀".repeat(24)), Err(DemoError::TextTooShort));
    assert_eq!(validate_input(&"é".repeat(49)), Err(DemoError::TextTooShort));
}

#[test]
fn validate_trims_byte_order_mark() {
    let padded = format!("\u{feff}{}\u{feff}", "a".repeat(49));
    assert_eq!(validate_input(&padded), Err(DemoError::TextTooShort));

    let body = "a".repeat(50);
    let padded = format!("\u{feff} {body}");
    assert_eq!(validate_input(&padded), Ok(body.as_str()));
}

#[test]
fn validate_keeps_next_line_character() {
    // NEL is not trimmed by the browser, so it counts toward the length.
    let text = format!("\u{85}{}", "a".repeat(49));
    assert_eq!(validate_input(&text), Ok(text.as_str()));
}

#[test]
fn trim_whitespace_set() {
    for c in [' ', '\t', '\n', '\r', '\u{a0}', '\u{2028}', '\u{3000}', '\u{feff}'] {
        assert!(is_trim_whitespace(c), "{c:?}");
    }
    for c in ['a', '\u{85}', '\u{200b}'] {
        assert!(!is_trim_whitespace(c), "{c:?}");
    }
}

#[test]
fn too_short_message_matches_alert_text() {
    assert_eq!(DemoError::TextTooShort.to_string(), "Please enter at least 50 characters to analyze.");
}

// =============================================================
// word_count
// =============================================================

#[test]
fn word_count_splits_on_single_spaces() {
    assert_eq!(word_count("one two three"), 3);
    assert_eq!(word_count("one  two"), 3);
    assert_eq!(word_count("one\ntwo"), 1);
}

// =============================================================
// analyze
// =============================================================

#[test]
fn long_text_ai_probability_stays_in_high_band() {
    let text = words(101);
    for seed in 0..500 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = analyze(&text, &mut rng);
        assert!(result.ai >= LONG_TEXT_BASE, "seed {seed}: ai {}", result.ai);
        assert!(result.ai <= 1.0, "seed {seed}: ai {}", result.ai);
        assert!(result.human.to_bits() == (1.0 - result.ai).to_bits());
        assert_eq!(result.verdict, Verdict::LikelyAi);
    }
}

#[test]
fn hundred_words_is_not_long() {
    let text = words(100);
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = analyze(&text, &mut rng);
        assert!(result.ai >= SHORT_TEXT_BASE && result.ai < SHORT_TEXT_BASE + JITTER);
        assert_eq!(result.verdict, Verdict::LikelyHuman);
    }
}

#[test]
fn confidence_stays_in_band() {
    let text = words(20);
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = analyze(&text, &mut rng);
        assert!(result.confidence >= CONFIDENCE_BASE);
        assert!(result.confidence < CONFIDENCE_BASE + JITTER);
    }
}

#[test]
fn verdict_explanations_differ() {
    assert_ne!(Verdict::LikelyAi.explanation(), Verdict::LikelyHuman.explanation());
    assert!(Verdict::LikelyAi.explanation().contains("AI-generated"));
    assert!(Verdict::LikelyHuman.explanation().contains("human-written"));
}

// =============================================================
// Labels
// =============================================================

#[test]
fn percent_label_uses_one_decimal() {
    assert_eq!(percent_label(0.8123), "81.2%");
    assert_eq!(percent_label(0.0), "0.0%");
    assert_eq!(percent_label(1.0), "100.0%");
}

#[test]
fn analysis_labels_format_each_metric() {
    let result = TextAnalysis { human: 0.25, ai: 0.75, confidence: 0.9, verdict: Verdict::LikelyAi };
    assert_eq!(result.human_label(), "25.0%");
    assert_eq!(result.ai_label(), "75.0%");
    assert_eq!(result.confidence_label(), "90.0%");
}
