//! Text analyzer demo: validates input, animates a progress bar, then shows
//! simulated human/AI probabilities.

use leptos::prelude::*;

use crate::state::progress::Progress;
use crate::util::text_analysis::{self, TextAnalysis};

const PLACEHOLDER_EXPLANATION: &str = "Enter some text and click Analyze to see the results.";

#[component]
pub fn TextDemo() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let progress = RwSignal::new(Progress::default());
    let result = RwSignal::new(None::<TextAnalysis>);

    let on_analyze = move |_| {
        let raw = input.get_untracked();
        let mut outcome = Ok(None);
        progress.update(|p| outcome = p.begin(&raw));
        let text = match outcome {
            Ok(Some(text)) => text,
            Ok(None) => return,
            Err(err) => {
                crate::util::browser::alert(err);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use rand::SeedableRng;

            let tick = std::time::Duration::from_millis(u64::from(crate::state::progress::TICK_MS));
            loop {
                gloo_timers::future::sleep(tick).await;
                let mut done = false;
                progress.update(|p| done = p.tick());
                if done {
                    break;
                }
            }
            let mut rng = rand::rngs::SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
            let analysis = text_analysis::analyze(&text, &mut rng);
            log::debug!("text analysis complete: ai={:.3}", analysis.ai);
            result.set(Some(analysis));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, result);
        }
    };

    let metric = move |pick: fn(&TextAnalysis) -> String| {
        move || result.get().as_ref().map_or_else(|| "0%".to_owned(), pick)
    };
    let explanation = move || {
        result
            .get()
            .map_or(PLACEHOLDER_EXPLANATION, |r| r.verdict.explanation())
    };

    view! {
        <div class="demo-container">
            <div class="demo-input">
                <h3>"Paste text to analyze"</h3>
                <textarea
                    rows="10"
                    placeholder="Paste at least 50 characters of text here..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn-primary demo-btn"
                    disabled=move || progress.get().is_running()
                    on:click=on_analyze
                >
                    "Analyze Text"
                </button>
            </div>
            <div class="demo-output">
                <div class="progress-container">
                    <div class="progress-bar">
                        <div class="progress-fill" style:width=move || progress.get().width()></div>
                    </div>
                    <span class="progress-label">{move || progress.get().label()}</span>
                </div>
                <div class="result-metrics">
                    <div class="metric">
                        <span class="metric-label">"Human Probability"</span>
                        <span class="metric-value">{metric(TextAnalysis::human_label)}</span>
                    </div>
                    <div class="metric">
                        <span class="metric-label">"AI Probability"</span>
                        <span class="metric-value">{metric(TextAnalysis::ai_label)}</span>
                    </div>
                    <div class="metric">
                        <span class="metric-label">"Confidence"</span>
                        <span class="metric-value">{metric(TextAnalysis::confidence_label)}</span>
                    </div>
                </div>
                <p class="result-explanation">{explanation}</p>
            </div>
        </div>
    }
}
