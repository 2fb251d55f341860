//! Full-screen overlay shown until the window finishes loading.

use leptos::prelude::*;

use crate::state::ui::PreloaderPhase;

/// Preloader overlay.
///
/// After the window `load` event it waits, fades out, then hides itself. If
/// the document is already loaded at hydration the fade starts right away.
#[component]
pub fn Preloader() -> impl IntoView {
    let phase = expect_context::<RwSignal<PreloaderPhase>>();

    #[cfg(feature = "hydrate")]
    {
        let loaded = web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.ready_state() == "complete");
        if loaded {
            begin_fade(phase);
        } else {
            let handle = window_event_listener(leptos::ev::load, move |_| begin_fade(phase));
            on_cleanup(move || handle.remove());
        }
    }

    let class = move || {
        if phase.get().is_fading() { "preloader fade-out" } else { "preloader" }
    };
    let display = move || if phase.get().is_hidden() { "none" } else { "flex" };

    view! {
        <div class=class style:display=display>
            <div class="loader">
                <div class="loader-ring"></div>
                <span class="loader-text">"TruthLens"</span>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn begin_fade(phase: RwSignal<PreloaderPhase>) {
    use gloo_timers::callback::Timeout;

    if phase.get_untracked() != PreloaderPhase::Visible {
        return;
    }
    Timeout::new(PreloaderPhase::FADE_DELAY_MS, move || {
        phase.update(|p| *p = p.next());
        Timeout::new(PreloaderPhase::FADE_DURATION_MS, move || {
            phase.update(|p| *p = p.next());
        })
        .forget();
    })
    .forget();
}
