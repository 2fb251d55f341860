//! Light/dark theme switch in the header.

use leptos::prelude::*;

use crate::util::theme::{self, BrowserStorage, Theme};

/// Checkbox switch bound to the stored theme preference.
///
/// Checked means dark. On mount the stored value is applied to `<body>`; each
/// change overwrites the stored value.
#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let current = RwSignal::new(Theme::default());

    Effect::new(move || {
        let stored = theme::load_theme(&BrowserStorage);
        theme::apply(stored);
        current.set(stored);
    });

    let on_change = move |ev: leptos::ev::Event| {
        let next = theme::on_switch_changed(&BrowserStorage, event_target_checked(&ev));
        #[cfg(feature = "hydrate")]
        log::debug!("theme set to {}", next.as_str());
        current.set(next);
    };

    view! {
        <label class="theme-switch" for="theme-switch" title="Toggle dark mode">
            <input
                type="checkbox"
                id="theme-switch"
                prop:checked=move || current.get().is_checked()
                on:change=on_change
            />
            <span class="slider">
                <i class="fas fa-sun"></i>
                <i class="fas fa-moon"></i>
            </span>
        </label>
    }
}
