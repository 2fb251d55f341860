//! Floating control that scrolls the page back to the top.

use leptos::prelude::*;

use crate::state::ui::NavState;

#[component]
pub fn BackToTop() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let class = move || if nav.get().back_to_top { "back-to-top active" } else { "back-to-top" };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        crate::util::browser::smooth_scroll_to(0.0);
    };

    view! {
        <a href="#" id="back-to-top" class=class aria-label="Back to top" on:click=on_click>
            <i class="fas fa-arrow-up"></i>
        </a>
    }
}
