//! Site header: logo, primary navigation, mobile menu, theme switch.

use leptos::prelude::*;

use crate::components::theme_switch::ThemeSwitch;
use crate::state::ui::{NAV_LINKS, NavLink, NavState};

/// Header bar. Turns sticky past the scroll threshold; the nav highlights
/// whichever link the scroll position or the last click selected.
#[component]
pub fn Header() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    // Clicks anywhere outside the open menu close it.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::click, move |ev| {
            use wasm_bindgen::JsCast;

            if !nav.get_untracked().menu_open {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            let inside = |selector: &str| {
                target
                    .as_ref()
                    .and_then(|el| el.closest(selector).ok().flatten())
                    .is_some()
            };
            let (in_menu, in_toggle) = (inside(".nav-list"), inside(".mobile-menu-toggle"));
            nav.update(|n| n.on_outside_click(in_menu, in_toggle));
        });
        on_cleanup(move || handle.remove());
    }

    let header_class = move || if nav.get().sticky { "header sticky" } else { "header" };
    let list_class = move || if nav.get().menu_open { "nav-list active" } else { "nav-list" };

    view! {
        <header class=header_class>
            <div class="container header-inner">
                <a href="#home" class="logo">
                    <i class="fas fa-eye"></i>
                    <span>"TruthLens"</span>
                </a>
                <nav class="nav">
                    <ul class=list_class>
                        {NAV_LINKS.iter().map(|link| view! { <NavItem link=*link/> }).collect::<Vec<_>>()}
                    </ul>
                </nav>
                <div class="header-actions">
                    <ThemeSwitch/>
                    <button
                        class="mobile-menu-toggle"
                        aria-label="Toggle navigation"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        <i class="fas fa-bars"></i>
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let href = link.href;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let mut target = None;
        nav.update(|n| target = n.on_link_click(href));
        if let Some(id) = target {
            ev.prevent_default();
            crate::util::scroll::scroll_to_section(id);
        }
    };

    let class = move || if nav.get().is_active(href) { "nav-link active" } else { "nav-link" };

    view! {
        <li>
            <a href=href class=class on:click=on_click>
                {link.label}
            </a>
        </li>
    }
}
