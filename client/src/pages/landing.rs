//! The single marketing page: chrome, content sections, and demos.

use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::demo_section::DemoSection;
use crate::components::header::Header;
use crate::components::preloader::Preloader;
use crate::components::sections::{ContactSection, Features, Footer, Hero, HowItWorks};
use crate::state::ui::NavState;

/// Landing page. Owns the window scroll listener that drives nav
/// highlighting, the sticky header, and the back-to-top control.
#[component]
pub fn LandingPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = crate::util::browser::scroll_y();
            let sections = crate::util::scroll::section_bounds();
            nav.update(|n| n.on_scroll(y, &sections));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }

    view! {
        <Preloader/>
        <Header/>
        <main>
            <Hero/>
            <Features/>
            <DemoSection/>
            <HowItWorks/>
            <ContactSection/>
        </main>
        <Footer/>
        <BackToTop/>
    }
}
