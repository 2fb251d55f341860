//! Page chrome state: navigation, mobile menu, demo tabs, preloader.
//!
//! DESIGN
//! ======
//! Plain structs held in `RwSignal`s provided through context. Scroll-derived
//! flags are recomputed from the offset on every scroll event.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::scroll::{self, SectionBounds};

/// Entries of the primary navigation, in document order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#features", label: "Features" },
    NavLink { href: "#demo", label: "Demo" },
    NavLink { href: "#how-it-works", label: "How It Works" },
    NavLink { href: "#contact", label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    #[must_use]
    pub fn targets(&self, section_id: &str) -> bool {
        scroll::anchor_id(self.href) == Some(section_id)
    }
}

/// Navigation and header state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    /// `href` of the highlighted link, if any.
    pub active_href: Option<String>,
    pub menu_open: bool,
    pub sticky: bool,
    pub back_to_top: bool,
}

impl NavState {
    /// Recompute every scroll-derived flag for a new offset.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.sticky = scroll::is_sticky(scroll_y);
        self.back_to_top = scroll::back_to_top_visible(scroll_y);
        self.active_href = scroll::active_section(sections, scroll_y).and_then(|id| {
            NAV_LINKS
                .iter()
                .find(|link| link.targets(id))
                .map(|link| link.href.to_owned())
        });
    }

    /// Highlight a clicked link and close the mobile menu.
    ///
    /// Returns the section id to scroll to for in-page anchors.
    pub fn on_link_click<'a>(&mut self, href: &'a str) -> Option<&'a str> {
        self.active_href = Some(href.to_owned());
        self.menu_open = false;
        scroll::anchor_id(href)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Document click outside both the menu and its toggle closes the menu.
    pub fn on_outside_click(&mut self, inside_menu: bool, inside_toggle: bool) {
        if self.menu_open && !inside_menu && !inside_toggle {
            self.menu_open = false;
        }
    }

    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        self.active_href.as_deref() == Some(href)
    }
}

/// Panels of the demo section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoTab {
    #[default]
    Text,
    Image,
    Video,
    Deepfake,
}

impl DemoTab {
    pub const ALL: [Self; 4] = [Self::Text, Self::Image, Self::Video, Self::Deepfake];

    #[must_use]
    pub fn pane_id(self) -> &'static str {
        match self {
            Self::Text => "text-demo",
            Self::Image => "image-demo",
            Self::Video => "video-demo",
            Self::Deepfake => "deepfake-demo",
        }
    }

    #[must_use]
    pub fn from_pane_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.pane_id() == id)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text Analysis",
            Self::Image => "Image Verification",
            Self::Video => "Video Analysis",
            Self::Deepfake => "Deepfake Detection",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Text => "fas fa-file-alt",
            Self::Image => "fas fa-image",
            Self::Video => "fas fa-video",
            Self::Deepfake => "fas fa-user-secret",
        }
    }
}

/// Full-screen overlay lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreloaderPhase {
    #[default]
    Visible,
    FadingOut,
    Hidden,
}

impl PreloaderPhase {
    /// Delay after window load before the fade starts.
    pub const FADE_DELAY_MS: u32 = 1000;
    /// Duration of the fade before the overlay is removed.
    pub const FADE_DURATION_MS: u32 = 500;

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Visible => Self::FadingOut,
            Self::FadingOut | Self::Hidden => Self::Hidden,
        }
    }

    #[must_use]
    pub fn is_fading(self) -> bool {
        self != Self::Visible
    }

    #[must_use]
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }
}
