//! Scroll-position rules for the page chrome.
//!
//! Pure functions over plain numbers; the DOM reads that feed them live in
//! [`section_bounds`] and the components.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Sections count as "entered" this many pixels before their top edge.
pub const SECTION_OFFSET_PX: f64 = 100.0;
/// Header switches to its sticky treatment past this offset.
pub const STICKY_THRESHOLD_PX: f64 = 100.0;
/// Back-to-top control appears past this offset.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Vertical extent of one `section[id]` in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    #[must_use]
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_OFFSET_PX;
        scroll_y > start && scroll_y <= start + self.height
    }
}

/// Id of the section the scroll offset falls into.
///
/// Scans in document order and keeps the last match, so overlapping
/// sections resolve to the later one.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if section.contains(scroll_y) {
            current = Some(section.id.as_str());
        }
    }
    current
}

#[must_use]
pub fn is_sticky(scroll_y: f64) -> bool {
    scroll_y > STICKY_THRESHOLD_PX
}

#[must_use]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

/// Window offset that puts a target just below the fixed header.
#[must_use]
pub fn scroll_target(target_viewport_top: f64, page_offset: f64, header_height: f64) -> f64 {
    target_viewport_top + page_offset - header_height
}

/// In-page anchor id for an `href`, ignoring bare `#` and external links.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Collect the bounds of every `section[id]` in document order.
#[cfg(feature = "hydrate")]
pub fn section_bounds() -> Vec<SectionBounds> {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionBounds::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
        .collect()
}

/// Smooth-scroll to the element with `id`, compensating for the header.
///
/// Missing target or header elements make this a no-op.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(doc) = window.document() else {
            return;
        };
        let Some(target) = doc.get_element_by_id(id) else {
            return;
        };
        let header_height = doc
            .query_selector(".header")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0.0, |el| f64::from(el.offset_height()));
        let page_offset = window.page_y_offset().unwrap_or(0.0);
        let top = scroll_target(target.get_bounding_client_rect().top(), page_offset, header_height);
        crate::util::browser::smooth_scroll_to(top);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
