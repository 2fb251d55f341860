//! Thin wrappers over `web-sys` calls shared by several components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every helper is a silent no-op outside the browser so components can call
//! them unconditionally from event handlers during SSR-compiled builds.

use crate::util::error::DemoError;

/// Surface a validation failure through a blocking `window.alert`.
pub fn alert(err: DemoError) {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("demo validation failed: {err}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&err.to_string());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = err;
    }
}

/// Current vertical scroll offset of the window, `0.0` when unavailable.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smoothly scroll the window so its top edge lands on `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Create a `blob:` URL for previewing a user-selected file.
#[cfg(feature = "hydrate")]
pub fn object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Release a `blob:` URL created by [`object_url`].
pub fn revoke_object_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
