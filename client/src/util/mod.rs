//! Utility helpers shared across landing page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and the demo rules
//! from component markup so the rules can be tested without a browser.

pub mod browser;
pub mod error;
pub mod reports;
pub mod scroll;
pub mod text_analysis;
pub mod theme;
