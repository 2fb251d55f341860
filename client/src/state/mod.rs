//! Client-side state for the landing page.
//!
//! DESIGN
//! ======
//! State is split by feature (`ui` chrome, `progress` timer, `upload` widgets)
//! so each component depends on a small focused model. No state is shared
//! between features.

pub mod progress;
pub mod ui;
pub mod upload;
