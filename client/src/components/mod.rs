//! Reusable UI components for the landing page.
//!
//! ARCHITECTURE
//! ============
//! Components read feature state from context signals or own it locally and
//! delegate the demo rules to `state` and `util` modules.

pub mod back_to_top;
pub mod demo_section;
pub mod gallery_demo;
pub mod header;
pub mod preloader;
pub mod report_card;
pub mod sections;
pub mod text_demo;
pub mod theme_switch;
pub mod upload_demo;
