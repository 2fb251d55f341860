//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns window-level listeners and delegates rendering details to
//! `components`.

pub mod landing;
