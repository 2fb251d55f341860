//! User-facing validation failures raised by the demo widgets.
//!
//! Each variant's `Display` text is exactly what the page shows in its
//! blocking alert dialog.

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DemoError {
    /// Trimmed text analyzer input is below the minimum length.
    #[error("Please enter at least 50 characters to analyze.")]
    TextTooShort,

    /// The image widget received a file whose MIME type is not `image/*`.
    #[error("Please upload an image file")]
    NotAnImage,

    /// The video widget received a file whose MIME type is not `video/*`.
    #[error("Please upload a video file")]
    NotAVideo,
}
