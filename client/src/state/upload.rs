//! Upload widget state shared by the image and video demos.
//!
//! Only the file's MIME type and a preview URL are ever looked at; file
//! contents are never read.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::util::error::DemoError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Class prefix for the widget's upload and result areas.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    #[must_use]
    pub fn mime_prefix(self) -> &'static str {
        match self {
            Self::Image => "image/",
            Self::Video => "video/",
        }
    }

    /// Value for the file input's `accept` attribute.
    #[must_use]
    pub fn accept(self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Video => "video/*",
        }
    }

    #[must_use]
    pub fn rejection(self) -> DemoError {
        match self {
            Self::Image => DemoError::NotAnImage,
            Self::Video => DemoError::NotAVideo,
        }
    }

    #[must_use]
    pub fn selected_caption(self) -> &'static str {
        match self {
            Self::Image => "Image selected",
            Self::Video => "Video selected",
        }
    }
}

/// Accept only MIME types under the widget's top-level type.
pub fn validate_mime(kind: MediaKind, mime: &str) -> Result<(), DemoError> {
    if mime.starts_with(kind.mime_prefix()) {
        Ok(())
    } else {
        Err(kind.rejection())
    }
}

/// The file currently shown in an upload area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub name: String,
    pub mime: String,
    /// `blob:` URL owned by this preview.
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadState {
    pub kind: MediaKind,
    pub preview: Option<Preview>,
    pub drag_over: bool,
}

impl UploadState {
    #[must_use]
    pub fn new(kind: MediaKind) -> Self {
        Self { kind, preview: None, drag_over: false }
    }

    /// Check a file's MIME type before any preview URL is created for it.
    pub fn check(&self, mime: &str) -> Result<(), DemoError> {
        validate_mime(self.kind, mime)
    }

    /// Show a validated file, returning the preview it replaces.
    ///
    /// A rejected file leaves the current preview in place.
    pub fn accept(&mut self, preview: Preview) -> Result<Option<Preview>, DemoError> {
        self.check(&preview.mime)?;
        Ok(self.preview.replace(preview))
    }

    #[must_use]
    pub fn can_verify(&self) -> bool {
        self.preview.is_some()
    }

    pub fn drag_enter(&mut self) {
        self.drag_over = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }
}
