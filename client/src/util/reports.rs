//! Canned result reports for the media and gallery demos.
//!
//! Reports are plain data; `components::report_card` owns the markup. The
//! figures are fixed copy, not measurements.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

/// Accent used for a banner or score bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Good,
    Alert,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "tone-info",
            Self::Good => "tone-good",
            Self::Alert => "tone-alert",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Info,
    Check,
    Warning,
}

impl Icon {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "fas fa-info",
            Self::Check => "fas fa-check",
            Self::Warning => "fas fa-exclamation-triangle",
        }
    }
}

/// A scored metric rendered as a bar plus a `Band (NN%)` caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub percent: u8,
    pub band: &'static str,
    pub tone: Tone,
}

impl Metric {
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} ({}%)", self.band, self.percent)
    }

    #[must_use]
    pub fn bar_width(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// Closing block of a report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Details {
    Paragraph { heading: &'static str, body: &'static str },
    Issues { heading: &'static str, items: &'static [&'static str] },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub tone: Tone,
    pub icon: Icon,
    pub title: &'static str,
    pub intro: &'static str,
    pub metrics: Vec<Metric>,
    pub processing_time: Option<&'static str>,
    pub details: Details,
}

impl Report {
    /// Number of grid columns the metric row needs.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.metrics.len() + usize::from(self.processing_time.is_some())
    }
}

/// Result of the image verification demo.
#[must_use]
pub fn image_report() -> Report {
    Report {
        tone: Tone::Info,
        icon: Icon::Info,
        title: "Analysis Result",
        intro: "This is a simulated demo. In a real application, the AI would analyze the image for signs of manipulation, generated content, or other forms of deception.",
        metrics: vec![
            Metric { label: "Manipulation Score", percent: 25, band: "Low", tone: Tone::Good },
            Metric { label: "AI Generated Score", percent: 15, band: "Very Low", tone: Tone::Good },
        ],
        processing_time: None,
        details: Details::Paragraph {
            heading: "Conclusion",
            body: "This image appears to be authentic with a high degree of confidence. No signs of digital manipulation or AI generation were detected.",
        },
    }
}

/// Result of the video analysis demo.
#[must_use]
pub fn video_report() -> Report {
    Report {
        tone: Tone::Info,
        icon: Icon::Info,
        title: "Analysis Result",
        intro: "This is a simulated demo. In a real application, the AI would analyze the video for signs of manipulation, splicing, or deepfake content.",
        metrics: vec![
            Metric { label: "Manipulation Score", percent: 15, band: "Very Low", tone: Tone::Good },
            Metric { label: "Deepfake Score", percent: 10, band: "Very Low", tone: Tone::Good },
        ],
        processing_time: None,
        details: Details::Paragraph {
            heading: "Conclusion",
            body: "This video appears to be authentic with a high degree of confidence. No significant signs of digital manipulation, splicing, or deepfake content were detected.",
        },
    }
}

/// Outcome attached to a gallery sample through its `data-result` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryVerdict {
    Fake,
    Authentic,
}

impl GalleryVerdict {
    /// Only the exact tag `"fake"` marks a sample as fake.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        if tag == Some("fake") { Self::Fake } else { Self::Authentic }
    }

    #[must_use]
    pub fn report(self) -> Report {
        match self {
            Self::Fake => fake_report(),
            Self::Authentic => authentic_report(),
        }
    }
}

const FAKE_ISSUES: &[&str] = &[
    "Inconsistent facial features detected",
    "Unnatural lighting and shadows",
    "Artifacts around facial boundaries",
    "Irregular texture patterns",
];

fn fake_report() -> Report {
    Report {
        tone: Tone::Alert,
        icon: Icon::Warning,
        title: "Likely AI-Generated Content Detected",
        intro: "Our system has detected characteristics consistent with AI-generated or manipulated content.",
        metrics: vec![
            Metric { label: "Deepfake Score", percent: 85, band: "High", tone: Tone::Alert },
            Metric { label: "Confidence", percent: 90, band: "Very High", tone: Tone::Good },
        ],
        processing_time: Some("0.42s"),
        details: Details::Issues { heading: "Detected Issues", items: FAKE_ISSUES },
    }
}

fn authentic_report() -> Report {
    Report {
        tone: Tone::Good,
        icon: Icon::Check,
        title: "Likely Authentic Content",
        intro: "Our system has not detected significant signs of AI-generation or manipulation in this content.",
        metrics: vec![
            Metric { label: "Deepfake Score", percent: 12, band: "Very Low", tone: Tone::Good },
            Metric { label: "Confidence", percent: 95, band: "Very High", tone: Tone::Good },
        ],
        processing_time: Some("0.38s"),
        details: Details::Paragraph {
            heading: "Analysis Summary",
            body: "No significant indicators of manipulation were detected in this content. The facial features, lighting, and textures are consistent with authentic imagery.",
        },
    }
}

/// A sample in the deepfake gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GallerySample {
    pub id: &'static str,
    pub src: &'static str,
    pub caption: &'static str,
    pub tag: &'static str,
}

pub const GALLERY: &[GallerySample] = &[
    GallerySample { id: "sample-1", src: "/images/gallery-1.svg", caption: "Sample 1", tag: "real" },
    GallerySample { id: "sample-2", src: "/images/gallery-2.svg", caption: "Sample 2", tag: "fake" },
    GallerySample { id: "sample-3", src: "/images/gallery-3.svg", caption: "Sample 3", tag: "real" },
    GallerySample { id: "sample-4", src: "/images/gallery-4.svg", caption: "Sample 4", tag: "fake" },
];
