//! Simulated AI-text detection.
//!
//! Nothing here inspects the wording. The "probabilities" are drawn from a
//! band chosen by word count, which is all the demo needs to look plausible.

#[cfg(test)]
#[path = "text_analysis_test.rs"]
mod text_analysis_test;

use rand::Rng;

use crate::util::error::DemoError;

pub const MIN_CHARS: usize = 50;
/// Inputs with more words than this fall into the high-AI band.
pub const LONG_TEXT_WORDS: usize = 100;
pub const LONG_TEXT_BASE: f64 = 0.7;
pub const SHORT_TEXT_BASE: f64 = 0.3;
/// Width of the random band added on top of the base.
pub const JITTER: f64 = 0.2;
pub const CONFIDENCE_BASE: f64 = 0.75;

const AI_EXPLANATION: &str = "This text shows patterns consistent with AI-generated content. The analysis detected repetitive structures and predictable word choices typical of language models.";
const HUMAN_EXPLANATION: &str = "This text exhibits characteristics consistent with human-written content. It contains natural flow, varied sentence structures, and unpredictable word choices.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    LikelyAi,
    LikelyHuman,
}

impl Verdict {
    #[must_use]
    pub fn explanation(self) -> &'static str {
        match self {
            Self::LikelyAi => AI_EXPLANATION,
            Self::LikelyHuman => HUMAN_EXPLANATION,
        }
    }
}

/// One simulated analysis result. Probabilities are fractions in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextAnalysis {
    pub human: f64,
    pub ai: f64,
    pub confidence: f64,
    pub verdict: Verdict,
}

impl TextAnalysis {
    #[must_use]
    pub fn human_label(&self) -> String {
        percent_label(self.human)
    }

    #[must_use]
    pub fn ai_label(&self) -> String {
        percent_label(self.ai)
    }

    #[must_use]
    pub fn confidence_label(&self) -> String {
        percent_label(self.confidence)
    }
}

/// Whitespace as the browser's `String.prototype.trim` sees it: Unicode
/// `White_Space` minus NEL, plus the byte-order mark.
#[must_use]
pub fn is_trim_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim the input and enforce the minimum length, counted in UTF-16 code
/// units like the page's textarea.
pub fn validate_input(raw: &str) -> Result<&str, DemoError> {
    let text = raw.trim_matches(is_trim_whitespace);
    if text.encode_utf16().count() < MIN_CHARS {
        return Err(DemoError::TextTooShort);
    }
    Ok(text)
}

/// Word count as the page has always computed it: pieces between single spaces.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

pub fn analyze<R: Rng + ?Sized>(text: &str, rng: &mut R) -> TextAnalysis {
    let jitter = rng.random::<f64>() * JITTER;
    let base = if word_count(text) > LONG_TEXT_WORDS { LONG_TEXT_BASE } else { SHORT_TEXT_BASE };
    let ai = base + jitter;
    let human = 1.0 - ai;
    let confidence = CONFIDENCE_BASE + rng.random::<f64>() * JITTER;
    let verdict = if ai > 0.5 { Verdict::LikelyAi } else { Verdict::LikelyHuman };
    TextAnalysis { human, ai, confidence, verdict }
}

/// Format a fraction as a one-decimal percentage, e.g. `0.8123` → `81.2%`.
#[must_use]
pub fn percent_label(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
