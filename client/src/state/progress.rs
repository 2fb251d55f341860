//! Simulated progress bar for the text analyzer.
//!
//! The component drives [`Progress::tick`] from a 30 ms interval and drops
//! the interval once a tick reports completion.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::util::error::DemoError;
use crate::util::text_analysis;

pub const TICK_MS: u32 = 30;
pub const STEP: u32 = 2;
pub const COMPLETE: u32 = 100;

pub const LABEL_IDLE: &str = "Ready to analyze";
pub const LABEL_RUNNING: &str = "Analyzing...";
pub const LABEL_DONE: &str = "Analysis Complete";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressPhase {
    #[default]
    Idle,
    Running,
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub value: u32,
    pub phase: ProgressPhase,
}

impl Progress {
    /// Validate the analyzer input, then start a run.
    ///
    /// Invalid input is rejected before the bar is touched. `Ok(None)` means
    /// a run is already in flight; `Ok(Some(text))` carries the trimmed input
    /// for the run that just started.
    pub fn begin(&mut self, raw: &str) -> Result<Option<String>, DemoError> {
        let text = text_analysis::validate_input(raw)?;
        if !self.start() {
            return Ok(None);
        }
        Ok(Some(text.to_owned()))
    }

    /// Begin a run from zero. Ignored while a run is already in flight.
    ///
    /// Returns whether a new run started.
    pub fn start(&mut self) -> bool {
        if self.phase == ProgressPhase::Running {
            return false;
        }
        self.value = 0;
        self.phase = ProgressPhase::Running;
        true
    }

    /// Advance one interval step. Returns `true` on the completing tick.
    pub fn tick(&mut self) -> bool {
        if self.phase != ProgressPhase::Running {
            return false;
        }
        self.value = (self.value + STEP).min(COMPLETE);
        if self.value >= COMPLETE {
            self.phase = ProgressPhase::Done;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == ProgressPhase::Running
    }

    #[must_use]
    pub fn width(&self) -> String {
        format!("{}%", self.value)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.phase {
            ProgressPhase::Idle => LABEL_IDLE,
            ProgressPhase::Running => LABEL_RUNNING,
            ProgressPhase::Done => LABEL_DONE,
        }
    }
}
