//! Wrapping progress and the labels derived from it.

/// Progress value at and above which wrapping counts as finished.
pub const COMPLETE_AT: u32 = 100;

/// Coarse wrapping phase, a pure function of the progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapPhase {
    InProgress,
    Complete,
}

impl WrapPhase {
    /// Phase for a progress percentage.
    #[must_use]
    pub fn from_progress(percent: u32) -> Self {
        if percent >= COMPLETE_AT {
            Self::Complete
        } else {
            Self::InProgress
        }
    }

    /// Human-readable message label.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            Self::Complete => "complete",
        }
    }

    /// Short status label.
    #[must_use]
    pub fn status(self) -> &'static str {
        match self {
            Self::InProgress => "ACTIVE",
            Self::Complete => "DONE",
        }
    }
}

/// Everything the progress widgets display for one progress value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub percent: u32,
    /// Bar width, e.g. `"75%"`.
    pub bar_width: String,
    /// Percentage text, e.g. `"75%"`.
    pub text: String,
    pub phase: WrapPhase,
}

impl ProgressView {
    #[must_use]
    pub fn new(percent: u32) -> Self {
        Self {
            percent,
            bar_width: format!("{percent}%"),
            text: format!("{percent}%"),
            phase: WrapPhase::from_progress(percent),
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.phase.message()
    }

    #[must_use]
    pub fn status(&self) -> &'static str {
        self.phase.status()
    }
}
