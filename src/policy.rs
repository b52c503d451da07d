//! How soft conditions are treated during a run.

/// Decides whether a missing template source or an existing destination
/// aborts the run or is only reported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort on the first such condition.
    #[default]
    Strict,
    /// Log a warning and keep going.
    Lenient,
}

impl FailurePolicy {
    pub fn from_lenient_flag(lenient: bool) -> Self {
        if lenient {
            FailurePolicy::Lenient
        } else {
            FailurePolicy::Strict
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, FailurePolicy::Strict)
    }
}
