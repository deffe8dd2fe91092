//! Dispatch results and runtime errors.

use crate::core::VariantTag;
use thiserror::Error;

/// What a single dispatch did to the machine's variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome<T: VariantTag> {
    /// The handler returned the same variant; no hooks ran.
    Stayed(T),

    /// The variant changed; the exit hook ran for `from`, then the enter
    /// hook for `to`.
    Changed { from: T, to: T },
}

impl<T: VariantTag> DispatchOutcome<T> {
    /// Tag held after the dispatch.
    pub fn current(&self) -> T {
        match self {
            Self::Stayed(tag) => *tag,
            Self::Changed { to, .. } => *to,
        }
    }

    /// Tag held before the dispatch.
    pub fn previous(&self) -> T {
        match self {
            Self::Stayed(tag) => *tag,
            Self::Changed { from, .. } => *from,
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Errors returned by a [`Machine`](super::Machine) at runtime.
///
/// Coverage gaps are compile errors and have no variant here.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Machine is poisoned: transition handler panicked during dispatch #{dispatch}")]
    Poisoned { dispatch: u64 },
}
