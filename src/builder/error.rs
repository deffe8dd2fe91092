//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Persistent fields not specified. Call .fsm(value) before .build()")]
    MissingFsm,

    #[error("History limit must be at least 1")]
    InvalidHistoryLimit,
}
