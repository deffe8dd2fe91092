//! The imperative shell around the domain's pure transition logic.
//!
//! [`Machine`] owns the current state and the [`Fsm`](crate::core::Fsm)
//! implementor, and runs the dispatch algorithm:
//!
//! 1. remember the tag of the current state;
//! 2. move the state into `on_event` and install what it returns;
//! 3. if the tag changed, call `on_exit(old_tag)` and then `on_enter(&mut new_state)`.

mod machine;
mod outcome;

pub use machine::Machine;
pub use outcome::{DispatchOutcome, MachineError};
