//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder for configuring a [`Machine`](crate::engine::Machine)
//! and the [`tagged_enum!`](crate::tagged_enum) macro for declaring states and
//! events with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
