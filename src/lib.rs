//! Tagfsm: event-driven state machines over closed enums
//!
//! States and events are plain Rust enums. The domain writes its transition
//! logic as one exhaustive `match`, so a missing (state, event) pair is a
//! compile error rather than a runtime surprise. The engine owns only the
//! dispatch protocol.
//!
//! # Core Concepts
//!
//! - **Tags**: every state enum has a payload-free companion enum (`Tagged`)
//! - **Fsm**: the domain's transition handler plus optional exit/enter hooks
//! - **Machine**: owns the current state and the domain's persistent fields
//!
//! # Dispatch Protocol
//!
//! `Machine::dispatch` moves the current state into `Fsm::on_event` and
//! installs the returned state. Only when the variant changed does it call
//! `Fsm::on_exit` with the old *tag* (the old payload is gone by then),
//! followed by `Fsm::on_enter` with a mutable reference to the new state.
//!
//! # Example
//!
//! ```rust
//! use tagfsm::{tagged_enum, DispatchOutcome, Fsm, Machine};
//!
//! tagged_enum! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum Light => LightTag {
//!         Red,
//!         Green { cars: u32 },
//!     }
//! }
//!
//! pub enum Signal {
//!     Timer,
//!     CarPassed,
//! }
//!
//! #[derive(Default)]
//! struct Junction {
//!     switches: u32,
//! }
//!
//! impl Fsm for Junction {
//!     type State = Light;
//!     type Event = Signal;
//!
//!     fn on_event(&mut self, state: Light, event: &Signal) -> Light {
//!         match (state, event) {
//!             (Light::Red, Signal::Timer) => Light::Green { cars: 0 },
//!             (Light::Green { .. }, Signal::Timer) => Light::Red,
//!             (Light::Green { cars }, Signal::CarPassed) => Light::Green { cars: cars + 1 },
//!             (Light::Red, Signal::CarPassed) => Light::Red,
//!         }
//!     }
//!
//!     fn on_enter(&mut self, _entered: &mut Light) {
//!         self.switches += 1;
//!     }
//! }
//!
//! let mut machine = Machine::new(Junction::default(), Light::Red);
//!
//! let outcome = machine.dispatch(&Signal::Timer).unwrap();
//! assert_eq!(outcome, DispatchOutcome::Changed { from: LightTag::Red, to: LightTag::Green });
//!
//! let outcome = machine.dispatch(&Signal::CarPassed).unwrap();
//! assert_eq!(outcome, DispatchOutcome::Stayed(LightTag::Green));
//!
//! assert_eq!(machine.state().unwrap(), &Light::Green { cars: 1 });
//! assert_eq!(machine.fsm().switches, 1);
//! ```

extern crate self as tagfsm;

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{tag_of, Fsm, TagOf, Tagged, TransitionHistory, TransitionRecord, VariantTag};
pub use crate::engine::{DispatchOutcome, Machine, MachineError};

#[doc(hidden)]
pub use serde as __serde;
