//! Core traits and types shared by every machine.
//!
//! - Tags: payload-free discriminants via `Tagged` / `VariantTag`
//! - The `Fsm` trait: transition handler and lifecycle hooks
//! - Variant-change history
//!
//! Nothing in this module performs side effects; the domain's handlers are
//! the only code that does.

mod fsm;
mod history;
mod tag;

pub use fsm::{Fsm, TagOf};
pub use history::{TransitionHistory, TransitionRecord};
pub use tag::{tag_of, Tagged, VariantTag};
