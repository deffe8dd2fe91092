//! The domain-side contract of a state machine.
//!
//! A domain implements [`Fsm`] on a struct whose fields are the machine's
//! persistent data. The struct never sees the [`Machine`](crate::engine::Machine)
//! that drives it, so handlers and hooks cannot re-enter `dispatch`.

use super::tag::Tagged;

/// Tag type of an [`Fsm`]'s state enum.
pub type TagOf<F> = <<F as Fsm>::State as Tagged>::Tag;

/// Transition logic and lifecycle hooks for one state machine.
///
/// # Coverage
///
/// `on_event` is normally a single `match (state, event)`. The compiler rejects
/// the implementation if any (state variant, event variant) pair is left
/// unhandled, so coverage gaps never reach runtime. A `(state, _)` or
/// `(_, Event::X)` arm serves as a shared fallback for several pairs.
///
/// The hooks default to no-ops. Overriding one means writing a single function
/// whose `match` covers every state variant, explicitly or with a `_` arm.
///
/// # Example
///
/// ```rust
/// use tagfsm::{tagged_enum, Fsm, Machine};
///
/// tagged_enum! {
///     #[derive(Debug, PartialEq)]
///     pub enum Turnstile => TurnstileTag {
///         Locked,
///         Unlocked { credit: u32 },
///     }
/// }
///
/// pub enum Input {
///     Coin,
///     Push,
/// }
///
/// #[derive(Default)]
/// struct Gate {
///     passed: u32,
/// }
///
/// impl Fsm for Gate {
///     type State = Turnstile;
///     type Event = Input;
///
///     fn on_event(&mut self, state: Turnstile, event: &Input) -> Turnstile {
///         match (state, event) {
///             (Turnstile::Locked, Input::Coin) => Turnstile::Unlocked { credit: 1 },
///             (Turnstile::Unlocked { credit }, Input::Coin) => {
///                 Turnstile::Unlocked { credit: credit + 1 }
///             }
///             (Turnstile::Unlocked { credit }, Input::Push) if credit > 1 => {
///                 self.passed += 1;
///                 Turnstile::Unlocked { credit: credit - 1 }
///             }
///             (Turnstile::Unlocked { .. }, Input::Push) => {
///                 self.passed += 1;
///                 Turnstile::Locked
///             }
///             (Turnstile::Locked, Input::Push) => Turnstile::Locked,
///         }
///     }
/// }
///
/// let mut machine = Machine::new(Gate::default(), Turnstile::Locked);
/// machine.dispatch(&Input::Coin).unwrap();
/// machine.dispatch(&Input::Push).unwrap();
///
/// assert_eq!(machine.state().unwrap(), &Turnstile::Locked);
/// assert_eq!(machine.fsm().passed, 1);
/// ```
pub trait Fsm {
    /// The closed set of states.
    type State: Tagged;

    /// Events accepted by the machine.
    type Event;

    /// Compute the next state from the current one and an event.
    ///
    /// The current state is moved in; once this returns, its payload is gone.
    /// Returning the same variant (with or without a modified payload) does
    /// not fire any hook.
    fn on_event(&mut self, state: Self::State, event: &Self::Event) -> Self::State;

    /// Called after a variant change with the tag of the variant that was left.
    ///
    /// Only the tag is available: the old payload was consumed by `on_event`.
    fn on_exit(&mut self, _exited: TagOf<Self>) {}

    /// Called right after `on_exit` with the freshly installed state.
    ///
    /// The state may be adjusted in place before `dispatch` returns.
    fn on_enter(&mut self, _entered: &mut Self::State) {}
}
