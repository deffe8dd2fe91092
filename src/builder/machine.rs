//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Fsm, TransitionHistory};
use crate::engine::Machine;

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```
/// use tagfsm::{tagged_enum, Fsm, MachineBuilder};
///
/// tagged_enum! {
///     enum Lamp => LampTag { Off, On }
/// }
///
/// struct Switch;
///
/// impl Fsm for Switch {
///     type State = Lamp;
///     type Event = ();
///
///     fn on_event(&mut self, state: Lamp, _event: &()) -> Lamp {
///         match state {
///             Lamp::Off => Lamp::On,
///             Lamp::On => Lamp::Off,
///         }
///     }
/// }
///
/// let mut machine = MachineBuilder::new()
///     .fsm(Switch)
///     .initial(Lamp::Off)
///     .history_limit(16)
///     .build()
///     .unwrap();
///
/// machine.dispatch(&()).unwrap();
/// assert_eq!(machine.history().unwrap().len(), 1);
/// ```
pub struct MachineBuilder<F: Fsm> {
    fsm: Option<F>,
    initial: Option<F::State>,
    record_history: bool,
    history_limit: Option<usize>,
}

impl<F: Fsm> MachineBuilder<F> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            fsm: None,
            initial: None,
            record_history: false,
            history_limit: None,
        }
    }

    /// Set the persistent fields and transition logic (required).
    pub fn fsm(mut self, fsm: F) -> Self {
        self.fsm = Some(fsm);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: F::State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Record every variant change, without a retention limit.
    pub fn record_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    /// Record variant changes, keeping only the newest `limit` records.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.record_history = true;
        self.history_limit = Some(limit);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<F>, BuildError> {
        let fsm = self.fsm.ok_or(BuildError::MissingFsm)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let history = match (self.record_history, self.history_limit) {
            (_, Some(0)) => return Err(BuildError::InvalidHistoryLimit),
            (_, Some(limit)) => Some(TransitionHistory::bounded(limit)),
            (true, None) => Some(TransitionHistory::new()),
            (false, None) => None,
        };

        Ok(Machine::from_parts(fsm, initial, history))
    }
}

impl<F: Fsm> Default for MachineBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}
