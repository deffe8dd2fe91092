//! Machine instance and the dispatch algorithm.

use crate::core::{Fsm, TagOf, Tagged, TransitionHistory, TransitionRecord, VariantTag};
use crate::engine::outcome::{DispatchOutcome, MachineError};
use chrono::Utc;
use log::{debug, trace, warn};
use std::borrow::Borrow;

/// A running state machine: the current state plus the domain's persistent
/// fields (the `F` value).
///
/// The state slot is only empty while a transition handler owns the old
/// state. If that handler panics, the slot stays empty and the machine is
/// poisoned: every state-reading operation returns [`MachineError::Poisoned`].
pub struct Machine<F: Fsm> {
    fsm: F,
    current: Option<F::State>,
    history: Option<TransitionHistory<TagOf<F>>>,
    dispatches: u64,
}

impl<F: Fsm> Machine<F> {
    /// Create a machine in `initial`, without history recording.
    ///
    /// Use [`MachineBuilder`](crate::builder::MachineBuilder) to enable history.
    pub fn new(fsm: F, initial: F::State) -> Self {
        Self::from_parts(fsm, initial, None)
    }

    pub(crate) fn from_parts(
        fsm: F,
        initial: F::State,
        history: Option<TransitionHistory<TagOf<F>>>,
    ) -> Self {
        debug!("machine created in {}", initial.variant_name());
        Self {
            fsm,
            current: Some(initial),
            history,
            dispatches: 0,
        }
    }

    /// Dispatch one event.
    ///
    /// Moves the current state into [`Fsm::on_event`], installs the state it
    /// returns, and, only if the variant changed, calls [`Fsm::on_exit`] with
    /// the old tag followed by [`Fsm::on_enter`] with the new state.
    ///
    /// A panic in `on_event` poisons the machine. A panic in a hook leaves
    /// the new state installed.
    pub fn dispatch(
        &mut self,
        event: &F::Event,
    ) -> Result<DispatchOutcome<TagOf<F>>, MachineError> {
        let Some(state) = self.current.take() else {
            warn!("dispatch refused: machine poisoned since dispatch #{}", self.dispatches);
            return Err(self.poisoned());
        };
        self.dispatches += 1;
        let dispatch = self.dispatches;
        let from = state.tag();

        let next = self.fsm.on_event(state, event);
        let to = next.tag();
        let entered = self.current.insert(next);

        trace!("dispatch #{}: {} -> {}", dispatch, from.name(), to.name());
        if to == from {
            return Ok(DispatchOutcome::Stayed(to));
        }

        debug!("leaving {} for {} (dispatch #{})", from.name(), to.name(), dispatch);
        if let Some(history) = self.history.as_mut() {
            history.push(TransitionRecord {
                from,
                to,
                timestamp: Utc::now(),
                dispatch,
            });
        }

        self.fsm.on_exit(from);
        self.fsm.on_enter(entered);

        Ok(DispatchOutcome::Changed { from, to })
    }

    /// Dispatch events in order, stopping at the first error.
    pub fn dispatch_all<I>(
        &mut self,
        events: I,
    ) -> Result<Vec<DispatchOutcome<TagOf<F>>>, MachineError>
    where
        I: IntoIterator,
        I::Item: Borrow<F::Event>,
    {
        events
            .into_iter()
            .map(|event| self.dispatch(event.borrow()))
            .collect()
    }

    /// Current state.
    pub fn state(&self) -> Result<&F::State, MachineError> {
        self.current.as_ref().ok_or_else(|| self.poisoned())
    }

    /// Tag of the current state.
    pub fn current_tag(&self) -> Result<TagOf<F>, MachineError> {
        self.state().map(Tagged::tag)
    }

    /// Persistent fields. Read-only: only handlers and hooks mutate them.
    pub fn fsm(&self) -> &F {
        &self.fsm
    }

    /// Whether the current variant is flagged final. `false` when poisoned.
    pub fn is_final(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|state| state.tag().is_final())
    }

    /// Whether the current variant is flagged as an error. `false` when poisoned.
    pub fn is_error(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|state| state.tag().is_error())
    }

    pub fn is_poisoned(&self) -> bool {
        self.current.is_none()
    }

    /// Number of dispatches started, including one that poisoned the machine.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatches
    }

    /// Variant-change history, if recording was enabled.
    pub fn history(&self) -> Option<&TransitionHistory<TagOf<F>>> {
        self.history.as_ref()
    }

    /// Tear the machine down into its persistent fields and current state.
    pub fn into_parts(self) -> Result<(F, F::State), MachineError> {
        match self.current {
            Some(state) => Ok((self.fsm, state)),
            None => Err(MachineError::Poisoned {
                dispatch: self.dispatches,
            }),
        }
    }

    fn poisoned(&self) -> MachineError {
        MachineError::Poisoned {
            dispatch: self.dispatches,
        }
    }
}
