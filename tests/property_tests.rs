//! Property-based tests for the dispatch protocol.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences.

use proptest::prelude::*;
use tagfsm::{
    tagged_enum, DispatchOutcome, Fsm, Machine, MachineBuilder, Tagged, VariantTag,
};

tagged_enum! {
    #[derive(Clone, PartialEq, Debug)]
    enum Task => TaskTag {
        Pending,
        Running { progress: u8 },
        Paused(u8),
        Complete,
        Failed(String),
    }
    final: [Complete, Failed]
    error: [Failed]
}

#[derive(Clone, Copy, Debug)]
enum Signal {
    Start,
    Step(u8),
    Pause,
    Resume,
    Fail,
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
enum Hook {
    Exit(TaskTag),
    Enter(TaskTag),
}

#[derive(Clone, Debug, PartialEq, Default)]
struct Scheduler {
    hooks: Vec<Hook>,
    steps: u32,
    resets: u32,
}

impl Fsm for Scheduler {
    type State = Task;
    type Event = Signal;

    fn on_event(&mut self, state: Task, event: &Signal) -> Task {
        match (state, event) {
            (Task::Pending, Signal::Start) => Task::Running { progress: 0 },
            (Task::Running { progress }, Signal::Step(n)) => {
                self.steps += 1;
                let progress = progress.saturating_add(*n);
                if progress >= 100 {
                    Task::Complete
                } else {
                    Task::Running { progress }
                }
            }
            (Task::Running { progress }, Signal::Pause) => Task::Paused(progress),
            (Task::Paused(progress), Signal::Resume) => Task::Running { progress },
            (Task::Running { progress }, Signal::Fail) => {
                Task::Failed(format!("failed at {progress}"))
            }
            (_, Signal::Reset) => {
                self.resets += 1;
                Task::Pending
            }
            (state, _) => state,
        }
    }

    fn on_exit(&mut self, exited: TaskTag) {
        self.hooks.push(Hook::Exit(exited));
    }

    fn on_enter(&mut self, entered: &mut Task) {
        self.hooks.push(Hook::Enter(entered.tag()));
    }
}

prop_compose! {
    fn arbitrary_signal()(variant in 0..6u8, amount in 0..60u8) -> Signal {
        match variant {
            0 => Signal::Start,
            1 => Signal::Step(amount),
            2 => Signal::Pause,
            3 => Signal::Resume,
            4 => Signal::Fail,
            _ => Signal::Reset,
        }
    }
}

prop_compose! {
    fn arbitrary_task()(variant in 0..5u8, progress in 0..100u8) -> Task {
        match variant {
            0 => Task::Pending,
            1 => Task::Running { progress },
            2 => Task::Paused(progress),
            3 => Task::Complete,
            _ => Task::Failed("seeded".to_string()),
        }
    }
}

proptest! {
    #[test]
    fn dispatch_is_deterministic(
        initial in arbitrary_task(),
        signals in prop::collection::vec(arbitrary_signal(), 0..40)
    ) {
        let mut first = Machine::new(Scheduler::default(), initial.clone());
        let mut second = Machine::new(Scheduler::default(), initial);

        let outcomes1 = first.dispatch_all(&signals).unwrap();
        let outcomes2 = second.dispatch_all(&signals).unwrap();

        prop_assert_eq!(outcomes1, outcomes2);
        prop_assert_eq!(first.state().unwrap(), second.state().unwrap());
        prop_assert_eq!(first.fsm(), second.fsm());
    }

    #[test]
    fn hooks_fire_in_pairs_iff_variant_changes(
        initial in arbitrary_task(),
        signals in prop::collection::vec(arbitrary_signal(), 1..40)
    ) {
        let mut machine = Machine::new(Scheduler::default(), initial);

        for signal in &signals {
            let before_tag = machine.current_tag().unwrap();
            let hooks_before = machine.fsm().hooks.len();

            let outcome = machine.dispatch(signal).unwrap();

            let after_tag = machine.current_tag().unwrap();
            let new_hooks = &machine.fsm().hooks[hooks_before..];
            prop_assert_eq!(outcome.previous(), before_tag);
            prop_assert_eq!(outcome.current(), after_tag);

            if before_tag == after_tag {
                prop_assert_eq!(outcome, DispatchOutcome::Stayed(after_tag));
                prop_assert!(new_hooks.is_empty());
            } else {
                prop_assert!(outcome.is_change());
                prop_assert_eq!(new_hooks, &[Hook::Exit(before_tag), Hook::Enter(after_tag)][..]);
            }
        }
    }

    #[test]
    fn history_path_matches_observed_changes(
        signals in prop::collection::vec(arbitrary_signal(), 0..40)
    ) {
        let mut machine = MachineBuilder::new()
            .fsm(Scheduler::default())
            .initial(Task::Pending)
            .record_history()
            .build()
            .unwrap();

        let outcomes = machine.dispatch_all(&signals).unwrap();
        let changes: Vec<_> = outcomes.iter().filter(|o| o.is_change()).collect();
        let history = machine.history().unwrap();

        prop_assert_eq!(history.len(), changes.len());
        prop_assert_eq!(history.len() * 2, machine.fsm().hooks.len());
        if let Some(last) = history.last() {
            prop_assert_eq!(last.to, machine.current_tag().unwrap());
        }
        for (record, outcome) in history.transitions().zip(changes) {
            prop_assert_eq!(
                *outcome,
                DispatchOutcome::Changed { from: record.from, to: record.to }
            );
        }
    }

    #[test]
    fn bounded_history_never_exceeds_limit(
        limit in 1..8usize,
        signals in prop::collection::vec(arbitrary_signal(), 0..60)
    ) {
        let mut machine = MachineBuilder::new()
            .fsm(Scheduler::default())
            .initial(Task::Pending)
            .history_limit(limit)
            .build()
            .unwrap();

        machine.dispatch_all(&signals).unwrap();

        prop_assert!(machine.history().unwrap().len() <= limit);
    }

    #[test]
    fn final_flag_tracks_current_variant(
        initial in arbitrary_task(),
        signals in prop::collection::vec(arbitrary_signal(), 0..20)
    ) {
        let mut machine = Machine::new(Scheduler::default(), initial);
        machine.dispatch_all(&signals).unwrap();

        let tag = machine.current_tag().unwrap();
        prop_assert_eq!(machine.is_final(), tag.is_final());
        prop_assert_eq!(machine.is_error(), tag == TaskTag::Failed);
    }

    #[test]
    fn tag_name_is_stable(task in arbitrary_task()) {
        let name1 = task.variant_name();
        let name2 = task.tag().name();
        prop_assert_eq!(name1, name2);
        prop_assert!(TaskTag::VARIANTS.contains(&task.tag()));
    }

    #[test]
    fn tag_roundtrip_serialization(task in arbitrary_task()) {
        let tag = task.tag();
        let json = serde_json::to_string(&tag).unwrap();
        let deserialized: TaskTag = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(tag, deserialized);
    }
}
