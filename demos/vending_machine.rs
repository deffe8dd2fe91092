//! Vending Machine
//!
//! A coin-operated vending machine with three states, shared stock and
//! price tables, and power management tied to the FetchingItem state.
//!
//! Key concepts:
//! - Persistent fields live on the `Fsm` implementor
//! - A single exhaustive `match` covers every (state, event) pair
//! - Shared fallback arms for events a state does not care about
//! - Exit/enter hooks only run when the variant changes
//!
//! Run with: RUST_LOG=tagfsm=trace cargo run --example vending_machine

use tagfsm::{tagged_enum, Fsm, Machine, Tagged, VariantTag};

/// Number of unique items the vending machine can hold.
const NUM_ITEMS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ErrorKind {
    OutOfStock,
    InsufficientFunds,
}

tagged_enum! {
    #[derive(Debug)]
    enum State => StateTag {
        /// Cash (in pennies) deposited so far.
        Idle { funds: u32 },
        Errored { error: ErrorKind },
        FetchingItem { row: usize, col: usize },
    }
    error: [Errored]
}

#[derive(Debug)]
enum Event {
    ButtonPressed { index: usize },
    CoinInserted { value: u32 },
}

struct VendingMachine {
    stock: [u32; NUM_ITEMS],
    prices: [u32; NUM_ITEMS],
}

impl VendingMachine {
    fn give_change(&mut self, value: u32) {
        if value > 0 {
            println!("  -> returning {value} pennies");
        }
    }

    fn enable_power_supplies(&mut self) {
        println!("  -> power supplies on");
    }

    fn disable_power_supplies(&mut self) {
        println!("  -> power supplies off");
    }
}

impl Fsm for VendingMachine {
    type State = State;
    type Event = Event;

    fn on_event(&mut self, state: State, event: &Event) -> State {
        match (state, event) {
            (State::Idle { funds }, Event::ButtonPressed { index }) => {
                let index = *index;
                if !self.stock.get(index).is_some_and(|&n| n > 0) {
                    return State::Errored {
                        error: ErrorKind::OutOfStock,
                    };
                }
                let cost = self.prices[index];
                if cost > funds {
                    return State::Errored {
                        error: ErrorKind::InsufficientFunds,
                    };
                }
                self.give_change(funds - cost);
                self.stock[index] -= 1;
                State::FetchingItem {
                    row: index / 8,
                    col: index % 8,
                }
            }
            (State::Idle { funds }, Event::CoinInserted { value }) => State::Idle {
                funds: funds + value,
            },
            // Ignore button presses in all other states.
            (state, Event::ButtonPressed { .. }) => state,
            // Spit the coins back out in non-idle states.
            (state, Event::CoinInserted { value }) => {
                self.give_change(*value);
                state
            }
        }
    }

    fn on_exit(&mut self, exited: StateTag) {
        println!("  exit {}", exited.name());
        if exited == StateTag::FetchingItem {
            self.disable_power_supplies();
        }
    }

    fn on_enter(&mut self, entered: &mut State) {
        println!("  enter {}", entered.variant_name());
        if let State::FetchingItem { .. } = entered {
            self.enable_power_supplies();
        }
    }
}

fn main() {
    env_logger::init();

    println!("=== Vending Machine Example ===\n");

    let mut prices = [50; NUM_ITEMS];
    prices[19] = 75;
    let fsm = VendingMachine {
        stock: [2; NUM_ITEMS],
        prices,
    };
    let mut machine = Machine::new(fsm, State::Idle { funds: 0 });

    let events = [
        Event::CoinInserted { value: 25 },
        Event::CoinInserted { value: 75 },
        Event::ButtonPressed { index: 19 },
        Event::CoinInserted { value: 10 },
        Event::ButtonPressed { index: 3 },
    ];

    for event in &events {
        println!("{event:?}");
        match machine.dispatch(event) {
            Ok(outcome) if outcome.is_change() => {
                println!("  now {}", outcome.current().name())
            }
            Ok(outcome) => println!("  still {}", outcome.current().name()),
            Err(e) => {
                eprintln!("  dispatch failed: {e}");
                return;
            }
        }
    }

    if let Ok(state) = machine.state() {
        println!("\nFinal state: {state:?}");
    }
    println!("Stock left for item 19: {}", machine.fsm().stock[19]);

    println!("\n=== Example Complete ===");
}
