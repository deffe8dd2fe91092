//! Vending machine domain shared by the integration tests.

#![allow(dead_code)]

use tagfsm::{tagged_enum, Fsm, Tagged, VariantTag};

/// Number of unique items the vending machine can hold.
pub const NUM_ITEMS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorKind {
    OutOfStock,
    InsufficientFunds,
}

tagged_enum! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum VendingState => VendingTag {
        /// Cash (in pennies) deposited so far.
        Idle { funds: u32 },
        Errored { error: ErrorKind },
        FetchingItem { row: usize, col: usize },
    }
    error: [Errored]
}

#[derive(Debug, Clone)]
pub enum VendingEvent {
    ButtonPressed { index: usize },
    /// Value of the coin, in pennies.
    CoinInserted { value: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VendingMachine {
    pub stock: [u32; NUM_ITEMS],
    pub prices: [u32; NUM_ITEMS],
    pub change_given: Vec<u32>,
    pub powered: bool,
    pub hooks: Vec<String>,
}

impl VendingMachine {
    pub fn new() -> Self {
        Self {
            stock: [1; NUM_ITEMS],
            prices: [50; NUM_ITEMS],
            change_given: Vec::new(),
            powered: false,
            hooks: Vec::new(),
        }
    }

    pub fn with_item(mut self, index: usize, price: u32, stock: u32) -> Self {
        self.prices[index] = price;
        self.stock[index] = stock;
        self
    }

    fn give_change(&mut self, value: u32) {
        if value > 0 {
            self.change_given.push(value);
        }
    }
}

impl Fsm for VendingMachine {
    type State = VendingState;
    type Event = VendingEvent;

    fn on_event(&mut self, state: VendingState, event: &VendingEvent) -> VendingState {
        match (state, event) {
            (VendingState::Idle { funds }, VendingEvent::ButtonPressed { index }) => {
                let index = *index;
                let in_stock = self.stock.get(index).is_some_and(|&n| n > 0);
                if !in_stock {
                    return VendingState::Errored {
                        error: ErrorKind::OutOfStock,
                    };
                }
                let cost = self.prices[index];
                if cost > funds {
                    return VendingState::Errored {
                        error: ErrorKind::InsufficientFunds,
                    };
                }
                self.give_change(funds - cost);
                self.stock[index] -= 1;
                VendingState::FetchingItem {
                    row: index / 8,
                    col: index % 8,
                }
            }
            (VendingState::Idle { funds }, VendingEvent::CoinInserted { value }) => {
                VendingState::Idle {
                    funds: funds + value,
                }
            }
            // Ignore button presses in all other states.
            (state, VendingEvent::ButtonPressed { .. }) => state,
            // Spit the coins back out in non-idle states.
            (state, VendingEvent::CoinInserted { value }) => {
                self.give_change(*value);
                state
            }
        }
    }

    fn on_exit(&mut self, exited: VendingTag) {
        self.hooks.push(format!("exit {}", exited.name()));
        if exited == VendingTag::FetchingItem {
            self.powered = false;
        }
    }

    fn on_enter(&mut self, entered: &mut VendingState) {
        self.hooks.push(format!("enter {}", entered.variant_name()));
        if let VendingState::FetchingItem { .. } = entered {
            self.powered = true;
        }
    }
}
