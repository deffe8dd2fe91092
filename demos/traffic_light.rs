//! Traffic Light
//!
//! A cyclic state machine with a timed payload per state.
//! Demonstrates history recording through the builder.
//!
//! Run with: cargo run --example traffic_light

use tagfsm::{tagged_enum, Fsm, MachineBuilder, VariantTag};

tagged_enum! {
    #[derive(Debug)]
    enum Light => LightTag {
        Red { remaining: u32 },
        Green { remaining: u32 },
        Yellow { remaining: u32 },
    }
}

struct Tick;

struct Timings {
    red: u32,
    green: u32,
    yellow: u32,
    cycles: u32,
}

impl Fsm for Timings {
    type State = Light;
    type Event = Tick;

    fn on_event(&mut self, state: Light, _tick: &Tick) -> Light {
        match state {
            Light::Red { remaining: 0 } => Light::Green {
                remaining: self.green,
            },
            Light::Green { remaining: 0 } => Light::Yellow {
                remaining: self.yellow,
            },
            Light::Yellow { remaining: 0 } => Light::Red {
                remaining: self.red,
            },
            Light::Red { remaining } => Light::Red {
                remaining: remaining - 1,
            },
            Light::Green { remaining } => Light::Green {
                remaining: remaining - 1,
            },
            Light::Yellow { remaining } => Light::Yellow {
                remaining: remaining - 1,
            },
        }
    }

    fn on_exit(&mut self, exited: LightTag) {
        if exited == LightTag::Yellow {
            self.cycles += 1;
        }
    }
}

fn main() {
    env_logger::init();

    println!("=== Traffic Light Example ===\n");

    let timings = Timings {
        red: 3,
        green: 2,
        yellow: 1,
        cycles: 0,
    };
    let mut machine = match MachineBuilder::new()
        .fsm(timings)
        .initial(Light::Red { remaining: 0 })
        .history_limit(32)
        .build()
    {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("build failed: {e}");
            return;
        }
    };

    for _ in 0..20 {
        if let Err(e) = machine.dispatch(&Tick) {
            eprintln!("dispatch failed: {e}");
            return;
        }
    }

    if let Some(history) = machine.history() {
        let path: Vec<&str> = history.path().iter().map(|tag| tag.name()).collect();
        println!("Path: {}", path.join(" -> "));
    }
    println!("Completed cycles: {}", machine.fsm().cycles);

    println!("\n=== Example Complete ===");
}
