//! Event Queue
//!
//! Handlers never call back into the machine. When a transition needs to
//! trigger further events, the domain sends them into a channel and the
//! driver drains it after each dispatch returns.
//!
//! Run with: RUST_LOG=tagfsm=debug cargo run --example event_queue

use std::sync::mpsc::{channel, Sender};
use tagfsm::{tagged_enum, Fsm, Machine};

tagged_enum! {
    #[derive(Debug)]
    enum Download => DownloadTag {
        Idle,
        Fetching { chunk: u32 },
        Verifying,
        Done,
    }
    final: [Done]
}

#[derive(Debug)]
enum Event {
    Request,
    ChunkReceived,
    Verified,
}

struct Downloader {
    chunks: u32,
    outbox: Sender<Event>,
}

impl Downloader {
    fn follow_up(&self, event: Event) {
        // The receiver outlives the machine in this driver.
        let _ = self.outbox.send(event);
    }
}

impl Fsm for Downloader {
    type State = Download;
    type Event = Event;

    fn on_event(&mut self, state: Download, event: &Event) -> Download {
        match (state, event) {
            (Download::Idle, Event::Request) => Download::Fetching { chunk: 0 },
            (Download::Fetching { chunk }, Event::ChunkReceived) if chunk + 1 < self.chunks => {
                self.follow_up(Event::ChunkReceived);
                Download::Fetching { chunk: chunk + 1 }
            }
            (Download::Fetching { .. }, Event::ChunkReceived) => Download::Verifying,
            (Download::Verifying, Event::Verified) => Download::Done,
            (state, _) => state,
        }
    }

    fn on_enter(&mut self, entered: &mut Download) {
        match entered {
            Download::Fetching { .. } => self.follow_up(Event::ChunkReceived),
            Download::Verifying => self.follow_up(Event::Verified),
            Download::Idle | Download::Done => {}
        }
    }
}

fn main() {
    env_logger::init();

    println!("=== Event Queue Example ===\n");

    let (outbox, inbox) = channel();
    let downloader = Downloader { chunks: 4, outbox };
    let mut machine = Machine::new(downloader, Download::Idle);

    let mut next = Some(Event::Request);
    while let Some(event) = next {
        if let Err(e) = machine.dispatch(&event) {
            eprintln!("dispatch failed: {e}");
            return;
        }
        if let Ok(state) = machine.state() {
            println!("{event:?} -> {state:?}");
        }
        next = inbox.try_recv().ok();
    }

    println!("\nFinished: {}", machine.is_final());
    println!("\n=== Example Complete ===");
}
