//! Tick-stamped input journal. Together with the run seed it fully
//! determines a run; the tools crate replays journals headlessly.

use serde::{Deserialize, Serialize};

use crate::types::Key;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputRecord {
    /// Tick boundary the input is applied at, before that tick runs.
    pub tick: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    StartLevel(u8),
    KeyDown(Key),
    KeyUp(Key),
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: 1, seed, inputs: Vec::new() }
    }

    pub fn append(&mut self, tick: u64, payload: InputPayload) {
        self.inputs.push(InputRecord { tick, payload });
    }

    pub fn append_start_level(&mut self, tick: u64, number: u8) {
        self.append(tick, InputPayload::StartLevel(number));
    }

    pub fn append_key_down(&mut self, tick: u64, key: Key) {
        self.append(tick, InputPayload::KeyDown(key));
    }

    pub fn append_key_up(&mut self, tick: u64, key: Key) {
        self.append(tick, InputPayload::KeyUp(key));
    }
}
