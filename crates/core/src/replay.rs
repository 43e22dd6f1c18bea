//! Headless fixed-step replay of an input journal.

use crate::game::Game;
use crate::journal::{InputJournal, InputPayload};
use crate::types::GamePhase;

/// The fixed step every replayed tick uses; the shell drives the live game
/// at the same rate.
pub const REPLAY_DT: f64 = 1.0 / 60.0;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// Records must be sorted by tick.
    OutOfOrder { index: usize },
    /// A record points past the replay horizon and can never be applied.
    BeyondHorizon { tick: u64 },
    /// A StartLevel record named a level that does not exist.
    UnknownLevel(u8),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_tick: u64,
    pub final_score: u32,
    pub final_phase: GamePhase,
    pub final_snapshot_hash: u64,
}

/// Re-run a journal against a fresh game for `max_ticks` frames, applying
/// each record at its recorded tick boundary.
pub fn replay_to_end(journal: &InputJournal, max_ticks: u64) -> Result<ReplayResult, ReplayError> {
    for (index, window) in journal.inputs.windows(2).enumerate() {
        if window[1].tick < window[0].tick {
            return Err(ReplayError::OutOfOrder { index: index + 1 });
        }
    }
    if let Some(last) = journal.inputs.last()
        && last.tick >= max_ticks
    {
        return Err(ReplayError::BeyondHorizon { tick: last.tick });
    }

    let mut game = Game::new(journal.seed);
    let mut records = journal.inputs.iter().peekable();

    for tick in 0..max_ticks {
        while let Some(record) = records.peek()
            && record.tick == tick
        {
            match record.payload {
                InputPayload::StartLevel(number) => {
                    game.start_level(number).map_err(|_| ReplayError::UnknownLevel(number))?;
                }
                InputPayload::KeyDown(key) => game.key_down(key),
                InputPayload::KeyUp(key) => game.key_up(key),
            }
            records.next();
        }
        game.tick(REPLAY_DT);
    }

    Ok(ReplayResult {
        final_tick: max_ticks,
        final_score: game.score(),
        final_phase: game.phase(),
        final_snapshot_hash: game.snapshot_hash(),
    })
}
