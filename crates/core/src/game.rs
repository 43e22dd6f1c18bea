//! Level progression: which ruleset is live, restarts on loss, advances on
//! win, and forwards input to the running level.

use crate::level::{Layout, Level};
use crate::seed::derive_level_seed;
use crate::snapshot::Snapshot;
use crate::types::{GameError, GamePhase, Key, LevelId, Rules};

pub struct Game {
    seed: u64,
    tick: u64,
    phase: GamePhase,
    level: Option<Level>,
    layout: Layout,
    /// Restart counter per level, so a restarted level reseeds differently
    /// but the whole run stays reproducible.
    attempt: u32,
    god_mode: bool,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            tick: 0,
            phase: GamePhase::Menu,
            level: None,
            layout: Layout::standard(),
            attempt: 0,
            god_mode: false,
        }
    }

    /// Explicit start from the menu (or a jump between levels).
    pub fn start_level(&mut self, number: u8) -> Result<(), GameError> {
        let id = LevelId::from_number(number).ok_or(GameError::UnknownLevel(number))?;
        self.attempt = 0;
        self.enter_level(id);
        Ok(())
    }

    fn enter_level(&mut self, id: LevelId) {
        let level_seed = derive_level_seed(self.seed, id.number(), self.attempt);
        let mut level = Level::new(Rules::for_level(id), level_seed, &self.layout);
        level.set_god_mode(self.god_mode);
        self.level = Some(level);
        self.phase = GamePhase::Playing(id);
    }

    /// One frame. A loss restarts the current level from scratch; a win
    /// advances to the next level, or back to the menu after level 3.
    pub fn tick(&mut self, dt: f64) {
        let GamePhase::Playing(id) = self.phase else {
            return;
        };
        let Some(level) = self.level.as_mut() else {
            return;
        };

        level.tick(dt);
        self.tick += 1;

        if level.is_lose() {
            self.attempt += 1;
            self.enter_level(id);
        } else if level.is_win() {
            match id.next() {
                Some(next) => {
                    self.attempt = 0;
                    self.enter_level(next);
                }
                None => {
                    self.phase = GamePhase::Menu;
                    self.level = None;
                }
            }
        }
    }

    /// Press edge. Menu return and the god-mode toggle act here; directional
    /// tokens join the held set consumed by the player-motion update.
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::ReturnToMenu => {
                self.phase = GamePhase::Menu;
                self.level = None;
            }
            Key::ToggleGodMode => {
                self.set_god_mode(!self.god_mode);
            }
            _ => {
                if let Some(level) = self.level.as_mut() {
                    level.press(key);
                }
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if let Some(level) = self.level.as_mut() {
            level.release(key);
        }
    }

    pub fn set_god_mode(&mut self, god_mode: bool) {
        self.god_mode = god_mode;
        if let Some(level) = self.level.as_mut() {
            level.set_god_mode(god_mode);
        }
    }

    pub fn god_mode(&self) -> bool {
        self.god_mode
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn score(&self) -> u32 {
        self.level.as_ref().map_or(0, Level::score)
    }

    pub fn is_win(&self) -> bool {
        self.level.as_ref().is_some_and(Level::is_win)
    }

    pub fn is_lose(&self) -> bool {
        self.level.as_ref().is_some_and(Level::is_lose)
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.phase, self.god_mode, self.level.as_ref())
    }

    /// xxh3 over the canonical simulation state, for determinism checks.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u8(match self.phase {
            GamePhase::Menu => 0,
            GamePhase::Playing(id) => id.number(),
        });
        hasher.write_u8(self.god_mode as u8);

        if let Some(level) = self.level.as_ref() {
            hasher.write_u32(level.score);
            hasher.write_u8(level.bowl_poisoned as u8);
            hasher.write_u8(level.reset_armed as u8);
            hasher.write_i32(level.thirst_timer);
            hasher.write_i32(level.monitor_state.route_timer);
            for mover in [&level.player, &level.monitor] {
                hasher.write_u64(mover.pos.x.to_bits());
                hasher.write_u64(mover.pos.y.to_bits());
                hasher.write_u64(mover.vel.x.to_bits());
                hasher.write_u64(mover.vel.y.to_bits());
            }
            hasher.write_usize(level.active_clusters.len());
            for id in &level.active_clusters {
                let cluster = &level.clusters[*id];
                hasher.write_u8(cluster.safe as u8);
                hasher.write_u64(cluster.opacity.to_bits());
                hasher.write_i32(cluster.timer);
                hasher.write_usize(cluster.roster.len());
            }
            hasher.write_usize(level.guests.len());
            for guest in level.guests.values() {
                hasher.write_u64(guest.pos.x.to_bits());
                hasher.write_u64(guest.pos.y.to_bits());
            }
        }

        hasher.finish()
    }
}
