//! One running level: owns every mover, zone, timer and counter, and runs
//! the fixed per-frame rule pipeline.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use crate::cluster::Cluster;
use crate::mover::{MonitorState, Mover};
use crate::types::{ActorKind, Circle, ClusterId, GuestId, Key, Rules, Vec2};

mod clusters;
mod monitor;
mod transit;

#[cfg(test)]
mod tests;

pub const MONITOR_SPEED: f64 = 130.0;
pub const PLAYER_SPEED: f64 = 125.0;
pub const GUEST_SPEED: f64 = 150.0;
pub const BOWL_RADIUS: f64 = 20.0;
pub const EXIT_RADIUS: f64 = 5.0;
pub const WIN_TARGET: u32 = 24;
/// Frames between thirst triggers; a trigger fires only at exactly zero.
pub const THIRST_TIMER_FRAMES: i32 = 180;

/// Fixed placement of everything a level starts with.
#[derive(Clone, Debug)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub bowl: Vec2,
    pub exit: Vec2,
    pub player_spawn: Vec2,
    pub monitor_spawn: Vec2,
    pub cluster_centers: Vec<Vec2>,
}

impl Layout {
    /// The shipped arrangement: a 600x600 room with a pentagon of five
    /// zones around the bowl.
    pub fn standard() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            bowl: Vec2::new(300.0, 300.0),
            exit: Vec2::new(300.0, 600.0),
            player_spawn: Vec2::new(300.0, 500.0),
            monitor_spawn: Vec2::new(50.0, 50.0),
            cluster_centers: vec![
                Vec2::new(300.0, 100.0),
                Vec2::new(110.0, 238.0),
                Vec2::new(182.0, 462.0),
                Vec2::new(418.0, 462.0),
                Vec2::new(490.0, 238.0),
            ],
        }
    }
}

pub struct Level {
    pub(crate) rules: Rules,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) guests: SlotMap<GuestId, Mover>,
    pub(crate) clusters: SlotMap<ClusterId, Cluster>,
    /// Zones the level still acknowledges, in placement order. Emptied zones
    /// leave this list but stay in the arena for stale back-references.
    pub(crate) active_clusters: Vec<ClusterId>,
    pub(crate) player: Mover,
    pub(crate) monitor: Mover,
    pub(crate) monitor_state: MonitorState,
    pub(crate) bowl: Circle,
    pub(crate) bowl_poisoned: bool,
    pub(crate) exit: Circle,
    /// Guests routed toward the punch; integrated every frame until removal.
    pub(crate) moving_away: BTreeSet<GuestId>,
    /// Guests bounced off an unpoisoned bowl, heading home.
    pub(crate) moving_back: BTreeSet<GuestId>,
    pub(crate) degen: BTreeSet<ClusterId>,
    pub(crate) regen: BTreeSet<ClusterId>,
    pub(crate) thirst_timer: i32,
    pub(crate) score: u32,
    pub(crate) reset_armed: bool,
    pub(crate) god_mode: bool,
    pub(crate) held: BTreeSet<Key>,
}

impl Level {
    pub fn new(rules: Rules, seed: u64, layout: &Layout) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut guests = SlotMap::with_key();
        let mut clusters: SlotMap<ClusterId, Cluster> = SlotMap::with_key();
        let mut active_clusters = Vec::with_capacity(layout.cluster_centers.len());

        for center in &layout.cluster_centers {
            let id = clusters.insert_with_key(|id| {
                let mut cluster = Cluster::new(*center);
                cluster.populate(id, &mut guests, &mut rng);
                cluster
            });
            active_clusters.push(id);
        }

        let player = Mover::new(ActorKind::Player, layout.player_spawn);
        let mut monitor = Mover::new(ActorKind::Monitor, layout.monitor_spawn);
        monitor.random_velocity(&mut rng, MONITOR_SPEED);

        Self {
            rules,
            width: layout.width,
            height: layout.height,
            rng,
            guests,
            clusters,
            active_clusters,
            player,
            monitor,
            monitor_state: MonitorState::new(),
            bowl: Circle::new(layout.bowl, BOWL_RADIUS),
            bowl_poisoned: false,
            exit: Circle::new(layout.exit, EXIT_RADIUS),
            moving_away: BTreeSet::new(),
            moving_back: BTreeSet::new(),
            degen: BTreeSet::new(),
            regen: BTreeSet::new(),
            thirst_timer: THIRST_TIMER_FRAMES,
            score: 0,
            reset_armed: true,
            god_mode: false,
            held: BTreeSet::new(),
        }
    }

    /// One simulation frame. The step order is load-bearing: later steps read
    /// state the earlier ones wrote, and all collision checks run on the
    /// positions left by the previous frame.
    pub fn tick(&mut self, dt: f64) {
        self.bounce_monitor_off_border();
        self.steer_monitor_and_mark_safety();
        if self.thirst_timer == 0 {
            self.trigger_thirst();
        }
        self.update_punch_transit(dt);
        if self.bowl.contains(self.player.pos) {
            self.bowl_poisoned = true;
        }
        self.recompute_cluster_safety();
        self.tick_timers();
        self.update_player(dt);
        self.monitor.integrate(dt);
        if self.rules.degen_control {
            self.degeneration_control();
        }
        if self.rules.bowl_reset {
            self.reset_bowl_at_multiples_of_six();
        }
    }

    fn tick_timers(&mut self) {
        self.monitor_state.tick_route_timer();
        self.thirst_timer -= 1;
    }

    /// Move the player by the held directional tokens; diagonal motion is
    /// normalized when exactly two directions are held.
    fn update_player(&mut self, dt: f64) {
        let mut step = PLAYER_SPEED * dt;
        if self.held.len() == 2 {
            step /= 2f64.sqrt();
        }
        if self.held.contains(&Key::Right) {
            self.player.pos.x += step;
        }
        if self.held.contains(&Key::Left) {
            self.player.pos.x -= step;
        }
        if self.held.contains(&Key::Up) {
            self.player.pos.y -= step;
        }
        if self.held.contains(&Key::Down) {
            self.player.pos.y += step;
        }
    }

    pub fn press(&mut self, key: Key) {
        if key.is_directional() {
            self.held.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_win(&self) -> bool {
        self.score == WIN_TARGET
    }

    pub fn is_lose(&self) -> bool {
        !self.god_mode
            && !self.player.safe
            && self.monitor_state.fov(self.monitor.pos).contains(self.player.pos)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_god_mode(&mut self, god_mode: bool) {
        self.god_mode = god_mode;
    }

    pub fn god_mode(&self) -> bool {
        self.god_mode
    }

    pub fn bowl_poisoned(&self) -> bool {
        self.bowl_poisoned
    }

    pub fn player(&self) -> &Mover {
        &self.player
    }

    pub fn monitor(&self) -> &Mover {
        &self.monitor
    }

    pub fn fov(&self) -> Circle {
        self.monitor_state.fov(self.monitor.pos)
    }
}
