//! Concealment zones ("clusters") guests stand in and the player hides in.

use rand_chacha::ChaCha8Rng;
use slotmap::SlotMap;

use crate::mover::Mover;
use crate::seed::uniform_signed;
use crate::types::{ActorKind, Circle, ClusterId, GuestId, Vec2};

pub const CLUSTER_RADIUS: f64 = 40.0;
pub const CLUSTER_POPULATION: usize = 10;
/// Minimum live members for a zone to conceal.
pub const SAFE_THRESHOLD: usize = 6;
pub const SAFE_OPACITY: f64 = 0.3;
pub const UNSAFE_OPACITY: f64 = 0.0;
/// Frames for each half of a degeneration/regeneration cycle.
pub const CLUSTER_TIMER_FRAMES: i32 = 180;
/// Guests spawn this far inside the rim so sprites sit visually within it.
const POPULATE_INSET: f64 = 15.0;

/// A fixed circular concealment zone with an owned guest roster, a safety
/// flag, an opacity value in [0, 0.3], and a degeneration timer.
#[derive(Clone, Debug)]
pub struct Cluster {
    pub center: Vec2,
    pub radius: f64,
    pub roster: Vec<GuestId>,
    pub safe: bool,
    pub opacity: f64,
    pub timer: i32,
    pub degenerating: bool,
}

impl Cluster {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            radius: CLUSTER_RADIUS,
            roster: Vec::new(),
            safe: true,
            opacity: SAFE_OPACITY,
            timer: 0,
            degenerating: false,
        }
    }

    pub fn bounds(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }

    /// Fill the roster with guests placed uniformly inside the inset disc.
    /// Each guest remembers its spawn point as home and this zone as owner.
    pub fn populate(
        &mut self,
        id: ClusterId,
        guests: &mut SlotMap<GuestId, Mover>,
        rng: &mut ChaCha8Rng,
    ) {
        let range = self.radius - POPULATE_INSET;
        for _ in 0..CLUSTER_POPULATION {
            let dx = uniform_signed(rng, range);
            let dy = uniform_signed(rng, (range * range - dx * dx).sqrt());
            let pos = Vec2::new(self.center.x + dx, self.center.y + dy);
            let mut guest = Mover::new(ActorKind::Guest, pos);
            guest.set_origin_here();
            guest.cluster = Some(id);
            self.roster.push(guests.insert(guest));
        }
    }

    /// Live member count: roster guests whose position is still inside the
    /// circle. A guest en route to the punch stops counting as soon as it
    /// leaves the circle, before it ever leaves the roster.
    pub fn guest_count(&self, guests: &SlotMap<GuestId, Mover>) -> usize {
        self.roster
            .iter()
            .filter(|id| guests.get(**id).is_some_and(|g| self.contains(g.pos)))
            .count()
    }

    pub fn set_safe(&mut self, safe: bool) {
        self.safe = safe;
        self.opacity = if safe { SAFE_OPACITY } else { UNSAFE_OPACITY };
    }

    pub fn lower_opacity(&mut self, amount: f64) {
        self.opacity = (self.opacity - amount).clamp(UNSAFE_OPACITY, SAFE_OPACITY);
    }

    pub fn arm_timer(&mut self) {
        self.timer = CLUSTER_TIMER_FRAMES;
    }

    pub fn tick_timer(&mut self) {
        self.timer -= 1;
    }
}
