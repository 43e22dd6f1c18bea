//! Point entities (player, guests, monitor) and their motion primitives.

use rand_chacha::ChaCha8Rng;

use crate::seed::uniform_signed;
use crate::types::{ActorKind, Circle, ClusterId, Vec2};

/// Radius of the "returned home" circle around a guest's spawn point.
pub const ORIGIN_RADIUS: f64 = 1.0;

/// A point entity with position and velocity. Guests carry an origin circle
/// and an index back-reference to their owning cluster; the cluster owns the
/// roster, the guest only remembers where it belongs.
#[derive(Clone, Debug)]
pub struct Mover {
    pub kind: ActorKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub safe: bool,
    pub in_play: bool,
    pub origin: Option<Circle>,
    pub cluster: Option<ClusterId>,
}

impl Mover {
    pub fn new(kind: ActorKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel: Vec2::ZERO,
            safe: false,
            in_play: true,
            origin: None,
            cluster: None,
        }
    }

    /// Aim at `target` with speed `speed`. A zero-length direction (already
    /// at the target) leaves the velocity unchanged.
    pub fn move_toward(&mut self, target: Vec2, speed: f64) {
        let distance = self.pos.distance_to(target);
        if distance == 0.0 {
            return;
        }
        self.vel.x = speed * (target.x - self.pos.x) / distance;
        self.vel.y = speed * (target.y - self.pos.y) / distance;
    }

    /// Random heading at magnitude `speed`. The y-component is derived as the
    /// non-negative root, biasing patrol into the lower half-plane; that
    /// asymmetry is part of the rule design.
    pub fn random_velocity(&mut self, rng: &mut ChaCha8Rng, speed: f64) {
        self.vel.x = uniform_signed(rng, speed);
        self.vel.y = (speed * speed - self.vel.x * self.vel.x).sqrt();
    }

    pub fn reverse_velocity(&mut self) {
        self.vel.x = -self.vel.x;
        self.vel.y = -self.vel.y;
    }

    pub fn integrate(&mut self, dt: f64) {
        self.pos.x += self.vel.x * dt;
        self.pos.y += self.vel.y * dt;
    }

    /// Record the current position as the guest's home circle.
    pub fn set_origin_here(&mut self) {
        self.origin = Some(Circle::new(self.pos, ORIGIN_RADIUS));
    }

    pub fn is_at_origin(&self) -> bool {
        match self.origin {
            Some(home) => home.contains(self.pos),
            None => false,
        }
    }
}

/// Field-of-view radius of the monitor.
pub const FOV_RADIUS: f64 = 80.0;
/// The fov circle is anchored to the monitor's visual center, half a sprite
/// height above its position.
pub const FOV_CENTER_OFFSET_Y: f64 = -12.5;

/// Frames between patrol route changes while the player is concealed.
pub const ROUTE_TIMER_FRAMES: i32 = 300;

/// Monitor-only capability extension: the fov circle and the patrol
/// route-change timer.
#[derive(Clone, Copy, Debug)]
pub struct MonitorState {
    pub fov_radius: f64,
    pub route_timer: i32,
}

impl MonitorState {
    pub fn new() -> Self {
        Self { fov_radius: FOV_RADIUS, route_timer: ROUTE_TIMER_FRAMES }
    }

    pub fn arm_route_timer(&mut self) {
        self.route_timer = ROUTE_TIMER_FRAMES;
    }

    pub fn tick_route_timer(&mut self) {
        self.route_timer -= 1;
    }

    /// Capture tests use this offset circle, not the raw monitor position.
    pub fn fov(&self, monitor_pos: Vec2) -> Circle {
        let center = Vec2::new(monitor_pos.x, monitor_pos.y + FOV_CENTER_OFFSET_Y);
        Circle::new(center, self.fov_radius)
    }
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}
