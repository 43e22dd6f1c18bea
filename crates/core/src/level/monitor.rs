//! Monitor patrol, pursuit, and border handling.

use super::*;

impl Level {
    /// The monitor bounces off the open border rectangle; everything else
    /// may leave the room.
    pub(crate) fn bounce_monitor_off_border(&mut self) {
        if self.is_outside_border(self.monitor.pos) {
            self.monitor.reverse_velocity();
        }
    }

    fn is_outside_border(&self, pos: Vec2) -> bool {
        !(0.0 < pos.x && pos.x < self.width && 0.0 < pos.y && pos.y < self.height)
    }

    /// Pursuit or patrol, and the player's concealment flag, decided from
    /// the same observation. An exposed player is re-aimed at every frame;
    /// a concealed player leaves the monitor on its random route until the
    /// route timer runs out.
    pub(crate) fn steer_monitor_and_mark_safety(&mut self) {
        if self.player_concealed() {
            self.player.safe = true;
            if self.monitor_state.route_timer <= 0 {
                self.monitor.random_velocity(&mut self.rng, MONITOR_SPEED);
                self.monitor_state.arm_route_timer();
            }
        } else {
            self.player.safe = false;
            self.monitor.move_toward(self.player.pos, MONITOR_SPEED);
        }
    }

    /// Concealed means inside some zone that is currently safe.
    pub(crate) fn player_concealed(&self) -> bool {
        self.active_clusters.iter().any(|id| {
            self.clusters
                .get(*id)
                .is_some_and(|cluster| cluster.safe && cluster.contains(self.player.pos))
        })
    }
}
