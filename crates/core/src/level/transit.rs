//! Guest thirst routing: zone -> punch bowl -> exit or back home.

use super::*;
use crate::seed::uniform_index;

impl Level {
    /// Route one randomly chosen guest toward the bowl and re-arm the
    /// thirst timer. Selecting from an empty zone list or roster is a
    /// contract violation; the trigger is skipped but the timer still
    /// re-arms so the level keeps running.
    pub(crate) fn trigger_thirst(&mut self) {
        self.thirst_timer = THIRST_TIMER_FRAMES;

        debug_assert!(!self.active_clusters.is_empty(), "thirst trigger with no active zones");
        if self.active_clusters.is_empty() {
            return;
        }
        let cluster_id =
            self.active_clusters[uniform_index(&mut self.rng, self.active_clusters.len())];
        let Some(cluster) = self.clusters.get(cluster_id) else {
            return;
        };
        debug_assert!(!cluster.roster.is_empty(), "thirst trigger from an empty roster");
        if cluster.roster.is_empty() {
            return;
        }
        let guest_id = cluster.roster[uniform_index(&mut self.rng, cluster.roster.len())];

        let bowl_center = self.bowl.center;
        if let Some(guest) = self.guests.get_mut(guest_id) {
            guest.move_toward(bowl_center, GUEST_SPEED);
            self.moving_away.insert(guest_id);
        }
    }

    /// Advance every guest in transit. Bowl, exit and home checks run on the
    /// position left by the previous frame; integration comes last.
    pub(crate) fn update_punch_transit(&mut self, dt: f64) {
        let outbound: Vec<GuestId> = self.moving_away.iter().copied().collect();
        for id in outbound {
            if self.bowl_contact(id) {
                if self.bowl_poisoned {
                    let exit_center = self.exit.center;
                    self.guests[id].move_toward(exit_center, GUEST_SPEED);
                } else {
                    self.guests[id].reverse_velocity();
                    self.moving_back.insert(id);
                }
            }
            if self.exit_contact(id) {
                self.retire_guest(id);
                continue;
            }
            self.guests[id].integrate(dt);
        }

        let inbound: Vec<GuestId> = self.moving_back.iter().copied().collect();
        for id in inbound {
            let Some(guest) = self.guests.get_mut(id) else {
                self.moving_back.remove(&id);
                continue;
            };
            if guest.is_at_origin() {
                guest.vel = Vec2::ZERO;
                let cluster_id = guest.cluster;
                self.moving_back.remove(&id);
                if let Some(cluster_id) = cluster_id {
                    self.drop_cluster_if_empty(cluster_id);
                }
            }
        }
    }

    fn bowl_contact(&self, id: GuestId) -> bool {
        self.bowl.contains(self.guests[id].pos)
    }

    fn exit_contact(&self, id: GuestId) -> bool {
        let guest = &self.guests[id];
        guest.in_play && self.exit.contains(guest.pos)
    }

    /// A poisoned guest reached the exit: score it once and remove it from
    /// every set and the arena.
    fn retire_guest(&mut self, id: GuestId) {
        let cluster_id = self.guests[id].cluster;
        self.guests[id].in_play = false;
        self.score += 1;
        self.moving_away.remove(&id);
        self.moving_back.remove(&id);
        self.guests.remove(id);
        if let Some(cluster_id) = cluster_id {
            if let Some(cluster) = self.clusters.get_mut(cluster_id) {
                cluster.roster.retain(|member| *member != id);
            }
            // An emptied zone must never be selectable as a thirst source.
            self.drop_cluster_if_empty(cluster_id);
        }
    }

    /// Level-3 rule: un-poison the bowl exactly once per positive
    /// multiple-of-six crossing of the score.
    pub(crate) fn reset_bowl_at_multiples_of_six(&mut self) {
        if self.reset_armed && self.score > 0 && self.score % 6 == 0 {
            self.bowl_poisoned = false;
            self.reset_armed = false;
        }
        if self.score % 6 != 0 {
            self.reset_armed = true;
        }
    }
}
