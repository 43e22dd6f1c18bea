//! Zone safety recomputation and the level-3 degeneration cycle.

use super::*;
use crate::cluster::{CLUSTER_TIMER_FRAMES, SAFE_OPACITY, SAFE_THRESHOLD};

const DEGEN_OPACITY_STEP: f64 = SAFE_OPACITY / CLUSTER_TIMER_FRAMES as f64;

impl Level {
    /// Base safety rule: a zone below the live-member threshold cannot
    /// conceal. Membership is geometric, so a guest walking out toward the
    /// punch stops counting immediately.
    pub(crate) fn recompute_cluster_safety(&mut self) {
        for id in &self.active_clusters {
            let count = self.clusters[*id].guest_count(&self.guests);
            if count < SAFE_THRESHOLD {
                self.clusters[*id].set_safe(false);
            }
        }
    }

    /// Level-3 rule: the player entering a zone starts a timed
    /// SAFE -> DEGENERATING -> UNSAFE/REGENERATING -> SAFE cycle. A zone sits
    /// in both the degenerating and regenerating sets only for the single
    /// frame of the edge between the two phases.
    pub(crate) fn degeneration_control(&mut self) {
        for id in self.active_clusters.clone() {
            let cluster = &mut self.clusters[id];
            if cluster.contains(self.player.pos) && !cluster.degenerating {
                cluster.degenerating = true;
                cluster.arm_timer();
                self.degen.insert(id);
            }
        }

        let degenerating: Vec<ClusterId> = self.degen.iter().copied().collect();
        for id in degenerating {
            let cluster = &mut self.clusters[id];
            cluster.tick_timer();
            cluster.lower_opacity(DEGEN_OPACITY_STEP);
            if cluster.timer == 0 {
                cluster.arm_timer();
                cluster.set_safe(false);
                self.regen.insert(id);
            }
        }

        let regenerating: Vec<ClusterId> = self.regen.iter().copied().collect();
        let mut promoted = Vec::new();
        for id in regenerating {
            let cluster = &mut self.clusters[id];
            cluster.tick_timer();
            self.degen.remove(&id);
            if cluster.timer == 0 {
                cluster.set_safe(true);
                promoted.push(id);
            }
        }

        for id in promoted {
            self.regen.remove(&id);
            self.clusters[id].degenerating = false;
        }
    }

    /// A zone whose live count reached zero leaves the active list; thirst
    /// selection and concealment no longer see it.
    pub(crate) fn drop_cluster_if_empty(&mut self, id: ClusterId) {
        let empty = self.clusters.get(id).is_some_and(|c| c.guest_count(&self.guests) == 0);
        if empty {
            self.active_clusters.retain(|active| *active != id);
        }
    }
}
