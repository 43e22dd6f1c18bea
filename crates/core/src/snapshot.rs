//! Read-only render feed. The shell draws from these views and never writes
//! simulation state.

use crate::level::{Level, WIN_TARGET};
use crate::types::{ActorKind, Circle, GamePhase, LevelId, Vec2};

#[derive(Clone, Copy, Debug)]
pub struct ActorView {
    pub kind: ActorKind,
    pub pos: Vec2,
    pub safe: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ClusterView {
    pub center: Vec2,
    pub radius: f64,
    pub safe: bool,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct BowlView {
    pub center: Vec2,
    pub radius: f64,
    pub poisoned: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub level: Option<LevelId>,
    pub score: u32,
    pub win_target: u32,
    pub god_mode: bool,
    pub actors: Vec<ActorView>,
    pub fov: Option<Circle>,
    pub clusters: Vec<ClusterView>,
    pub bowl: Option<BowlView>,
    pub exit: Option<Circle>,
}

impl Snapshot {
    pub(crate) fn capture(phase: GamePhase, god_mode: bool, level: Option<&Level>) -> Self {
        let level_id = match phase {
            GamePhase::Playing(id) => Some(id),
            GamePhase::Menu => None,
        };
        let Some(level) = level else {
            return Self {
                phase,
                level: level_id,
                score: 0,
                win_target: WIN_TARGET,
                god_mode,
                actors: Vec::new(),
                fov: None,
                clusters: Vec::new(),
                bowl: None,
                exit: None,
            };
        };

        let mut actors = Vec::with_capacity(level.guests.len() + 2);
        for guest in level.guests.values() {
            actors.push(ActorView { kind: guest.kind, pos: guest.pos, safe: guest.safe });
        }
        let player = level.player();
        actors.push(ActorView { kind: player.kind, pos: player.pos, safe: player.safe });
        let monitor = level.monitor();
        actors.push(ActorView { kind: monitor.kind, pos: monitor.pos, safe: monitor.safe });

        let clusters = level
            .active_clusters
            .iter()
            .map(|id| {
                let cluster = &level.clusters[*id];
                ClusterView {
                    center: cluster.center,
                    radius: cluster.radius,
                    safe: cluster.safe,
                    opacity: cluster.opacity,
                }
            })
            .collect();

        Self {
            phase,
            level: level_id,
            score: level.score(),
            win_target: WIN_TARGET,
            god_mode,
            actors,
            fov: Some(level.fov()),
            clusters,
            bowl: Some(BowlView {
                center: level.bowl.center,
                radius: level.bowl.radius,
                poisoned: level.bowl_poisoned(),
            }),
            exit: Some(level.exit),
        }
    }
}
