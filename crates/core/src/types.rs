use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct GuestId;
    pub struct ClusterId;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Vec2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Closed disc used for all containment tests (bowl, exit, fov, zones).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_to(point) <= self.radius
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActorKind {
    Player,
    Guest,
    Monitor,
}

/// Logical input tokens fed by the shell. Directional tokens are
/// level-triggered (held), the rest act on the press edge only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    ReturnToMenu,
    ToggleGodMode,
}

impl Key {
    pub fn is_directional(self) -> bool {
        matches!(self, Key::Up | Key::Down | Key::Left | Key::Right)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LevelId {
    One,
    Two,
    Three,
}

impl LevelId {
    pub fn from_number(n: u8) -> Option<LevelId> {
        match n {
            1 => Some(LevelId::One),
            2 => Some(LevelId::Two),
            3 => Some(LevelId::Three),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            LevelId::One => 1,
            LevelId::Two => 2,
            LevelId::Three => 3,
        }
    }

    pub fn next(self) -> Option<LevelId> {
        match self {
            LevelId::One => Some(LevelId::Two),
            LevelId::Two => Some(LevelId::Three),
            LevelId::Three => None,
        }
    }
}

/// Which optional rule branches are live for a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Degeneration-tracking sets are part of the ruleset (level 2+).
    pub degen_tracking: bool,
    /// The player entering a zone starts a degeneration cycle (level 3).
    pub degen_control: bool,
    /// The bowl un-poisons at each positive multiple of six (level 3).
    pub bowl_reset: bool,
}

impl Rules {
    pub fn for_level(level: LevelId) -> Self {
        match level {
            LevelId::One => {
                Self { degen_tracking: false, degen_control: false, bowl_reset: false }
            }
            LevelId::Two => Self { degen_tracking: true, degen_control: false, bowl_reset: false },
            LevelId::Three => Self { degen_tracking: true, degen_control: true, bowl_reset: true },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing(LevelId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    UnknownLevel(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_containment_is_closed() {
        let c = Circle::new(Vec2::new(10.0, 10.0), 5.0);
        assert!(c.contains(Vec2::new(10.0, 10.0)));
        assert!(c.contains(Vec2::new(15.0, 10.0)));
        assert!(!c.contains(Vec2::new(15.1, 10.0)));
    }

    #[test]
    fn level_numbers_round_trip() {
        for n in 1..=3 {
            assert_eq!(LevelId::from_number(n).unwrap().number(), n);
        }
        assert_eq!(LevelId::from_number(0), None);
        assert_eq!(LevelId::from_number(4), None);
    }

    #[test]
    fn rules_enable_degeneration_only_on_level_three() {
        assert!(!Rules::for_level(LevelId::One).degen_tracking);
        let two = Rules::for_level(LevelId::Two);
        assert!(two.degen_tracking && !two.degen_control && !two.bowl_reset);
        let three = Rules::for_level(LevelId::Three);
        assert!(three.degen_control && three.bowl_reset);
    }
}
