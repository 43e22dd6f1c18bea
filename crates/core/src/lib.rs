pub mod cluster;
pub mod game;
pub mod journal;
pub mod level;
pub mod mover;
pub mod replay;
pub mod seed;
pub mod snapshot;
pub mod types;

pub use cluster::Cluster;
pub use game::Game;
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use level::{Layout, Level};
pub use mover::{MonitorState, Mover};
pub use replay::*;
pub use snapshot::*;
pub use types::*;
