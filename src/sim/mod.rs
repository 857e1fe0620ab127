//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Runs to completion synchronously (no wall-clock pacing)
//! - No rendering or platform dependencies

pub mod collision;
pub mod game;
pub mod geometry;
pub mod placement;
pub mod state;
pub mod terrain;
pub mod trajectory;

pub use collision::{Verdict, classify, scatter_debris};
pub use game::{MatchState, ThrowOutcome};
pub use geometry::Rect;
pub use placement::{hit_box, place};
pub use state::{GameEvent, GamePhase, Player, PlayerId, Snapshot, ThrowRequest};
pub use terrain::{Building, TerrainParams, generate};
pub use trajectory::{
    Bounds, Launch, Physics, Replay, ReplayFrame, Termination, TrajectoryResult, simulate,
};
