//! Match data model
//!
//! Plain values shared between the state machine and its shell: player
//! identities, phases, validated throw requests, events and snapshots.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Verdict;
use super::terrain::Building;
use crate::consts::{MAX_ANGLE, MAX_VELOCITY};
use crate::error::InputError;

/// Which side of the skyline a player stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Index into per-player arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Horizontal throw direction: player 1 faces right, player 2 left
    #[inline]
    pub fn facing(self) -> f64 {
        match self {
            PlayerId::First => 1.0,
            PlayerId::Second => -1.0,
        }
    }

    /// 1-based number for display
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A participant in the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Top-centre of the actor sprite, one actor height above the roof
    pub position: IVec2,
    /// Points won this match
    pub score: u32,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            position: IVec2::ZERO,
            score: 0,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the active player's throw
    AwaitingInput,
    /// A throw is in flight
    Simulating,
    /// A point was scored and the next round is being set up
    RoundResolved,
    /// Someone reached the win threshold
    MatchOver,
}

/// A validated throw: angle in [0, 90] degrees, velocity in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThrowRequest {
    angle: f64,
    velocity: f64,
}

impl ThrowRequest {
    pub fn new(angle: f64, velocity: f64) -> Result<Self, InputError> {
        if !angle.is_finite() {
            return Err(InputError::NonFinite("angle"));
        }
        if !velocity.is_finite() {
            return Err(InputError::NonFinite("velocity"));
        }
        if !(0.0..=MAX_ANGLE).contains(&angle) {
            return Err(InputError::AngleOutOfRange(angle));
        }
        if !(0.0..=MAX_VELOCITY).contains(&velocity) {
            return Err(InputError::VelocityOutOfRange(velocity));
        }
        Ok(Self { angle, velocity })
    }

    /// Parse the two numbers as typed into a shell's input fields
    pub fn parse(angle: &str, velocity: &str) -> Result<Self, InputError> {
        let angle = parse_field("angle", angle)?;
        let velocity = parse_field("velocity", velocity)?;
        Self::new(angle, velocity)
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(field, text.to_string()))
}

/// Notifications for the shell (sound, effects, HUD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    MatchStarted,
    RoundStarted { round: u32, leader: PlayerId },
    ThrowStarted { player: PlayerId, angle: f64, velocity: f64 },
    /// The projectile stopped on something. Injected verdicts may lack a point.
    Hit { verdict: Verdict, point: Option<IVec2> },
    /// The projectile left the playfield untouched
    Missed,
    TurnPassed { to: PlayerId },
    RoundEnded { round: u32, scorer: PlayerId },
    MatchEnded { winner: PlayerId },
}

/// Read-only view of the match for rendering and inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round: u32,
    pub phase: GamePhase,
    pub active_player: PlayerId,
    pub players: [Player; 2],
    pub wind: f64,
    pub buildings: Vec<Building>,
    pub last_trajectory: Vec<IVec2>,
    pub last_verdict: Option<Verdict>,
    pub last_hit_point: Option<IVec2>,
    /// Explosion debris around the last hit point
    pub debris: Vec<IVec2>,
    pub winner: Option<PlayerId>,
}

impl Snapshot {
    pub fn score(&self, id: PlayerId) -> u32 {
        self.players[id.index()].score
    }
}
