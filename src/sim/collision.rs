//! Collision classification for projectile pixels
//!
//! Buildings are tested before actors, and actors are plain boxes: there is
//! no occlusion by terrain.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::PlayerId;
use super::terrain::Building;
use crate::consts::{DEBRIS_COUNT, DEBRIS_RADIUS};

/// What a projectile pixel touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    None,
    Building,
    Player1,
    Player2,
}

impl Verdict {
    /// Verdict for hitting the given player
    pub fn hit_on(player: PlayerId) -> Self {
        match player {
            PlayerId::First => Verdict::Player1,
            PlayerId::Second => Verdict::Player2,
        }
    }

    /// The player this verdict hits, if any
    pub fn player_hit(&self) -> Option<PlayerId> {
        match self {
            Verdict::Player1 => Some(PlayerId::First),
            Verdict::Player2 => Some(PlayerId::Second),
            Verdict::None | Verdict::Building => None,
        }
    }

    /// True for anything that stops a projectile
    pub fn is_hit(&self) -> bool {
        !matches!(self, Verdict::None)
    }
}

/// Classify a pixel against the skyline and both hit-boxes
pub fn classify(point: IVec2, buildings: &[Building], player1: &Rect, player2: &Rect) -> Verdict {
    if buildings.iter().any(|b| b.contains(point)) {
        Verdict::Building
    } else if player1.contains(point) {
        Verdict::Player1
    } else if player2.contains(point) {
        Verdict::Player2
    } else {
        Verdict::None
    }
}

/// Scatter explosion debris around an impact point
pub fn scatter_debris<R: Rng + ?Sized>(center: IVec2, rng: &mut R) -> Vec<IVec2> {
    (0..DEBRIS_COUNT)
        .map(|_| {
            let angle = rng.random::<f64>() * std::f64::consts::TAU;
            let distance = rng.random::<f64>() * DEBRIS_RADIUS;
            IVec2::new(
                center.x + (angle.cos() * distance) as i32,
                center.y + (angle.sin() * distance) as i32,
            )
        })
        .collect()
}
