//! Skyline generation
//!
//! One row of buildings spans the screen left to right. Heights wander by at
//! most `MAX_HEIGHT_STEP` between neighbours, and the two outer buildings are
//! flattened to a common perch height so both actors start level.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{MAX_HEIGHT_STEP, PERCH_DROP, WIDTH_JITTER};
use crate::settings::Settings;

/// A building is a plain rectangle anchored to the ground
pub type Building = Rect;

/// Inputs for one skyline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainParams {
    pub building_count: usize,
    pub screen_width: i32,
    pub screen_height: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl TerrainParams {
    /// Width of each building slot, 0 when the count does not fit the screen
    #[inline]
    pub fn slot_width(&self) -> i32 {
        match i32::try_from(self.building_count) {
            Ok(count) if count > 0 => self.screen_width / count,
            _ => 0,
        }
    }

    /// Height of the outer buildings the actors stand on
    #[inline]
    pub fn perch_height(&self) -> i32 {
        self.max_height - PERCH_DROP
    }
}

impl From<&Settings> for TerrainParams {
    fn from(settings: &Settings) -> Self {
        Self {
            building_count: settings.building_count,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
            min_height: settings.building_min_height,
            max_height: settings.building_max_height,
        }
    }
}

/// Generate the buildings for one round.
///
/// Every slot draws a height and a width jitter from `rng` in slot order, so the
/// same seed always yields the same skyline. The first building is flattened to
/// the perch height before the second one is drawn, keeping every interior
/// building within `MAX_HEIGHT_STEP` of its left neighbour.
pub fn generate<R: Rng + ?Sized>(params: &TerrainParams, rng: &mut R) -> Vec<Building> {
    let count = params.building_count;
    let slot = params.slot_width();
    let perch = params.perch_height();

    let mut buildings: Vec<Building> = Vec::with_capacity(count);
    let mut prev_height = perch;

    for i in 0..count {
        let interior = i > 0 && i + 1 < count;
        let (lo, hi) = if interior {
            (
                params.min_height.max(prev_height - MAX_HEIGHT_STEP),
                params.max_height.min(prev_height + MAX_HEIGHT_STEP),
            )
        } else {
            (params.min_height, params.max_height)
        };

        let drawn = rng.random_range(lo..=hi);
        let jitter = rng.random_range(0..WIDTH_JITTER);

        let height = if interior { drawn } else { perch };
        buildings.push(Rect::new(
            i as i32 * slot,
            params.screen_height - height,
            slot - jitter,
            height,
        ));
        prev_height = height;
    }

    log::debug!(
        "Skyline: {:?}",
        buildings.iter().map(|b| b.height).collect::<Vec<_>>()
    );

    buildings
}
