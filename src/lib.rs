//! Gorillas - a two-player rooftop artillery duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, trajectories, collisions, match flow)
//! - `scene`: Drawable state for an external renderer
//! - `audio`: Sound cues derived from simulation events
//! - `settings`: Arena and physics configuration
//! - `error`: Rejection and configuration errors

pub mod audio;
pub mod error;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, InputError, ThrowError};
pub use settings::Settings;

use glam::{DVec2, IVec2};

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 350;

    /// Downward acceleration (pixels/s², y grows toward the ground)
    pub const GRAVITY: f64 = 9.81;
    /// Fixed integration step (simulated seconds)
    pub const SIM_DT: f64 = 0.1;
    /// Hard cap on integration steps per throw
    pub const MAX_TRAJECTORY_STEPS: usize = 10_000;

    /// Skyline defaults
    pub const NUM_BUILDINGS: usize = 8;
    pub const BUILDING_MIN_HEIGHT: i32 = 100;
    pub const BUILDING_MAX_HEIGHT: i32 = 250;
    /// Largest height change between an interior building and its left neighbour
    pub const MAX_HEIGHT_STEP: i32 = 50;
    /// Outer buildings sit this far below the maximum height
    pub const PERCH_DROP: i32 = 50;
    /// Building widths shrink by 0..WIDTH_JITTER pixels
    pub const WIDTH_JITTER: i32 = 10;

    /// Actor sprite and hit-box size
    pub const ACTOR_WIDTH: i32 = 20;
    pub const ACTOR_HEIGHT: i32 = 20;

    /// Wind speed range is [-WIND_LIMIT, WIND_LIMIT)
    pub const WIND_LIMIT: f64 = 10.0;
    /// Largest configurable wind limit
    pub const MAX_WIND_LIMIT: f64 = 100.0;
    /// Share of the wind speed added to the launch velocity
    pub const WIND_FACTOR: f64 = 0.1;

    /// Throw input ranges
    pub const MAX_ANGLE: f64 = 90.0;
    pub const MAX_VELOCITY: f64 = 100.0;

    /// Points needed to take the match
    pub const WIN_THRESHOLD: u32 = 3;

    /// Explosion debris
    pub const DEBRIS_COUNT: usize = 20;
    pub const DEBRIS_RADIUS: f64 = 20.0;
}

/// Launch velocity for an elevation angle (degrees) in screen space.
///
/// Screen y grows downward, so a positive elevation yields a negative `y`.
/// `facing` is +1.0 for a throw toward the right edge and -1.0 toward the left.
#[inline]
pub fn launch_vector(angle_deg: f64, speed: f64, facing: f64) -> DVec2 {
    let theta = angle_deg.to_radians();
    DVec2::new(facing * speed * theta.cos(), -speed * theta.sin())
}

/// Truncate a continuous position to its pixel (toward zero, like an integer cast)
#[inline]
pub fn to_pixel(pos: DVec2) -> IVec2 {
    IVec2::new(pos.x as i32, pos.y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_vector_horizontal() {
        let v = launch_vector(0.0, 50.0, 1.0);
        assert!((v.x - 50.0).abs() < 1e-9);
        assert!(v.y.abs() < 1e-9);

        let v = launch_vector(0.0, 50.0, -1.0);
        assert!((v.x + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_launch_vector_points_up() {
        let v = launch_vector(90.0, 10.0, 1.0);
        assert!(v.x.abs() < 1e-9);
        assert!((v.y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_pixel_truncates_toward_zero() {
        assert_eq!(to_pixel(DVec2::new(3.9, -2.7)), IVec2::new(3, -2));
    }
}
