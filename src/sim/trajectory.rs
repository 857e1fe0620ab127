//! Projectile flight
//!
//! Point-mass ballistics with forward Euler integration at a fixed step. The
//! simulation runs to completion synchronously; animated playback is a
//! separate `Replay` over the recorded points and never re-runs physics.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY, MAX_TRAJECTORY_STEPS, SIM_DT, WIND_FACTOR};
use crate::settings::Settings;
use crate::{launch_vector, to_pixel};

/// Where and how a projectile leaves the thrower
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub origin: IVec2,
    /// Elevation in degrees above the horizon
    pub angle: f64,
    pub velocity: f64,
    /// +1.0 throws toward the right edge, -1.0 toward the left
    pub facing: f64,
}

/// Integration constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub gravity: f64,
    pub dt: f64,
    pub wind_factor: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            dt: SIM_DT,
            wind_factor: WIND_FACTOR,
        }
    }
}

impl From<&Settings> for Physics {
    fn from(settings: &Settings) -> Self {
        Self {
            gravity: settings.gravity,
            dt: settings.time_step,
            wind_factor: WIND_FACTOR,
        }
    }
}

/// Playfield extent. The top is open: projectiles may fly above the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

/// Why a flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Fell past the bottom of the screen
    Ground,
    /// Left through the left or right edge
    OffScreen,
    /// The collision test reported a hit
    Collision,
    /// Ran out of integration steps
    StepLimit,
}

/// Outcome of one throw
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryResult {
    /// Sampled pixels, launch point first. A hit point is the last entry.
    pub points: Vec<IVec2>,
    pub hit_point: Option<IVec2>,
    pub termination: Termination,
}

impl TrajectoryResult {
    /// Point-by-point playback for a presentation layer
    pub fn replay(&self) -> Replay<'_> {
        Replay::new(&self.points, self.hit_point)
    }
}

/// Simulate a throw until it lands, leaves the screen, or `collision_test` fires.
///
/// Wind is a one-off horizontal bias added to the launch velocity. Each step
/// records the truncated pixel before handing it to `collision_test`, and the
/// first pixel that tests positive becomes the hit point.
pub fn simulate<F>(
    launch: &Launch,
    wind: f64,
    physics: &Physics,
    bounds: Bounds,
    mut collision_test: F,
) -> TrajectoryResult
where
    F: FnMut(IVec2) -> bool,
{
    let mut vel = launch_vector(launch.angle, launch.velocity, launch.facing);
    vel.x += wind * physics.wind_factor;

    let mut pos: DVec2 = launch.origin.as_dvec2();
    let mut points = vec![launch.origin];
    let dt = physics.dt;

    for _ in 0..MAX_TRAJECTORY_STEPS {
        pos.x += vel.x * dt;
        vel.y += physics.gravity * dt;
        pos.y += vel.y * dt;

        if pos.y >= bounds.height as f64 {
            return finish(points, None, Termination::Ground);
        }
        if pos.x < 0.0 || pos.x > bounds.width as f64 {
            return finish(points, None, Termination::OffScreen);
        }

        let pixel = to_pixel(pos);
        points.push(pixel);
        if collision_test(pixel) {
            return finish(points, Some(pixel), Termination::Collision);
        }
    }

    log::warn!(
        "Trajectory hit the {} step limit at {:?}",
        MAX_TRAJECTORY_STEPS,
        pos
    );
    finish(points, None, Termination::StepLimit)
}

fn finish(
    points: Vec<IVec2>,
    hit_point: Option<IVec2>,
    termination: Termination,
) -> TrajectoryResult {
    log::trace!(
        "Flight ended ({:?}) after {} points",
        termination,
        points.len()
    );
    TrajectoryResult {
        points,
        hit_point,
        termination,
    }
}

/// One frame of an animated throw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayFrame {
    /// Projectile drawn at this pixel
    Point(IVec2),
    /// Flight ended on a collision at this pixel
    Impact(IVec2),
    /// Flight ended without touching anything
    Miss,
}

/// Iterator over recorded flight points, ending with `Impact` or `Miss`
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    points: std::slice::Iter<'a, IVec2>,
    hit_point: Option<IVec2>,
    finished: bool,
}

impl<'a> Replay<'a> {
    pub fn new(points: &'a [IVec2], hit_point: Option<IVec2>) -> Self {
        Self {
            points: points.iter(),
            hit_point,
            finished: false,
        }
    }
}

impl Iterator for Replay<'_> {
    type Item = ReplayFrame;

    fn next(&mut self) -> Option<ReplayFrame> {
        if let Some(&p) = self.points.next() {
            return Some(ReplayFrame::Point(p));
        }
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(match self.hit_point {
            Some(p) => ReplayFrame::Impact(p),
            None => ReplayFrame::Miss,
        })
    }
}
