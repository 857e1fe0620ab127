//! Drawable scene description
//!
//! The core never draws. A renderer walks `Scene::shapes` in order (back to
//! front) and maps each primitive onto whatever surface it owns.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ACTOR_HEIGHT, MAX_ANGLE, MAX_VELOCITY};
use crate::sim::{GamePhase, PlayerId, Rect, Snapshot, hit_box};

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

pub mod palette {
    use super::Color;

    pub const SKY: Color = [0.0, 0.0, 0.545, 1.0];
    pub const BUILDING: Color = [0.5, 0.5, 0.5, 1.0];
    pub const ACTOR: Color = [0.647, 0.165, 0.165, 1.0];
    pub const TRAJECTORY: Color = [1.0, 1.0, 0.0, 1.0];
    pub const DEBRIS: Color = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Size of one debris dot
const DEBRIS_SIZE: i32 = 4;
const TRAJECTORY_WIDTH: f32 = 2.0;
const HUD_FONT: f32 = 12.0;
const WIND_FONT: f32 = 10.0;

/// A 2D drawing primitive in screen pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    FillRect { rect: Rect, color: Color },
    /// Ellipse inscribed in `bounds`
    FillEllipse { bounds: Rect, color: Color },
    Polyline { points: Vec<IVec2>, width: f32, color: Color },
    Text { pos: IVec2, text: String, size: f32, color: Color },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn from_snapshot(snapshot: &Snapshot, width: i32, height: i32) -> Self {
        let mut shapes = vec![Shape::FillRect {
            rect: Rect::new(0, 0, width, height),
            color: palette::SKY,
        }];

        shapes.extend(snapshot.buildings.iter().map(|&rect| Shape::FillRect {
            rect,
            color: palette::BUILDING,
        }));

        shapes.extend(snapshot.players.iter().map(|p| Shape::FillEllipse {
            bounds: hit_box(p.position),
            color: palette::ACTOR,
        }));

        if snapshot.last_trajectory.len() >= 2 {
            shapes.push(Shape::Polyline {
                points: snapshot.last_trajectory.clone(),
                width: TRAJECTORY_WIDTH,
                color: palette::TRAJECTORY,
            });
        }

        shapes.extend(snapshot.debris.iter().map(|&p| Shape::FillEllipse {
            bounds: Rect::new(
                p.x - DEBRIS_SIZE / 2,
                p.y - DEBRIS_SIZE / 2,
                DEBRIS_SIZE,
                DEBRIS_SIZE,
            ),
            color: palette::DEBRIS,
        }));

        shapes.push(text(
            IVec2::new(width / 2 - 40, 10),
            wind_label(snapshot.wind),
            WIND_FONT,
        ));
        shapes.push(text(
            IVec2::new(10, 10),
            score_label(snapshot, PlayerId::First),
            HUD_FONT,
        ));
        shapes.push(text(
            IVec2::new(width - 100, 10),
            score_label(snapshot, PlayerId::Second),
            HUD_FONT,
        ));

        match snapshot.phase {
            GamePhase::AwaitingInput => shapes.push(text(
                IVec2::new(10, height - 60),
                prompt(snapshot.active_player),
                HUD_FONT,
            )),
            GamePhase::MatchOver => {
                if let Some(winner) = snapshot.winner {
                    shapes.push(text(
                        IVec2::new(width / 2 - 80, height / 2 - ACTOR_HEIGHT),
                        format!("{} wins the game!", winner),
                        HUD_FONT,
                    ));
                }
            }
            GamePhase::Simulating | GamePhase::RoundResolved => {}
        }

        Self {
            width,
            height,
            shapes,
        }
    }
}

fn text(pos: IVec2, text: String, size: f32) -> Shape {
    Shape::Text {
        pos,
        text,
        size,
        color: palette::TEXT,
    }
}

/// Wind indicator, e.g. `Wind: → 3.2`
pub fn wind_label(wind: f64) -> String {
    let arrow = if wind > 0.0 { '→' } else { '←' };
    format!("Wind: {} {:.1}", arrow, wind.abs())
}

pub fn score_label(snapshot: &Snapshot, id: PlayerId) -> String {
    format!("{}: {}", id, snapshot.score(id))
}

/// Input prompt for the player whose turn it is
pub fn prompt(player: PlayerId) -> String {
    format!(
        "{} - Enter Angle (0-{}) and Velocity (0-{}):",
        player, MAX_ANGLE, MAX_VELOCITY
    )
}
