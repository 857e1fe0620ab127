//! Actor placement on the outer rooftops

use glam::IVec2;

use super::geometry::Rect;
use super::terrain::Building;
use crate::consts::{ACTOR_HEIGHT, ACTOR_WIDTH};

/// Compute both actor positions for a skyline.
///
/// Player 1 stands on the first building and player 2 on the last. A position
/// is the top-centre of the actor sprite, one actor height above the roof.
/// An empty skyline puts both actors on the ground at the screen edges.
pub fn place(buildings: &[Building], screen_width: i32, screen_height: i32) -> (IVec2, IVec2) {
    let ground_left = IVec2::new(0, screen_height);
    let ground_right = IVec2::new(screen_width, screen_height);

    let roof1 = buildings.first().map_or(ground_left, Rect::top_center);
    let roof2 = buildings.last().map_or(ground_right, Rect::top_center);

    (
        stand_on(roof1, screen_width, screen_height),
        stand_on(roof2, screen_width, screen_height),
    )
}

fn stand_on(roof: IVec2, screen_width: i32, screen_height: i32) -> IVec2 {
    let half = ACTOR_WIDTH / 2;
    IVec2::new(
        roof.x.clamp(half, screen_width - half),
        (roof.y - ACTOR_HEIGHT).min(screen_height - ACTOR_HEIGHT),
    )
}

/// Hit-box for an actor at `position`: its bottom-centre sits at the actor's feet
#[inline]
pub fn hit_box(position: IVec2) -> Rect {
    Rect::bottom_centered(feet(position), ACTOR_WIDTH, ACTOR_HEIGHT)
}

/// Point where an actor touches the roof
#[inline]
pub fn feet(position: IVec2) -> IVec2 {
    position + IVec2::new(0, ACTOR_HEIGHT)
}
