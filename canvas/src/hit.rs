//! Pointer hit-testing against rooms in canvas pixel space.
//!
//! Rooms are tested in reverse plan order so the room drawn last (on top)
//! wins where rooms overlap.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::SCALE;
use crate::geometry::Point;
use crate::plan::{FloorPlan, Room};

/// Snap a raw pointer offset (CSS pixels from the canvas top-left) down to the
/// grid: `floor(v / SCALE) * SCALE` on each axis.
#[must_use]
pub fn point_to_grid(raw_x: f64, raw_y: f64) -> Point {
    Point::new((raw_x / SCALE).floor() * SCALE, (raw_y / SCALE).floor() * SCALE)
}

/// Whether `point` (canvas pixels) lies inside the room's rectangle, edges included.
#[must_use]
pub fn point_in_room(point: Point, room: &Room) -> bool {
    let x = room.position.x * SCALE;
    let y = room.position.y * SCALE;
    let w = room.dimensions.width * SCALE;
    let h = room.dimensions.length * SCALE;

    point.x >= x && point.x <= x + w && point.y >= y && point.y <= y + h
}

/// The room under `point`. Where rooms overlap, the topmost one wins: the last
/// room in plan order, since it is painted last.
#[must_use]
pub fn hit_test(point: Point, plan: &FloorPlan) -> Option<&Room> {
    plan.rooms.iter().rev().find(|room| point_in_room(point, room))
}

/// Snap a raw pointer offset and return the room under it.
#[must_use]
pub fn pick(raw_x: f64, raw_y: f64, plan: &FloorPlan) -> Option<&Room> {
    hit_test(point_to_grid(raw_x, raw_y), plan)
}
