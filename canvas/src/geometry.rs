//! Points, room arithmetic and plan-level measurements.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::plan::{Dimensions, Plot, Room, RoomType};

/// A point in canvas pixel space, origin at the canvas top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Floor area in square feet.
#[must_use]
pub fn area(d: Dimensions) -> f64 {
    d.width * d.length
}

/// Perimeter in feet.
#[must_use]
pub fn perimeter(d: Dimensions) -> f64 {
    2.0 * (d.width + d.length)
}

/// Share of the plot covered by one room type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeArea {
    pub room_type: RoomType,
    pub area: f64,
    pub percent: f64,
}

/// Area summary for a plan on a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    pub total_area: f64,
    pub used_area: f64,
    /// `total - used`; negative when rooms overflow the plot.
    pub available_area: f64,
    pub used_percent: f64,
    /// Per-type totals in order of first appearance.
    pub by_type: Vec<TypeArea>,
}

impl Measurements {
    #[must_use]
    pub fn of(plot: Plot, rooms: &[Room]) -> Self {
        let total_area = area(plot);
        let mut used_area = 0.0;
        let mut by_type: Vec<TypeArea> = Vec::new();

        for room in rooms {
            let a = area(room.dimensions);
            used_area += a;
            match by_type.iter_mut().find(|t| t.room_type == room.room_type) {
                Some(entry) => entry.area += a,
                None => by_type.push(TypeArea { room_type: room.room_type.clone(), area: a, percent: 0.0 }),
            }
        }
        for entry in &mut by_type {
            entry.percent = percent_of(entry.area, total_area);
        }

        Self {
            total_area,
            used_area,
            available_area: total_area - used_area,
            used_percent: percent_of(used_area, total_area),
            by_type,
        }
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

/// One decimal place, e.g. `"33.3"`.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}")
}
