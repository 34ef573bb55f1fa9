#![allow(clippy::float_cmp)]

use super::*;
use crate::plan::Position;

fn room(room_type: RoomType, width: f64, length: f64) -> Room {
    Room::new("r", "R", room_type, Dimensions::new(width, length), Position::default())
}

#[test]
fn area_and_perimeter() {
    let d = Dimensions::new(10.0, 12.0);
    assert_eq!(area(d), 120.0);
    assert_eq!(perimeter(d), 44.0);
}

#[test]
fn measurements_sum_rooms_against_plot() {
    let plot = Dimensions::new(40.0, 60.0);
    let rooms = [
        room(RoomType::Bedroom, 10.0, 12.0),
        room(RoomType::Kitchen, 10.0, 10.0),
        room(RoomType::Bedroom, 10.0, 10.0),
    ];
    let m = Measurements::of(plot, &rooms);
    assert_eq!(m.total_area, 2400.0);
    assert_eq!(m.used_area, 320.0);
    assert_eq!(m.available_area, 2080.0);
    assert_eq!(format_percent(m.used_percent), "13.3");
}

#[test]
fn measurements_group_by_type_in_first_appearance_order() {
    let plot = Dimensions::new(20.0, 20.0);
    let rooms = [
        room(RoomType::Kitchen, 5.0, 4.0),
        room(RoomType::Bedroom, 10.0, 10.0),
        room(RoomType::Kitchen, 2.0, 5.0),
    ];
    let m = Measurements::of(plot, &rooms);
    let types: Vec<_> = m.by_type.iter().map(|t| t.room_type.clone()).collect();
    assert_eq!(types, [RoomType::Kitchen, RoomType::Bedroom]);
    assert_eq!(m.by_type[0].area, 30.0);
    assert_eq!(format_percent(m.by_type[0].percent), "7.5");
    assert_eq!(m.by_type[1].percent, 25.0);
}

#[test]
fn measurements_overflowing_plot_go_negative() {
    let m = Measurements::of(Dimensions::new(20.0, 20.0), &[room(RoomType::Living, 30.0, 30.0)]);
    assert_eq!(m.available_area, -500.0);
}

#[test]
fn measurements_zero_plot_reports_zero_percent() {
    let m = Measurements::of(Dimensions::new(0.0, 0.0), &[room(RoomType::Study, 5.0, 5.0)]);
    assert_eq!(m.used_percent, 0.0);
    assert_eq!(m.by_type[0].percent, 0.0);
}

#[test]
fn measurements_empty_plan() {
    let m = Measurements::of(Dimensions::new(40.0, 60.0), &[]);
    assert_eq!(m.used_area, 0.0);
    assert!(m.by_type.is_empty());
}
