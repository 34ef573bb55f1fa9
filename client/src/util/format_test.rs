use canvas::plan::{Dimensions, Position, Room, RoomType};

use super::*;

#[test]
fn whole_feet_print_without_decimals() {
    assert_eq!(sq_ft(120.0), "120 sq ft");
    assert_eq!(area_line(120.0), "Area: 120 sq ft");
    assert_eq!(perimeter_line(44.0), "Perimeter: 44 ft");
    assert_eq!(sq_ft(12.5), "12.5 sq ft");
}

#[test]
fn used_area_includes_one_decimal_percent() {
    let rooms = vec![Room::new("r1", "Bed", RoomType::Bedroom, Dimensions::new(10.0, 20.0), Position::default())];
    let m = Measurements::of(Dimensions::new(40.0, 60.0), &rooms);
    assert_eq!(used_area(&m), "200 sq ft (8.3%)");
    assert_eq!(type_area_row(&m.by_type[0]), ("Bedroom".to_owned(), "200 sq ft (8.3%)".to_owned()));
}

#[test]
fn plot_size_hidden_for_unsized_projects() {
    assert_eq!(plot_size(Dimensions::new(40.0, 60.0)).as_deref(), Some("Size: 40' × 60'"));
    assert_eq!(plot_size(Dimensions::new(0.0, 0.0)), None);
}
