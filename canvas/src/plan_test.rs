#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn room(id: &str, room_type: RoomType) -> Room {
    Room::new(id, id.to_uppercase(), room_type, Dimensions::new(10.0, 12.0), Position::new(0.0, 0.0))
}

fn plan() -> FloorPlan {
    FloorPlan::new(vec![
        room("a", RoomType::Bedroom),
        room("b", RoomType::Kitchen),
        room("c", RoomType::Bathroom),
    ])
}

fn ids(plan: &FloorPlan) -> Vec<&str> {
    plan.rooms.iter().map(|r| r.id.as_str()).collect()
}

// =============================================================
// RoomType
// =============================================================

#[test]
fn room_type_known_strings_map_to_variants() {
    for kind in RoomType::KNOWN {
        assert_eq!(RoomType::from(kind.as_str()), kind);
    }
}

#[test]
fn room_type_unknown_string_is_preserved() {
    let kind = RoomType::from("garage");
    assert_eq!(kind, RoomType::Other("garage".to_owned()));
    assert_eq!(serde_json::to_value(&kind).unwrap(), json!("garage"));
}

#[test]
fn room_type_label_capitalizes_first_letter() {
    assert_eq!(RoomType::Living.label(), "Living");
    assert_eq!(RoomType::Other(String::new()).label(), "");
}

// =============================================================
// Room serde
// =============================================================

#[test]
fn room_deserializes_backend_shape() {
    let raw = json!({
        "_id": "r1",
        "name": "Master",
        "type": "bedroom",
        "dimensions": { "width": 10, "length": 12 },
        "position": { "x": 2, "y": 4 },
        "door": { "wall": "south", "offset": 3 },
        "floor": 1
    });
    let room: Room = serde_json::from_value(raw).unwrap();
    assert_eq!(room.id, "r1");
    assert_eq!(room.room_type, RoomType::Bedroom);
    assert_eq!(room.dimensions, Dimensions::new(10.0, 12.0));
    assert_eq!(room.position, Position::new(2.0, 4.0));
    assert_eq!(room.door, Some(Door { wall: Wall::South, offset: 3.0 }));
    assert_eq!(room.extra.get("floor"), Some(&json!(1)));
}

#[test]
fn room_without_door_omits_it_on_the_wire() {
    let value = serde_json::to_value(room("a", RoomType::Study)).unwrap();
    assert!(value.get("door").is_none());
    assert_eq!(value["type"], json!("study"));
}

#[test]
fn floor_plan_keeps_unknown_fields() {
    let raw = json!({ "_id": "p1", "rooms": [], "score": 0.8 });
    let plan: FloorPlan = serde_json::from_value(raw).unwrap();
    assert_eq!(plan.id.as_deref(), Some("p1"));
    let back = serde_json::to_value(&plan).unwrap();
    assert_eq!(back["score"], json!(0.8));
    assert_eq!(back["id"], json!("p1"));
}

#[test]
fn floor_plan_missing_rooms_defaults_to_empty() {
    let plan: FloorPlan = serde_json::from_value(json!({})).unwrap();
    assert!(plan.rooms.is_empty());
}

// =============================================================
// Size label
// =============================================================

#[test]
fn size_label_uses_feet_marks() {
    assert_eq!(room("a", RoomType::Bedroom).size_label(), "10'×12'");
}

#[test]
fn size_label_keeps_fractional_feet() {
    let mut r = room("a", RoomType::Bedroom);
    r.dimensions.width = 10.5;
    assert_eq!(r.size_label(), "10.5'×12'");
}

// =============================================================
// Immutable updates
// =============================================================

#[test]
fn with_room_replaced_keeps_slot_and_leaves_original_untouched() {
    let original = plan();
    let mut edited = room("b", RoomType::Dining);
    edited.name = "Dining".to_owned();
    let next = original.with_room_replaced(edited.clone());

    assert_eq!(ids(&next), ["a", "b", "c"]);
    assert_eq!(next.room("b"), Some(&edited));
    assert_eq!(original.room("b").map(|r| r.room_type.clone()), Some(RoomType::Kitchen));
    assert_eq!(next.room("a"), original.room("a"));
}

#[test]
fn with_room_patched_applies_only_present_fields() {
    let patch = RoomPatch { width: Some(14.0), y: Some(6.0), ..RoomPatch::default() };
    let next = plan().with_room_patched("a", &patch);
    let a = next.room("a").unwrap();
    assert_eq!(a.dimensions, Dimensions::new(14.0, 12.0));
    assert_eq!(a.position, Position::new(0.0, 6.0));
    assert_eq!(a.name, "A");
}

#[test]
fn with_room_patched_unknown_id_is_unchanged() {
    let original = plan();
    let patch = RoomPatch { name: Some("x".to_owned()), ..RoomPatch::default() };
    assert_eq!(original.with_room_patched("zzz", &patch), original);
}

#[test]
fn with_room_added_appends_on_top() {
    let next = plan().with_room_added(room("d", RoomType::Entry));
    assert_eq!(ids(&next), ["a", "b", "c", "d"]);
}

#[test]
fn without_room_preserves_order_of_the_rest() {
    let next = plan().without_room("b");
    assert_eq!(ids(&next), ["a", "c"]);
}

#[test]
fn updates_preserve_plan_id_and_extra() {
    let mut original = plan();
    original.id = Some("p1".to_owned());
    original.extra.insert("score".to_owned(), json!(3));
    let next = original.without_room("a");
    assert_eq!(next.id.as_deref(), Some("p1"));
    assert_eq!(next.extra.get("score"), Some(&json!(3)));
}
