use super::*;

#[test]
fn name_patch_keeps_raw_text() {
    let patch = patch_for(RoomField::Name, " Primary Suite ");
    assert_eq!(patch.name.as_deref(), Some(" Primary Suite "));
    assert!(patch.width.is_none());
}

#[test]
fn type_patch_accepts_known_and_unknown_names() {
    assert_eq!(patch_for(RoomField::Type, "study").room_type, Some(RoomType::Study));
    assert_eq!(
        patch_for(RoomField::Type, "garage").room_type,
        Some(RoomType::Other("garage".to_owned()))
    );
}

#[test]
fn numeric_patches_use_leading_integer() {
    assert_eq!(patch_for(RoomField::Width, "12.9").width, Some(12.0));
    assert_eq!(patch_for(RoomField::Length, "").length, Some(0.0));
    assert_eq!(patch_for(RoomField::X, "-4").x, Some(-4.0));
    assert_eq!(patch_for(RoomField::Y, "abc").y, Some(0.0));
}

#[test]
fn each_patch_touches_one_field() {
    let patch = patch_for(RoomField::X, "3");
    assert_eq!(patch, RoomPatch { x: Some(3.0), ..RoomPatch::default() });
}
