use super::*;

const BEDROOM: Rgb = Rgb::new(0xA8, 0xD5, 0xE5);

#[test]
fn palette_covers_every_known_type() {
    let expected = [
        "#A8D5E5", "#95DAC1", "#FFEBA1", "#FFA69E", "#B8F2E6", "#E6B8F2", "#FFD4DB", "#E8E8E8",
    ];
    for (kind, hex) in RoomType::KNOWN.iter().zip(expected) {
        assert_eq!(color_for_type(kind, false).to_string(), hex, "{kind}");
    }
}

#[test]
fn unknown_type_is_white() {
    let kind = RoomType::from("garage");
    assert_eq!(color_for_type(&kind, false), Rgb::WHITE);
    assert_eq!(color_for_type(&kind, true), Rgb::WHITE);
}

#[test]
fn selected_is_channelwise_brighter_and_clamped() {
    for kind in RoomType::KNOWN {
        let base = color_for_type(&kind, false);
        let lit = color_for_type(&kind, true);
        assert!(lit.r >= base.r && lit.g >= base.g && lit.b >= base.b, "{kind}");
    }
}

#[test]
fn selected_bedroom_adds_fifty_one_per_channel() {
    assert_eq!(color_for_type(&RoomType::Bedroom, true), Rgb::new(0xDB, 0xFF, 0xFF));
}

#[test]
fn lighten_rounds_percent_to_channel_steps() {
    // 2.55 * 10 = 25.5 rounds to 26
    assert_eq!(lighten(Rgb::new(0, 0, 0), 10.0), Rgb::new(26, 26, 26));
}

#[test]
fn lighten_negative_darkens_and_clamps_at_zero() {
    assert_eq!(lighten(Rgb::new(10, 100, 200), -20.0), Rgb::new(0, 49, 149));
}

#[test]
fn display_is_uppercase_hex() {
    assert_eq!(BEDROOM.to_string(), "#A8D5E5");
    assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
}

#[test]
fn parse_hex_accepts_short_and_long_forms() {
    assert_eq!(Rgb::parse_hex("#a8d5e5"), Some(BEDROOM));
    assert_eq!(Rgb::parse_hex(" #FFF "), Some(Rgb::WHITE));
}

#[test]
fn parse_hex_rejects_malformed_input() {
    assert_eq!(Rgb::parse_hex("A8D5E5"), None);
    assert_eq!(Rgb::parse_hex("#A8D5"), None);
    assert_eq!(Rgb::parse_hex("#GG0000"), None);
}

#[test]
fn parse_hex_rejects_non_ascii_without_panicking() {
    assert_eq!(Rgb::parse_hex("#é1"), None);
    assert_eq!(Rgb::parse_hex("#ééé"), None);
}
