//! Room-type palette and RGB helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use crate::consts::SELECTED_LIGHTEN_PERCENT;
use crate::plan::RoomType;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`.
    #[must_use]
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| match u8::from_str_radix(s, 16) {
            Ok(v) => Some(v),
            Err(_) => None,
        };
        match hex.len() {
            3 => Some(Self::new(
                channel(&hex[0..1].repeat(2))?,
                channel(&hex[1..2].repeat(2))?,
                channel(&hex[2..3].repeat(2))?,
            )),
            6 => Some(Self::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Shift every channel by `round(2.55 * percent)`, clamped to `0..=255`.
///
/// Negative percentages darken.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn lighten(color: Rgb, percent: f64) -> Rgb {
    let amount = (2.55 * percent).round() as i32;
    let shift = |c: u8| -> u8 {
        let v = (i32::from(c) + amount).clamp(0, 255);
        u8::try_from(v).unwrap_or(u8::MAX)
    };
    Rgb::new(shift(color.r), shift(color.g), shift(color.b))
}

/// Base pastel for a room type. Unknown types are white.
#[must_use]
pub fn base_color(room_type: &RoomType) -> Rgb {
    match room_type {
        RoomType::Bedroom => Rgb::new(0xA8, 0xD5, 0xE5),
        RoomType::Bathroom => Rgb::new(0x95, 0xDA, 0xC1),
        RoomType::Kitchen => Rgb::new(0xFF, 0xEB, 0xA1),
        RoomType::Living => Rgb::new(0xFF, 0xA6, 0x9E),
        RoomType::Dining => Rgb::new(0xB8, 0xF2, 0xE6),
        RoomType::Study => Rgb::new(0xE6, 0xB8, 0xF2),
        RoomType::Entry => Rgb::new(0xFF, 0xD4, 0xDB),
        RoomType::Hallway => Rgb::new(0xE8, 0xE8, 0xE8),
        RoomType::Other(_) => Rgb::WHITE,
    }
}

/// Fill color for a room, lightened when it is the current selection.
#[must_use]
pub fn color_for_type(room_type: &RoomType, selected: bool) -> Rgb {
    let base = base_color(room_type);
    if selected {
        lighten(base, SELECTED_LIGHTEN_PERCENT)
    } else {
        base
    }
}
