//! Plan model: plot dimensions, rooms, and the floor plan that holds them.
//!
//! Plans arrive from the generation service as JSON and are rendered as-is.
//! Edits never mutate a plan in place; the `with_*` / `without_*` helpers
//! return a new [`FloorPlan`] so the editor can swap it into its state
//! wholesale. Fields the backend adds that this crate does not model are kept
//! in `extra` and written back unchanged on save.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a room within a plan.
pub type RoomId = String;

/// Width and length in feet. Used both for rooms and for the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }
}

/// Outer boundary of the site, in feet.
pub type Plot = Dimensions;

/// Offset of a room's top-left corner from the plot origin, in feet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Room category. Drives the fill color.
///
/// Strings outside the known set are kept verbatim in `Other` so a plan
/// round-trips without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    Bedroom,
    Bathroom,
    Kitchen,
    Living,
    Dining,
    Study,
    Entry,
    Hallway,
    Other(String),
}

impl RoomType {
    /// The eight known types, in editor display order.
    pub const KNOWN: [RoomType; 8] = [
        RoomType::Bedroom,
        RoomType::Bathroom,
        RoomType::Kitchen,
        RoomType::Living,
        RoomType::Dining,
        RoomType::Study,
        RoomType::Entry,
        RoomType::Hallway,
    ];

    /// Wire name, e.g. `"bedroom"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bedroom => "bedroom",
            Self::Bathroom => "bathroom",
            Self::Kitchen => "kitchen",
            Self::Living => "living",
            Self::Dining => "dining",
            Self::Study => "study",
            Self::Entry => "entry",
            Self::Hallway => "hallway",
            Self::Other(raw) => raw,
        }
    }

    /// Display name with the first letter capitalized.
    #[must_use]
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for RoomType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "bedroom" => Self::Bedroom,
            "bathroom" => Self::Bathroom,
            "kitchen" => Self::Kitchen,
            "living" => Self::Living,
            "dining" => Self::Dining,
            "study" => Self::Study,
            "entry" => Self::Entry,
            "hallway" => Self::Hallway,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for RoomType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<RoomType> for String {
    fn from(kind: RoomType) -> Self {
        match kind {
            RoomType::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wall of a room that holds a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    North,
    South,
    East,
    West,
}

/// A door on one wall, `offset` feet from that wall's start (left or top end).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub wall: Wall,
    pub offset: f64,
}

/// A single placed room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(alias = "_id")]
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub dimensions: Dimensions,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door: Option<Door>,
    /// Backend fields not modeled here.
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl Room {
    #[must_use]
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>, room_type: RoomType, dimensions: Dimensions, position: Position) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room_type,
            dimensions,
            position,
            door: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_door(mut self, door: Door) -> Self {
        self.door = Some(door);
        self
    }

    /// `W'×L'` label used under the room name.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{}'×{}'", self.dimensions.width, self.dimensions.length)
    }

    /// Return a copy with every present field of `patch` applied.
    #[must_use]
    pub fn patched(&self, patch: &RoomPatch) -> Self {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name.clone_from(name);
        }
        if let Some(room_type) = &patch.room_type {
            next.room_type = room_type.clone();
        }
        if let Some(width) = patch.width {
            next.dimensions.width = width;
        }
        if let Some(length) = patch.length {
            next.dimensions.length = length;
        }
        if let Some(x) = patch.x {
            next.position.x = x;
        }
        if let Some(y) = patch.y {
            next.position.y = y;
        }
        next
    }
}

/// Sparse room edit. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub room_type: Option<RoomType>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// The set of rooms placed within a plot. Draw order is `rooms` order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Backend fields not modeled here.
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl FloorPlan {
    #[must_use]
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { id: None, rooms, extra: Map::new() }
    }

    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Replace the room whose id matches `room.id`, keeping its slot.
    #[must_use]
    pub fn with_room_replaced(&self, room: Room) -> Self {
        let rooms = self
            .rooms
            .iter()
            .map(|r| if r.id == room.id { room.clone() } else { r.clone() })
            .collect();
        Self { rooms, ..self.shallow() }
    }

    /// Apply `patch` to the room with `id`. Unknown ids leave the plan unchanged.
    #[must_use]
    pub fn with_room_patched(&self, id: &str, patch: &RoomPatch) -> Self {
        let rooms = self
            .rooms
            .iter()
            .map(|r| if r.id == id { r.patched(patch) } else { r.clone() })
            .collect();
        Self { rooms, ..self.shallow() }
    }

    /// Append a room; it draws above every existing room.
    #[must_use]
    pub fn with_room_added(&self, room: Room) -> Self {
        let mut next = self.clone();
        next.rooms.push(room);
        next
    }

    /// Drop the room with `id`, preserving the order of the rest.
    #[must_use]
    pub fn without_room(&self, id: &str) -> Self {
        let rooms = self.rooms.iter().filter(|r| r.id != id).cloned().collect();
        Self { rooms, ..self.shallow() }
    }

    fn shallow(&self) -> Self {
        Self {
            id: self.id.clone(),
            rooms: Vec::new(),
            extra: self.extra.clone(),
        }
    }
}
