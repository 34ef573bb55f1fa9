//! Shared numeric constants and drawing styles for the canvas crate.

// ── Scale ───────────────────────────────────────────────────────

/// Canvas pixels per foot.
pub const SCALE: f64 = 20.0;

/// Background grid spacing in feet.
pub const GRID_SIZE_FT: f64 = 2.0;

// ── Grid and plot ───────────────────────────────────────────────

pub const GRID_COLOR: &str = "#e0e0e0";
pub const GRID_LINE_WIDTH: f64 = 0.5;

pub const PLOT_BORDER_COLOR: &str = "#000";
pub const PLOT_BORDER_WIDTH: f64 = 2.0;

// ── Rooms ───────────────────────────────────────────────────────

pub const ROOM_BORDER_COLOR: &str = "#000";
pub const ROOM_BORDER_WIDTH: f64 = 1.0;

/// Border drawn around the selected room.
pub const SELECTED_BORDER_COLOR: &str = "#2196F3";
pub const SELECTED_BORDER_WIDTH: f64 = 2.0;

/// Lightening applied to the selected room's fill, in percent.
pub const SELECTED_LIGHTEN_PERCENT: f64 = 20.0;

pub const LABEL_COLOR: &str = "#000";
pub const LABEL_FONT: &str = "14px Arial";

pub const DIMENSION_COLOR: &str = "#666";
pub const DIMENSION_FONT: &str = "12px Arial";

/// Gap between a room edge and its dimension text, in pixels.
pub const DIMENSION_PADDING_PX: f64 = 15.0;

/// Distance of the area label baseline above the room's bottom edge, in pixels.
pub const AREA_LABEL_INSET_PX: f64 = 5.0;

// ── Doors ───────────────────────────────────────────────────────

/// Door swing radius in pixels.
pub const DOOR_RADIUS_PX: f64 = 20.0;
pub const DOOR_COLOR: &str = "#000";
pub const DOOR_LINE_WIDTH: f64 = 2.0;
