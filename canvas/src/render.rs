//! Rendering: draws a plot and its floor plan onto a [`Surface`].
//!
//! Drawing is a pure projection of a [`Scene`]: the same scene always issues
//! the same sequence of surface calls, and nothing is retained between frames.
//! Every frame starts by clearing the whole plot area. Rooms are painted in
//! plan order, so a later room covers an earlier one where they overlap.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::{FRAC_PI_2, PI};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::color_for_type;
use crate::consts::{
    AREA_LABEL_INSET_PX, DIMENSION_COLOR, DIMENSION_FONT, DIMENSION_PADDING_PX, DOOR_COLOR, DOOR_LINE_WIDTH,
    DOOR_RADIUS_PX, GRID_COLOR, GRID_LINE_WIDTH, GRID_SIZE_FT, LABEL_COLOR, LABEL_FONT, PLOT_BORDER_COLOR,
    PLOT_BORDER_WIDTH, ROOM_BORDER_COLOR, ROOM_BORDER_WIDTH, SCALE, SELECTED_BORDER_COLOR, SELECTED_BORDER_WIDTH,
};
use crate::plan::{FloorPlan, Plot, Room, Wall};
use crate::surface::{Surface, TextAlign};

/// Everything one frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub plot: Plot,
    pub plan: Option<&'a FloorPlan>,
    /// Id of the selected room, if any.
    pub selected: Option<&'a str>,
}

impl<'a> Scene<'a> {
    #[must_use]
    pub fn new(plot: Plot, plan: Option<&'a FloorPlan>, selected: Option<&'a str>) -> Self {
        Self { plot, plan, selected }
    }

    /// Plot extent in canvas pixels.
    #[must_use]
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.plot.width * SCALE, self.plot.length * SCALE)
    }
}

/// Draw the full scene: grid, plot boundary, then rooms in plan order.
///
/// # Errors
///
/// Returns the surface's error if a text or arc call is rejected.
pub fn draw<S: Surface>(surface: &mut S, scene: &Scene<'_>) -> Result<(), S::Error> {
    let (width, height) = scene.pixel_size();

    surface.clear(0.0, 0.0, width, height);
    draw_grid(surface, width, height);

    surface.set_stroke(PLOT_BORDER_COLOR, PLOT_BORDER_WIDTH);
    surface.stroke_rect(0.0, 0.0, width, height);

    if let Some(plan) = scene.plan {
        for room in &plan.rooms {
            let selected = scene.selected.is_some_and(|id| id == room.id);
            draw_room(surface, room, selected)?;
        }
    }
    Ok(())
}

/// Size `canvas` to the plot and draw the scene through its 2D context.
///
/// The context is acquired for this frame only. Returns `Ok(false)` without
/// drawing when the canvas is not mounted or has no 2D context.
///
/// # Errors
///
/// Returns `Err` if the browser rejects a context or drawing call.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_to_canvas(canvas: Option<&HtmlCanvasElement>, scene: &Scene<'_>) -> Result<bool, JsValue> {
    let Some(canvas) = canvas else {
        return Ok(false);
    };
    let (width, height) = scene.pixel_size();
    canvas.set_width(width.max(0.0).round() as u32);
    canvas.set_height(height.max(0.0).round() as u32);

    let Some(raw) = canvas.get_context("2d")? else {
        return Ok(false);
    };
    let mut ctx = match raw.dyn_into::<CanvasRenderingContext2d>() {
        Ok(ctx) => ctx,
        Err(_) => return Ok(false),
    };
    draw(&mut ctx, scene)?;
    Ok(true)
}

// =============================================================
// Layers
// =============================================================

fn draw_grid<S: Surface>(surface: &mut S, width: f64, height: f64) {
    let step = GRID_SIZE_FT * SCALE;
    surface.set_stroke(GRID_COLOR, GRID_LINE_WIDTH);

    let mut x = 0.0;
    while x <= width {
        surface.line(x, 0.0, x, height);
        x += step;
    }
    let mut y = 0.0;
    while y <= height {
        surface.line(0.0, y, width, y);
        y += step;
    }
}

fn draw_room<S: Surface>(surface: &mut S, room: &Room, selected: bool) -> Result<(), S::Error> {
    let x = room.position.x * SCALE;
    let y = room.position.y * SCALE;
    let w = room.dimensions.width * SCALE;
    let h = room.dimensions.length * SCALE;

    surface.set_fill(&color_for_type(&room.room_type, selected).to_string());
    surface.fill_rect(x, y, w, h);

    if selected {
        surface.set_stroke(SELECTED_BORDER_COLOR, SELECTED_BORDER_WIDTH);
    } else {
        surface.set_stroke(ROOM_BORDER_COLOR, ROOM_BORDER_WIDTH);
    }
    surface.stroke_rect(x, y, w, h);

    surface.set_fill(LABEL_COLOR);
    surface.set_font(LABEL_FONT);
    surface.set_text_align(TextAlign::Center);
    surface.fill_text(&room.name, x + w / 2.0, y + h / 2.0)?;

    draw_dimensions(surface, room, x, y, w, h)?;

    if room.door.is_some() {
        draw_door(surface, room, x, y, w, h)?;
    }
    Ok(())
}

fn draw_dimensions<S: Surface>(surface: &mut S, room: &Room, x: f64, y: f64, w: f64, h: f64) -> Result<(), S::Error> {
    surface.set_fill(DIMENSION_COLOR);
    surface.set_font(DIMENSION_FONT);

    // Width above the top edge, length rotated up the left edge.
    surface.fill_text(&format!("{}'", room.dimensions.width), x + w / 2.0, y - DIMENSION_PADDING_PX)?;
    surface.fill_text_rotated(
        &format!("{}'", room.dimensions.length),
        x - DIMENSION_PADDING_PX,
        y + h / 2.0,
        -FRAC_PI_2,
    )?;

    surface.fill_text(&room.size_label(), x + w / 2.0, y + h - AREA_LABEL_INSET_PX)
}

/// Door swing arc on its wall, bulging away from the room interior.
fn draw_door<S: Surface>(surface: &mut S, room: &Room, x: f64, y: f64, w: f64, h: f64) -> Result<(), S::Error> {
    let Some(door) = room.door else {
        return Ok(());
    };
    let offset = door.offset * SCALE;

    surface.set_stroke(DOOR_COLOR, DOOR_LINE_WIDTH);
    match door.wall {
        Wall::North => surface.arc(x + offset, y, DOOR_RADIUS_PX, PI, 0.0),
        Wall::South => surface.arc(x + offset, y + h, DOOR_RADIUS_PX, 0.0, PI),
        Wall::East => surface.arc(x + w, y + offset, DOOR_RADIUS_PX, -FRAC_PI_2, FRAC_PI_2),
        Wall::West => surface.arc(x, y + offset, DOOR_RADIUS_PX, FRAC_PI_2, -FRAC_PI_2),
    }
}
