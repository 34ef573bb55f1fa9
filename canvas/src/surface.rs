//! Drawing surfaces.
//!
//! [`Surface`] is the narrow set of 2D operations the renderer needs. The
//! browser implementation forwards to [`web_sys::CanvasRenderingContext2d`];
//! [`crate::render::render_to_canvas`] acquires it per frame. [`DrawList`] records the
//! same calls as [`DrawCmd`] values so frames can be compared and inspected
//! without a browser.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::convert::Infallible;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// A 2D drawing target.
///
/// Style setters are infallible; operations the browser can reject return
/// `Self::Error`.
pub trait Surface {
    type Error;

    /// Erase a rectangle back to transparent.
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str, line_width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Stroke a single straight segment as its own path.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    /// Stroke a clockwise circular arc as its own path. Angles in radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
    /// Fill text anchored at `(x, y)` and rotated by `angle` radians around that anchor.
    fn fill_text_rotated(&mut self, text: &str, x: f64, y: f64, angle: f64) -> Result<(), Self::Error>;
}

// =============================================================
// Browser canvas
// =============================================================

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.clear_rect(x, y, w, h);
    }

    fn set_fill(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_stroke(&mut self, color: &str, line_width: f64) {
        self.set_stroke_style_str(color);
        self.set_line_width(line_width);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        CanvasRenderingContext2d::set_text_align(self, align.as_str());
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.begin_path();
        self.move_to(x1, y1);
        self.line_to(x2, y2);
        self.stroke();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        self.begin_path();
        CanvasRenderingContext2d::arc(self, cx, cy, radius, start, end)?;
        self.stroke();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::fill_text(self, text, x, y)
    }

    fn fill_text_rotated(&mut self, text: &str, x: f64, y: f64, angle: f64) -> Result<(), JsValue> {
        self.save();
        let drawn = self
            .translate(x, y)
            .and_then(|()| self.rotate(angle))
            .and_then(|()| CanvasRenderingContext2d::fill_text(self, text, 0.0, 0.0));
        self.restore();
        drawn
    }
}

// =============================================================
// Recording surface
// =============================================================

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear { x: f64, y: f64, w: f64, h: f64 },
    Fill(String),
    Stroke { color: String, line_width: f64 },
    Font(String),
    Align(TextAlign),
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    StrokeRect { x: f64, y: f64, w: f64, h: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Arc { cx: f64, cy: f64, radius: f64, start: f64, end: f64 },
    Text { text: String, x: f64, y: f64, angle: f64 },
}

/// A surface that records every call in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text commands in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Colors set via `Fill` immediately before each `FillRect`.
    #[must_use]
    pub fn rect_fills(&self) -> Vec<(&str, f64, f64, f64, f64)> {
        let mut fill = "";
        let mut out = Vec::new();
        for cmd in &self.cmds {
            match cmd {
                DrawCmd::Fill(color) => fill = color.as_str(),
                DrawCmd::FillRect { x, y, w, h } => out.push((fill, *x, *y, *w, *h)),
                _ => {}
            }
        }
        out
    }
}

impl Surface for DrawList {
    type Error = Infallible;

    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.cmds.push(DrawCmd::Clear { x, y, w, h });
    }

    fn set_fill(&mut self, color: &str) {
        self.cmds.push(DrawCmd::Fill(color.to_owned()));
    }

    fn set_stroke(&mut self, color: &str, line_width: f64) {
        self.cmds.push(DrawCmd::Stroke { color: color.to_owned(), line_width });
    }

    fn set_font(&mut self, font: &str) {
        self.cmds.push(DrawCmd::Font(font.to_owned()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.cmds.push(DrawCmd::Align(align));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.cmds.push(DrawCmd::FillRect { x, y, w, h });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.cmds.push(DrawCmd::StrokeRect { x, y, w, h });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.cmds.push(DrawCmd::Line { x1, y1, x2, y2 });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::Arc { cx, cy, radius, start, end });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Infallible> {
        self.fill_text_rotated(text, x, y, 0.0)
    }

    fn fill_text_rotated(&mut self, text: &str, x: f64, y: f64, angle: f64) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::Text { text: text.to_owned(), x, y, angle });
        Ok(())
    }
}
