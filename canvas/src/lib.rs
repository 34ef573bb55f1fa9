//! Floor-plan rendering and hit-testing for the playground editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but only
//! the canvas binding in [`surface`] and [`render`] needs a browser; the
//! renderer itself is exercised natively in tests. It owns no application state:
//! the editor hands it a plot, a plan and a selection for each frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`plan`] | Plot, room and floor-plan types plus immutable update helpers |
//! | [`color`] | Room-type palette and RGB lightening |
//! | [`geometry`] | Canvas points, area/perimeter and plan measurements |
//! | [`surface`] | Drawing-surface trait, recording `DrawList`, canvas 2D binding |
//! | [`render`] | Scene rendering onto any [`surface::Surface`] |
//! | [`hit`] | Grid snapping and point-in-room tests |
//! | [`consts`] | Scale, grid spacing and drawing styles |

pub mod color;
pub mod consts;
pub mod geometry;
pub mod hit;
pub mod plan;
pub mod render;
pub mod surface;
