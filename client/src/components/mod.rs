//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome, project cards and the playground
//! panels while reading shared state from Leptos context providers.

pub mod measurements;
pub mod navbar;
pub mod plan_canvas;
pub mod project_card;
pub mod room_editor;
