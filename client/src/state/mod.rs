//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`auth`, `projects`, `playground`) so components
//! depend on small focused models. Each model is plain data with methods and
//! is wrapped in an `RwSignal` context by `app::App`.

pub mod auth;
pub mod playground;
pub mod projects;
