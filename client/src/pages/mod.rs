//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requests, navigation, socket
//! lifetime) and delegates rendering details to `components`.

pub mod auth;
pub mod home;
pub mod playground;
pub mod projects;
