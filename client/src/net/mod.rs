//! Networking modules for the REST API and the realtime project socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `error` classifies their failures, `socket`
//! manages the Socket.IO lifecycle, and `types` defines the request and
//! response bodies.

pub mod api;
pub mod error;
pub mod socket;
pub mod types;
