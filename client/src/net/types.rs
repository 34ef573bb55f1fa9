//! Request and response bodies for the REST API.
//!
//! DESIGN
//! ======
//! The backend stores documents with Mongo-style `_id` keys and camelCase
//! fields. Projects keep unknown fields in `extra` so a load/save cycle does
//! not strip data this client does not edit. Plan geometry types live in
//! `canvas::plan` and are reused here unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use canvas::plan::{FloorPlan, Plot};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Minimal user profile echoed by the auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of login and register responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ message }` body used by acknowledgements and error responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Room counts and optional spaces submitted for generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub kitchen: bool,
    pub living_room: bool,
    pub dining_room: bool,
    pub study: bool,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            bedrooms: 2,
            bathrooms: 2,
            kitchen: true,
            living_room: true,
            dining_room: false,
            study: false,
        }
    }
}

/// A saved playground.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default = "empty_plot")]
    pub dimensions: Plot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_plan: Option<FloorPlan>,
    /// ISO-8601 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// ISO-8601 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

fn empty_plot() -> Plot {
    Plot::new(0.0, 0.0)
}

impl Project {
    /// Plot dimensions when the project has been sized, else `None`.
    #[must_use]
    pub fn sized_plot(&self) -> Option<Plot> {
        (self.dimensions.width > 0.0 && self.dimensions.length > 0.0).then_some(self.dimensions)
    }
}

/// Body of `POST /projects`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub dimensions: Plot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl NewProject {
    /// A new project has an empty plot until it is sized in the playground.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), dimensions: empty_plot(), created_at: None }
    }
}

/// Body of `PUT /projects/:id` as sent by the playground.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub dimensions: Plot,
    pub requirements: Requirements,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_plan: Option<FloorPlan>,
}

/// Body of `POST /projects/:id/generate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub dimensions: Plot,
    pub requirements: Requirements,
}
