//! REST client for the floor-plan backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! AUTH
//! ====
//! The bearer token is passed in by the caller on every call rather than read
//! from storage here, so the session lifecycle stays in `state::auth`. A 401
//! surfaces as [`ApiError::Unauthorized`]; the caller clears the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use canvas::plan::{FloorPlan, Room};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::types::{
    AuthResponse, ForgotPasswordRequest, GenerateRequest, LoginRequest, MessageResponse, NewProject, Project,
    ProjectUpdate, RegisterRequest,
};

fn user_endpoint(action: &str) -> String {
    format!("/users/{action}")
}

fn projects_endpoint() -> String {
    "/projects".to_owned()
}

fn project_endpoint(project_id: &str) -> String {
    format!("/projects/{project_id}")
}

fn generate_endpoint(project_id: &str) -> String {
    format!("/projects/{project_id}/generate")
}

fn plan_endpoint(project_id: &str, plan_id: &str) -> String {
    format!("/projects/{project_id}/plans/{plan_id}")
}

fn plan_resource_endpoint(project_id: &str, plan_id: &str, resource: &str) -> String {
    format!("{}/{resource}", plan_endpoint(project_id, plan_id))
}

fn room_endpoint(project_id: &str, plan_id: &str, room_id: &str) -> String {
    format!("{}/{room_id}", plan_resource_endpoint(project_id, plan_id, "rooms"))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Send one JSON request and decode a JSON response.
async fn send<B, T>(verb: Verb, path: &str, token: Option<&str>, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        };
        let url = crate::config::api_url(path);
        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer_header(token));
        }
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if !resp.ok() {
            let message = resp.json::<MessageResponse>().await.ok().and_then(|m| m.message);
            log::warn!("{verb:?} {path} failed: {status}");
            return Err(ApiError::from_status(status, message));
        }
        if status == 204 {
            return serde_json::from_value(Value::Null).map_err(|e| ApiError::Decode(e.to_string()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, token, body);
        Err(ApiError::Unavailable)
    }
}

async fn get<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    send::<Value, T>(Verb::Get, path, token, None).await
}

// =============================================================
// Auth
// =============================================================

/// `POST /users/login`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    send(Verb::Post, &user_endpoint("login"), None, Some(&body)).await
}

/// `POST /users/register`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the account cannot be created.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() };
    send(Verb::Post, &user_endpoint("register"), None, Some(&body)).await
}

/// `POST /users/forgot-password`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn forgot_password(email: &str) -> Result<MessageResponse, ApiError> {
    let body = ForgotPasswordRequest { email: email.to_owned() };
    send(Verb::Post, &user_endpoint("forgot-password"), None, Some(&body)).await
}

// =============================================================
// Projects
// =============================================================

/// `GET /projects`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn list_projects(token: Option<&str>) -> Result<Vec<Project>, ApiError> {
    get(&projects_endpoint(), token).await
}

/// `GET /projects/:id`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn get_project(token: Option<&str>, project_id: &str) -> Result<Project, ApiError> {
    get(&project_endpoint(project_id), token).await
}

/// `POST /projects`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn create_project(token: Option<&str>, project: &NewProject) -> Result<Project, ApiError> {
    send(Verb::Post, &projects_endpoint(), token, Some(project)).await
}

/// `PUT /projects/:id`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn update_project(token: Option<&str>, project_id: &str, update: &ProjectUpdate) -> Result<Value, ApiError> {
    send(Verb::Put, &project_endpoint(project_id), token, Some(update)).await
}

/// `DELETE /projects/:id`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn delete_project(token: Option<&str>, project_id: &str) -> Result<Value, ApiError> {
    send::<Value, Value>(Verb::Delete, &project_endpoint(project_id), token, None).await
}

// =============================================================
// Plans
// =============================================================

/// `POST /projects/:id/generate`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the plan cannot be decoded.
pub async fn generate_plan(token: Option<&str>, project_id: &str, request: &GenerateRequest) -> Result<FloorPlan, ApiError> {
    send(Verb::Post, &generate_endpoint(project_id), token, Some(request)).await
}

/// `PUT /projects/:id/plans/:planId`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn save_plan(token: Option<&str>, project_id: &str, plan_id: &str, plan: &FloorPlan) -> Result<Value, ApiError> {
    send(Verb::Put, &plan_endpoint(project_id, plan_id), token, Some(plan)).await
}

/// `POST /projects/:id/plans/:planId/rooms`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn add_room(token: Option<&str>, project_id: &str, plan_id: &str, room: &Room) -> Result<Value, ApiError> {
    send(Verb::Post, &plan_resource_endpoint(project_id, plan_id, "rooms"), token, Some(room)).await
}

/// `PUT /projects/:id/plans/:planId/rooms/:roomId`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn update_room(token: Option<&str>, project_id: &str, plan_id: &str, room: &Room) -> Result<Value, ApiError> {
    send(Verb::Put, &room_endpoint(project_id, plan_id, &room.id), token, Some(room)).await
}

/// `DELETE /projects/:id/plans/:planId/rooms/:roomId`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn delete_room(token: Option<&str>, project_id: &str, plan_id: &str, room_id: &str) -> Result<Value, ApiError> {
    send::<Value, Value>(Verb::Delete, &room_endpoint(project_id, plan_id, room_id), token, None).await
}

/// `GET /projects/:id/plans/:planId/measurements`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn measurements(token: Option<&str>, project_id: &str, plan_id: &str) -> Result<Value, ApiError> {
    get(&plan_resource_endpoint(project_id, plan_id, "measurements"), token).await
}

/// `GET /projects/:id/plans/:planId/history`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn plan_history(token: Option<&str>, project_id: &str, plan_id: &str) -> Result<Value, ApiError> {
    get(&plan_resource_endpoint(project_id, plan_id, "history"), token).await
}

/// `POST /projects/:id/plans/:planId/validate-room`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails.
pub async fn validate_room(token: Option<&str>, project_id: &str, plan_id: &str, room: &Room) -> Result<Value, ApiError> {
    send(Verb::Post, &plan_resource_endpoint(project_id, plan_id, "validate-room"), token, Some(room)).await
}
