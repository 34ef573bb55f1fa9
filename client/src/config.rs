//! Build-time client configuration.
//!
//! Values come from environment variables read by `option_env!` when the
//! bundle is compiled, so the same WASM file can be pointed at a different
//! backend without code changes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// REST base URL. Defaults to the `/api` proxy mounted by the server host.
pub const API_BASE_URL: &str = match option_env!("FLOORPLAN_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// Origin of the realtime server. `None` means the page origin.
pub const SOCKET_ORIGIN: Option<&str> = option_env!("FLOORPLAN_SOCKET_URL");

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "floorplan_token";

/// Join `path` onto `base`, with exactly one slash between them.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Full REST URL for an endpoint path such as `/projects/42`.
#[must_use]
pub fn api_url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

/// WebSocket URL for the realtime transport, derived from an HTTP origin.
///
/// `http` becomes `ws` and `https` becomes `wss`; an origin that already uses
/// a WebSocket scheme is kept.
#[must_use]
pub fn socket_url(origin: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let ws_origin = if let Some(rest) = origin.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = origin.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        origin.to_owned()
    };
    format!("{ws_origin}{}", packets::TRANSPORT_PATH)
}
