use super::*;

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("/api", "/projects"), "/api/projects");
    assert_eq!(join_url("/api/", "projects"), "/api/projects");
    assert_eq!(join_url("http://localhost:5001/api/", "/users/login"), "http://localhost:5001/api/users/login");
}

#[test]
fn socket_url_maps_http_schemes_to_websocket() {
    assert_eq!(
        socket_url("http://localhost:5001"),
        "ws://localhost:5001/socket.io/?EIO=4&transport=websocket"
    );
    assert_eq!(
        socket_url("https://plans.example.com/"),
        "wss://plans.example.com/socket.io/?EIO=4&transport=websocket"
    );
}

#[test]
fn socket_url_keeps_websocket_origins() {
    assert_eq!(socket_url("ws://host:9"), "ws://host:9/socket.io/?EIO=4&transport=websocket");
}

#[test]
fn token_storage_key_is_stable() {
    assert_eq!(TOKEN_STORAGE_KEY, "floorplan_token");
}
