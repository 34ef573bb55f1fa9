use super::*;

#[test]
fn user_endpoints_live_under_users() {
    assert_eq!(user_endpoint("login"), "/users/login");
    assert_eq!(user_endpoint("register"), "/users/register");
    assert_eq!(user_endpoint("forgot-password"), "/users/forgot-password");
}

#[test]
fn project_endpoints_format_expected_paths() {
    assert_eq!(projects_endpoint(), "/projects");
    assert_eq!(project_endpoint("p1"), "/projects/p1");
    assert_eq!(generate_endpoint("p1"), "/projects/p1/generate");
}

#[test]
fn plan_endpoints_nest_under_project() {
    assert_eq!(plan_endpoint("p1", "f2"), "/projects/p1/plans/f2");
    assert_eq!(plan_resource_endpoint("p1", "f2", "rooms"), "/projects/p1/plans/f2/rooms");
    assert_eq!(plan_resource_endpoint("p1", "f2", "measurements"), "/projects/p1/plans/f2/measurements");
    assert_eq!(plan_resource_endpoint("p1", "f2", "history"), "/projects/p1/plans/f2/history");
    assert_eq!(plan_resource_endpoint("p1", "f2", "validate-room"), "/projects/p1/plans/f2/validate-room");
    assert_eq!(room_endpoint("p1", "f2", "r3"), "/projects/p1/plans/f2/rooms/r3");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let result = block_on(list_projects(Some("t")));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that never yields `Pending`.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
