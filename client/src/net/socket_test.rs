use canvas::plan::{Dimensions, Position, RoomType};
use serde_json::json;

use super::*;

#[test]
fn backoff_doubles_up_to_ceiling() {
    let mut delays = vec![INITIAL_BACKOFF_MS];
    for _ in 0..5 {
        let last = *delays.last().expect("delay");
        delays.push(next_backoff(last));
    }
    assert_eq!(delays, [1000, 2000, 4000, 8000, 10_000, 10_000]);
}

#[test]
fn open_handshake_is_followed_by_namespace_connect() {
    let open = r#"0{"sid":"s1","upgrades":[],"pingInterval":25000,"pingTimeout":20000}"#;
    assert_eq!(classify(open).expect("open"), Inbound::Reply("40".to_owned()));
}

#[test]
fn ping_gets_pong() {
    assert_eq!(classify("2").expect("ping"), Inbound::Reply("3".to_owned()));
}

#[test]
fn namespace_ack_marks_connected() {
    assert_eq!(classify(r#"40{"sid":"abc"}"#).expect("connect"), Inbound::Connected);
}

#[test]
fn room_update_event_is_surfaced() {
    let inbound = classify(r#"42["room-update",{"room":{"id":"r1"}}]"#).expect("event");
    assert_eq!(inbound, Inbound::Event(ProjectEvent::RoomUpdate(json!({"room": {"id": "r1"}}))));
}

#[test]
fn unrelated_events_and_pongs_are_ignored() {
    assert_eq!(classify(r#"42["cursor",{"x":1}]"#).expect("other"), Inbound::Ignore);
    assert_eq!(classify("3").expect("pong"), Inbound::Ignore);
    assert_eq!(classify("6").expect("noop"), Inbound::Ignore);
}

#[test]
fn close_and_refusal_end_the_session() {
    assert_eq!(classify("1").expect("close"), Inbound::Closed);
    assert_eq!(classify("41").expect("disconnect"), Inbound::Closed);
    assert_eq!(classify(r#"44{"message":"nope"}"#).expect("refused"), Inbound::Closed);
}

#[test]
fn malformed_frames_are_errors() {
    assert!(classify("").is_err());
    assert!(classify("42{").is_err());
}

#[test]
fn room_update_payload_wraps_room_with_project() {
    let room = Room::new("r1", "Kitchen", RoomType::Kitchen, Dimensions::new(10.0, 8.0), Position::new(2.0, 0.0));
    let payload = room_update_payload("p1", &room);
    assert_eq!(payload["projectId"], "p1");
    assert_eq!(payload["room"]["id"], "r1");
    assert_eq!(payload["room"]["type"], "kitchen");
}

#[test]
fn events_wait_for_join_and_keep_order() {
    let mut gate = SendGate::default();
    assert_eq!(gate.event("a".to_owned()), None);
    assert_eq!(gate.event("b".to_owned()), None);
    assert!(!gate.is_open());

    assert_eq!(gate.open(), ["a", "b"]);
    assert_eq!(gate.event("c".to_owned()).as_deref(), Some("c"));
}

#[test]
fn reconnect_holds_events_until_next_join() {
    let mut gate = SendGate::default();
    gate.open();
    gate.reset();
    assert_eq!(gate.event("late".to_owned()), None);
    assert_eq!(gate.open(), ["late"]);
    assert!(gate.open().is_empty());
}
