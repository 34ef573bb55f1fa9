use serde_json::json;

use super::*;

fn message(text: &str) -> SocketPacket {
    match decode(text).expect("decode should succeed") {
        EnginePacket::Message(packet) => packet,
        other => panic!("expected message, got {other:?}"),
    }
}

// =============================================================
// Engine.IO
// =============================================================

#[test]
fn decodes_open_handshake() {
    let text = r#"0{"sid":"abc","upgrades":[],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#;
    let EnginePacket::Open(handshake) = decode(text).expect("open") else {
        panic!("expected open");
    };
    assert_eq!(handshake.sid, "abc");
    assert_eq!(handshake.ping_interval, 25000);
    assert_eq!(handshake.ping_timeout, 20000);
    assert_eq!(handshake.max_payload, 1_000_000);
}

#[test]
fn handshake_tolerates_missing_optional_fields() {
    let text = r#"0{"sid":"s","pingInterval":1,"pingTimeout":2}"#;
    assert!(matches!(decode(text), Ok(EnginePacket::Open(h)) if h.upgrades.is_empty() && h.max_payload == 0));
}

#[test]
fn ping_is_answered_with_matching_pong() {
    let ping = decode("2").expect("ping");
    assert_eq!(ping, EnginePacket::Ping(String::new()));
    let reply = ping.reply().expect("reply");
    assert_eq!(encode(&reply), "3");

    let probe = decode("2probe").expect("probe");
    assert_eq!(encode(&probe.reply().expect("reply")), "3probe");
}

#[test]
fn non_ping_packets_need_no_reply() {
    assert!(EnginePacket::Noop.reply().is_none());
    assert!(EnginePacket::Message(SocketPacket::connect()).reply().is_none());
}

#[test]
fn control_packets_are_single_digits() {
    assert_eq!(decode("1").expect("close"), EnginePacket::Close);
    assert_eq!(decode("5").expect("upgrade"), EnginePacket::Upgrade);
    assert_eq!(decode("6").expect("noop"), EnginePacket::Noop);
    assert_eq!(encode(&EnginePacket::Close), "1");
}

#[test]
fn rejects_empty_and_unknown_engine_frames() {
    assert!(matches!(decode(""), Err(CodecError::Empty)));
    assert!(matches!(decode("9"), Err(CodecError::InvalidEngineType('9'))));
}

// =============================================================
// Socket.IO
// =============================================================

#[test]
fn default_namespace_connect_is_forty() {
    assert_eq!(encode(&EnginePacket::Message(SocketPacket::connect())), "40");
}

#[test]
fn decodes_connect_ack_with_sid() {
    let packet = message(r#"40{"sid":"xyz"}"#);
    assert_eq!(
        packet,
        SocketPacket::Connect { namespace: "/".to_owned(), data: Some(json!({"sid": "xyz"})) }
    );
}

#[test]
fn event_encodes_name_then_args() {
    let packet = EnginePacket::Message(SocketPacket::event("room-update", vec![json!({"id": "r1"})]));
    assert_eq!(encode(&packet), r#"42["room-update",{"id":"r1"}]"#);
}

#[test]
fn decodes_event_with_namespace_and_ack() {
    let packet = message(r#"42/admin,7["hello",1,"two"]"#);
    assert_eq!(
        packet,
        SocketPacket::Event {
            namespace: "/admin".to_owned(),
            ack: Some(7),
            name: "hello".to_owned(),
            args: vec![json!(1), json!("two")],
        }
    );
}

#[test]
fn custom_namespace_and_ack_survive_encoding() {
    let packet = EnginePacket::Message(SocketPacket::Event {
        namespace: "/admin".to_owned(),
        ack: Some(12),
        name: "ping".to_owned(),
        args: Vec::new(),
    });
    assert_eq!(encode(&packet), r#"42/admin,12["ping"]"#);
}

#[test]
fn decodes_ack_and_disconnect() {
    assert_eq!(
        message(r#"433["ok"]"#),
        SocketPacket::Ack { namespace: "/".to_owned(), ack: 3, args: vec![json!("ok")] }
    );
    assert_eq!(message("41"), SocketPacket::Disconnect { namespace: "/".to_owned() });
}

#[test]
fn decodes_connect_error() {
    let packet = message(r#"44{"message":"Not authorized"}"#);
    assert!(matches!(packet, SocketPacket::ConnectError { data: Some(d), .. } if d["message"] == "Not authorized"));
}

#[test]
fn rejects_binary_and_malformed_socket_packets() {
    assert!(matches!(decode(r#"451-["upload",{"_placeholder":true,"num":0}]"#), Err(CodecError::Binary)));
    assert!(matches!(decode("48"), Err(CodecError::InvalidSocketType('8'))));
    assert!(matches!(decode("42/admin"), Err(CodecError::Namespace)));
    assert!(matches!(decode(r#"42{"not":"array"}"#), Err(CodecError::Payload("event"))));
    assert!(matches!(decode("42[]"), Err(CodecError::Payload("event"))));
    assert!(matches!(decode("42[1]"), Err(CodecError::Payload("event"))));
    assert!(matches!(decode("42[oops"), Err(CodecError::Json(_))));
}

// =============================================================
// Project events
// =============================================================

#[test]
fn join_and_leave_carry_the_project_id() {
    assert_eq!(encode(&ProjectEvent::JoinProject("p1".to_owned()).to_packet()), r#"42["join-project","p1"]"#);
    assert_eq!(encode(&ProjectEvent::LeaveProject("p1".to_owned()).to_packet()), r#"42["leave-project","p1"]"#);
}

#[test]
fn room_update_is_read_back_from_incoming_event() {
    let packet = message(r#"42["room-update",{"projectId":"p1","room":{"id":"r1"}}]"#);
    let event = ProjectEvent::from_packet(&packet).expect("event");
    assert_eq!(event, Some(ProjectEvent::RoomUpdate(json!({"projectId": "p1", "room": {"id": "r1"}}))));
}

#[test]
fn unrelated_packets_are_not_project_events() {
    assert_eq!(ProjectEvent::from_packet(&SocketPacket::connect()).expect("connect"), None);
    let other = SocketPacket::event("cursor", vec![json!(1)]);
    assert_eq!(ProjectEvent::from_packet(&other).expect("other"), None);
}

#[test]
fn join_without_string_id_is_rejected() {
    let packet = SocketPacket::event(JOIN_PROJECT, vec![json!(42)]);
    assert!(matches!(ProjectEvent::from_packet(&packet), Err(CodecError::Payload("project id"))));
}

#[test]
fn transport_path_selects_engine_io_v4_websocket() {
    assert_eq!(TRANSPORT_PATH, "/socket.io/?EIO=4&transport=websocket");
}
