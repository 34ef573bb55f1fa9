//! Text packet codec for the realtime project channel.
//!
//! The channel speaks Socket.IO (protocol 5) carried over Engine.IO (protocol
//! 4) text frames on a WebSocket. Only the subset the playground needs is
//! modelled: the Engine.IO handshake and heartbeat, and Socket.IO connect,
//! disconnect, event and ack packets with JSON payloads. Binary attachments
//! are rejected.
//!
//! [`ProjectEvent`] is the typed view of the three collaboration events the
//! client emits and consumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default Socket.IO namespace. Omitted on the wire.
pub const DEFAULT_NAMESPACE: &str = "/";

/// Path and query of the WebSocket transport endpoint.
pub const TRANSPORT_PATH: &str = "/socket.io/?EIO=4&transport=websocket";

/// Event name for joining a project room.
pub const JOIN_PROJECT: &str = "join-project";
/// Event name for leaving a project room.
pub const LEAVE_PROJECT: &str = "leave-project";
/// Event name for room changes broadcast to a project room.
pub const ROOM_UPDATE: &str = "room-update";

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text frame was empty.
    #[error("empty packet")]
    Empty,
    /// The leading Engine.IO type digit is not a known packet type.
    #[error("invalid engine packet type: {0:?}")]
    InvalidEngineType(char),
    /// The Socket.IO type digit is not a known packet type.
    #[error("invalid socket packet type: {0:?}")]
    InvalidSocketType(char),
    /// Binary events and acks need attachment frames, which are not handled.
    #[error("binary packets are not supported")]
    Binary,
    /// The JSON payload could not be parsed.
    #[error("failed to decode packet payload: {0}")]
    Json(#[from] serde_json::Error),
    /// A namespace was opened with `/` but never closed with `,`.
    #[error("unterminated namespace")]
    Namespace,
    /// The payload was valid JSON but not the shape the packet type requires.
    #[error("malformed {0} payload")]
    Payload(&'static str),
}

/// Engine.IO open handshake, sent by the server right after the upgrade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    /// Milliseconds between server pings.
    pub ping_interval: u64,
    /// Milliseconds the server waits for a pong.
    pub ping_timeout: u64,
    #[serde(default)]
    pub max_payload: u64,
}

/// One Engine.IO text frame.
#[derive(Clone, Debug, PartialEq)]
pub enum EnginePacket {
    Open(Handshake),
    Close,
    /// Heartbeat. The server pings and the client answers with a pong carrying
    /// the same payload.
    Ping(String),
    Pong(String),
    Message(SocketPacket),
    Upgrade,
    Noop,
}

impl EnginePacket {
    /// The reply a client owes for this packet, if any.
    #[must_use]
    pub fn reply(&self) -> Option<EnginePacket> {
        match self {
            Self::Ping(payload) => Some(Self::Pong(payload.clone())),
            _ => None,
        }
    }
}

/// One Socket.IO packet, carried inside [`EnginePacket::Message`].
#[derive(Clone, Debug, PartialEq)]
pub enum SocketPacket {
    Connect { namespace: String, data: Option<Value> },
    Disconnect { namespace: String },
    Event { namespace: String, ack: Option<u64>, name: String, args: Vec<Value> },
    Ack { namespace: String, ack: u64, args: Vec<Value> },
    ConnectError { namespace: String, data: Option<Value> },
}

impl SocketPacket {
    /// Connect request for the default namespace.
    #[must_use]
    pub fn connect() -> Self {
        Self::Connect { namespace: DEFAULT_NAMESPACE.to_owned(), data: None }
    }

    /// Event on the default namespace without an ack.
    #[must_use]
    pub fn event(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self::Event { namespace: DEFAULT_NAMESPACE.to_owned(), ack: None, name: name.into(), args }
    }

    fn type_digit(&self) -> char {
        match self {
            Self::Connect { .. } => '0',
            Self::Disconnect { .. } => '1',
            Self::Event { .. } => '2',
            Self::Ack { .. } => '3',
            Self::ConnectError { .. } => '4',
        }
    }

    fn namespace(&self) -> &str {
        match self {
            Self::Connect { namespace, .. }
            | Self::Disconnect { namespace }
            | Self::Event { namespace, .. }
            | Self::Ack { namespace, .. }
            | Self::ConnectError { namespace, .. } => namespace,
        }
    }
}

/// Encode a packet as an Engine.IO text frame.
#[must_use]
pub fn encode(packet: &EnginePacket) -> String {
    match packet {
        EnginePacket::Open(handshake) => {
            format!("0{}", serde_json::to_string(handshake).unwrap_or_default())
        }
        EnginePacket::Close => "1".to_owned(),
        EnginePacket::Ping(payload) => format!("2{payload}"),
        EnginePacket::Pong(payload) => format!("3{payload}"),
        EnginePacket::Message(socket) => format!("4{}", encode_socket(socket)),
        EnginePacket::Upgrade => "5".to_owned(),
        EnginePacket::Noop => "6".to_owned(),
    }
}

fn encode_socket(packet: &SocketPacket) -> String {
    let mut out = String::new();
    out.push(packet.type_digit());

    let namespace = packet.namespace();
    if namespace != DEFAULT_NAMESPACE && !namespace.is_empty() {
        out.push_str(namespace);
        out.push(',');
    }

    match packet {
        SocketPacket::Connect { data, .. } | SocketPacket::ConnectError { data, .. } => {
            if let Some(data) = data {
                out.push_str(&data.to_string());
            }
        }
        SocketPacket::Disconnect { .. } => {}
        SocketPacket::Event { ack, name, args, .. } => {
            if let Some(id) = ack {
                out.push_str(&id.to_string());
            }
            let mut items = Vec::with_capacity(args.len() + 1);
            items.push(Value::String(name.clone()));
            items.extend(args.iter().cloned());
            out.push_str(&Value::Array(items).to_string());
        }
        SocketPacket::Ack { ack, args, .. } => {
            out.push_str(&ack.to_string());
            out.push_str(&Value::Array(args.clone()).to_string());
        }
    }
    out
}

/// Decode one Engine.IO text frame.
///
/// # Errors
///
/// Returns [`CodecError`] for empty frames, unknown type digits, binary
/// Socket.IO packets and payloads that are not the JSON shape their packet
/// type requires.
pub fn decode(text: &str) -> Result<EnginePacket, CodecError> {
    let mut chars = text.chars();
    let kind = chars.next().ok_or(CodecError::Empty)?;
    let rest = chars.as_str();

    match kind {
        '0' => Ok(EnginePacket::Open(serde_json::from_str(rest)?)),
        '1' => Ok(EnginePacket::Close),
        '2' => Ok(EnginePacket::Ping(rest.to_owned())),
        '3' => Ok(EnginePacket::Pong(rest.to_owned())),
        '4' => Ok(EnginePacket::Message(decode_socket(rest)?)),
        '5' => Ok(EnginePacket::Upgrade),
        '6' => Ok(EnginePacket::Noop),
        other => Err(CodecError::InvalidEngineType(other)),
    }
}

fn decode_socket(text: &str) -> Result<SocketPacket, CodecError> {
    let mut chars = text.chars();
    let kind = chars.next().ok_or(CodecError::Empty)?;
    let mut rest = chars.as_str();

    if matches!(kind, '5' | '6') {
        return Err(CodecError::Binary);
    }
    if !matches!(kind, '0'..='4') {
        return Err(CodecError::InvalidSocketType(kind));
    }

    let namespace = if rest.starts_with('/') {
        let end = rest.find(',').ok_or(CodecError::Namespace)?;
        let ns = rest[..end].to_owned();
        rest = &rest[end + 1..];
        ns
    } else {
        DEFAULT_NAMESPACE.to_owned()
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let ack = if digits > 0 {
        let id = rest[..digits].parse::<u64>().map_err(|_| CodecError::Payload("ack id"))?;
        rest = &rest[digits..];
        Some(id)
    } else {
        None
    };

    let data: Option<Value> = if rest.is_empty() { None } else { Some(serde_json::from_str(rest)?) };

    match kind {
        '0' => Ok(SocketPacket::Connect { namespace, data }),
        '1' => Ok(SocketPacket::Disconnect { namespace }),
        '2' => {
            let Some(Value::Array(mut items)) = data else {
                return Err(CodecError::Payload("event"));
            };
            if items.is_empty() {
                return Err(CodecError::Payload("event"));
            }
            let Value::String(name) = items.remove(0) else {
                return Err(CodecError::Payload("event"));
            };
            Ok(SocketPacket::Event { namespace, ack, name, args: items })
        }
        '3' => {
            let (Some(ack), Some(Value::Array(args))) = (ack, data) else {
                return Err(CodecError::Payload("ack"));
            };
            Ok(SocketPacket::Ack { namespace, ack, args })
        }
        _ => Ok(SocketPacket::ConnectError { namespace, data }),
    }
}

/// Collaboration events exchanged on a project room.
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectEvent {
    /// Subscribe to updates for a project id.
    JoinProject(String),
    /// Unsubscribe from a project id.
    LeaveProject(String),
    /// A room changed. The payload is opaque to the channel.
    RoomUpdate(Value),
}

impl ProjectEvent {
    /// Wire event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::JoinProject(_) => JOIN_PROJECT,
            Self::LeaveProject(_) => LEAVE_PROJECT,
            Self::RoomUpdate(_) => ROOM_UPDATE,
        }
    }

    /// Wrap the event as a default-namespace Socket.IO message.
    #[must_use]
    pub fn to_packet(&self) -> EnginePacket {
        let arg = match self {
            Self::JoinProject(id) | Self::LeaveProject(id) => Value::String(id.clone()),
            Self::RoomUpdate(data) => data.clone(),
        };
        EnginePacket::Message(SocketPacket::event(self.name(), vec![arg]))
    }

    /// Read a typed event out of a Socket.IO packet.
    ///
    /// Returns `Ok(None)` for packets that are not one of the three project
    /// events.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Payload`] when a known event carries the wrong
    /// argument shape.
    pub fn from_packet(packet: &SocketPacket) -> Result<Option<Self>, CodecError> {
        let SocketPacket::Event { name, args, .. } = packet else {
            return Ok(None);
        };

        let project_id = || match args.first() {
            Some(Value::String(id)) => Ok(id.clone()),
            _ => Err(CodecError::Payload("project id")),
        };

        match name.as_str() {
            JOIN_PROJECT => Ok(Some(Self::JoinProject(project_id()?))),
            LEAVE_PROJECT => Ok(Some(Self::LeaveProject(project_id()?))),
            ROOM_UPDATE => Ok(Some(Self::RoomUpdate(args.first().cloned().unwrap_or(Value::Null)))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
