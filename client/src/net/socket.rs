//! Realtime project channel.
//!
//! The playground opens one Socket.IO connection per open project, joins the
//! project room, and applies `room-update` notifications from other sessions
//! to its plan. The connection is re-established with exponential backoff
//! until the page closes the handle.
//!
//! Frame classification is plain Rust and tested natively; the WebSocket loop
//! itself is gated behind `#[cfg(feature = "hydrate")]`.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use canvas::plan::Room;
use packets::{CodecError, EnginePacket, ProjectEvent, SocketPacket, decode, encode};
use serde_json::{Value, json};

/// First reconnect delay.
pub const INITIAL_BACKOFF_MS: u32 = 1000;
/// Reconnect delay ceiling.
pub const MAX_BACKOFF_MS: u32 = 10_000;

/// Delay before the reconnect attempt after one that waited `current_ms`.
#[must_use]
pub fn next_backoff(current_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// How the connection loop should react to one incoming text frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Inbound {
    /// Send this text back (handshake follow-up or heartbeat).
    Reply(String),
    /// The default namespace accepted the connection.
    Connected,
    Event(ProjectEvent),
    /// The server closed the session or refused the namespace.
    Closed,
    Ignore,
}

/// Classify one incoming Engine.IO text frame.
///
/// # Errors
///
/// Returns [`CodecError`] for frames that do not decode.
pub fn classify(text: &str) -> Result<Inbound, CodecError> {
    let inbound = match decode(text)? {
        EnginePacket::Open(_) => Inbound::Reply(encode(&EnginePacket::Message(SocketPacket::connect()))),
        packet @ EnginePacket::Ping(_) => match packet.reply() {
            Some(reply) => Inbound::Reply(encode(&reply)),
            None => Inbound::Ignore,
        },
        EnginePacket::Close
        | EnginePacket::Message(SocketPacket::Disconnect { .. } | SocketPacket::ConnectError { .. }) => Inbound::Closed,
        EnginePacket::Message(SocketPacket::Connect { .. }) => Inbound::Connected,
        EnginePacket::Message(packet) => match ProjectEvent::from_packet(&packet)? {
            Some(event) => Inbound::Event(event),
            None => Inbound::Ignore,
        },
        EnginePacket::Pong(_) | EnginePacket::Upgrade | EnginePacket::Noop => Inbound::Ignore,
    };
    Ok(inbound)
}

/// Payload of an outgoing `room-update`.
#[must_use]
pub fn room_update_payload(project_id: &str, room: &Room) -> Value {
    json!({ "projectId": project_id, "room": room })
}

/// Orders outgoing project events for one connection.
///
/// Events queued before the namespace accepts the connection are held and
/// released, in order, right after `join-project`. The server drops events
/// from sockets that have not joined.
#[derive(Debug, Default)]
pub struct SendGate {
    joined: bool,
    held: Vec<String>,
}

impl SendGate {
    /// Frame to send now, or `None` if it is held.
    pub fn event(&mut self, text: String) -> Option<String> {
        if self.joined {
            return Some(text);
        }
        self.held.push(text);
        None
    }

    /// The project was joined. Returns the held frames.
    pub fn open(&mut self) -> Vec<String> {
        self.joined = true;
        std::mem::take(&mut self.held)
    }

    /// Connection lost. Held frames wait for the next join.
    pub fn reset(&mut self) {
        self.joined = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.joined
    }
}

/// Handle to a running project socket. Cloning shares the connection.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct ProjectSocket {
    project_id: String,
    tx: futures::channel::mpsc::UnboundedSender<String>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

#[cfg(feature = "hydrate")]
impl ProjectSocket {
    /// Queue an event. Returns `false` once the socket has been closed.
    pub fn emit(&self, event: &ProjectEvent) -> bool {
        self.tx.unbounded_send(encode(&event.to_packet())).is_ok()
    }

    /// Broadcast a changed room to the project room.
    pub fn emit_room_update(&self, room: &Room) -> bool {
        self.emit(&ProjectEvent::RoomUpdate(room_update_payload(&self.project_id, room)))
    }

    /// Leave the project room and stop reconnecting.
    pub fn close(&self) {
        use std::sync::atomic::Ordering;

        if !self.alive.swap(false, Ordering::Relaxed) {
            return;
        }
        self.emit(&ProjectEvent::LeaveProject(self.project_id.clone()));
        self.tx.close_channel();
    }
}

/// Spawn the socket lifecycle for `project_id` as a local async task.
#[cfg(feature = "hydrate")]
pub fn spawn_project_socket(
    project_id: String,
    playground: leptos::prelude::RwSignal<crate::state::playground::PlaygroundState>,
) -> ProjectSocket {
    use futures::channel::mpsc;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    let (tx, rx) = mpsc::unbounded::<String>();
    let alive = Arc::new(AtomicBool::new(true));
    let handle = ProjectSocket { project_id: project_id.clone(), tx, alive: alive.clone() };

    leptos::task::spawn_local(socket_loop(project_id, playground, rx, alive));

    handle
}

#[cfg(feature = "hydrate")]
fn resolve_url() -> String {
    let origin = match crate::config::SOCKET_ORIGIN {
        Some(origin) => origin.to_owned(),
        None => web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".to_owned()),
    };
    crate::config::socket_url(&origin)
}

/// Frames fed to the writer half of one connection.
#[cfg(feature = "hydrate")]
enum Outbound {
    /// Handshake reply or `join-project`; never held.
    Control(String),
    /// The project was joined; release held events.
    Joined,
    Event(String),
    /// The handle was closed.
    Done,
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn socket_loop(
    project_id: String,
    playground: leptos::prelude::RwSignal<crate::state::playground::PlaygroundState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    use leptos::prelude::Update;
    use std::sync::atomic::Ordering;

    let mut gate = SendGate::default();
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    while alive.load(Ordering::Relaxed) {
        let url = resolve_url();
        gate.reset();
        match connect_and_run(&url, &project_id, playground, &mut rx, &mut gate).await {
            Ok(true) => {
                log::info!("project socket closed: project={project_id}");
                backoff_ms = INITIAL_BACKOFF_MS;
            }
            Ok(false) => log::info!("project socket closed before joining: project={project_id}"),
            Err(e) => leptos::logging::warn!("project socket error: {e}"),
        }

        playground.update(|p| p.live = false);
        if !alive.load(Ordering::Relaxed) {
            break;
        }

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Connect and process frames until either side closes.
///
/// Returns whether the namespace connection was established.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    project_id: &str,
    playground: leptos::prelude::RwSignal<crate::state::playground::PlaygroundState>,
    rx: &mut futures::channel::mpsc::UnboundedReceiver<String>,
    gate: &mut SendGate,
) -> Result<bool, String> {
    use futures::channel::mpsc;
    use futures::{SinkExt, StreamExt, stream};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();
    let (ctl_tx, ctl_rx) = mpsc::unbounded::<Outbound>();

    let send_task = async {
        let events = rx.by_ref().map(Outbound::Event).chain(stream::iter([Outbound::Done]));
        let mut outbound = stream::select(ctl_rx, events);
        while let Some(item) = outbound.next().await {
            let frames = match item {
                Outbound::Control(text) => vec![text],
                Outbound::Joined => gate.open(),
                Outbound::Event(text) => gate.event(text).into_iter().collect(),
                Outbound::Done => break,
            };
            for text in frames {
                if ws_write.send(Message::Text(text)).await.is_err() {
                    return;
                }
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            let text = match msg {
                Ok(Message::Text(text)) => text,
                Ok(Message::Bytes(_)) => continue,
                Err(e) => {
                    leptos::logging::warn!("project socket recv error: {e}");
                    break;
                }
            };
            match classify(&text) {
                Ok(Inbound::Reply(reply)) => {
                    if ctl_tx.unbounded_send(Outbound::Control(reply)).is_err() {
                        break;
                    }
                }
                Ok(Inbound::Connected) => {
                    playground.update(|p| p.live = true);
                    let join = ProjectEvent::JoinProject(project_id.to_owned());
                    let queued = ctl_tx.unbounded_send(Outbound::Control(encode(&join.to_packet())));
                    if queued.and_then(|()| ctl_tx.unbounded_send(Outbound::Joined)).is_err() {
                        break;
                    }
                }
                Ok(Inbound::Event(ProjectEvent::RoomUpdate(payload))) => {
                    playground.update(|p| {
                        p.apply_remote_update(&payload);
                    });
                }
                Ok(Inbound::Event(_) | Inbound::Ignore) => {}
                Ok(Inbound::Closed) => break,
                Err(e) => log::debug!("dropping undecodable frame: {e}"),
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(gate.is_open())
}
