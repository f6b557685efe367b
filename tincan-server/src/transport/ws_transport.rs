use crate::transport::Transport;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::HashSet;
use tincan_core::{ConnId, RoomId, ServerMessage};
use tokio::sync::mpsc;
use tracing::{debug, error};

/// WebSocket-backed [`Transport`]: one outbound channel per connection plus
/// per-room broadcast groups.
#[derive(Default)]
pub struct WsTransport {
    peers: DashMap<ConnId, mpsc::UnboundedSender<Message>>,
    rooms: DashMap<RoomId, HashSet<ConnId>>,
}

impl WsTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the outbound channel of a freshly upgraded connection.
    pub fn register(&self, conn_id: ConnId, tx: mpsc::UnboundedSender<Message>) {
        self.peers.insert(conn_id, tx);
    }

    /// Forget a closed connection. Broadcast-group membership is cleaned up
    /// by the coordinator's disconnect sweep, not here.
    pub fn deregister(&self, conn_id: &ConnId) {
        self.peers.remove(conn_id);
    }

    fn send_frame(&self, conn_id: &ConnId, msg: &ServerMessage) {
        let Some(peer) = self.peers.get(conn_id) else {
            debug!("Dropping frame for vanished connection {}", conn_id);
            return;
        };
        match serde_json::to_string(msg) {
            Ok(json) => {
                if peer.send(Message::Text(json.into())).is_err() {
                    debug!("Outbound channel closed for {}", conn_id);
                }
            }
            Err(e) => error!("Failed to serialize outbound message: {}", e),
        }
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn send_to(&self, conn_id: &ConnId, msg: ServerMessage) {
        self.send_frame(conn_id, &msg);
    }

    async fn broadcast_except(&self, room_id: &RoomId, except: &ConnId, msg: ServerMessage) {
        // Collect targets first so no map guard is held across the sends.
        let targets: Vec<ConnId> = match self.rooms.get(room_id) {
            Some(members) => members.iter().filter(|c| *c != except).cloned().collect(),
            None => return,
        };
        for conn_id in targets {
            self.send_frame(&conn_id, &msg);
        }
    }

    async fn subscribe(&self, conn_id: &ConnId, room_id: &RoomId) {
        self.rooms
            .entry(room_id.clone())
            .or_default()
            .insert(conn_id.clone());
    }

    async fn unsubscribe(&self, conn_id: &ConnId, room_id: &RoomId) {
        if let Entry::Occupied(mut group) = self.rooms.entry(room_id.clone()) {
            group.get_mut().remove(conn_id);
            if group.get().is_empty() {
                group.remove();
            }
        }
    }
}
