use async_trait::async_trait;
use tincan_core::{ConnId, RoomId, ServerMessage};

/// Delivery capabilities the coordinator needs from the messaging layer.
/// Implemented by the WebSocket adapter in production and by a capturing
/// mock in tests. All sends are fire-and-forget; delivery to a vanished
/// connection is dropped, not reported.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a message to one specific connection.
    async fn send_to(&self, conn_id: &ConnId, msg: ServerMessage);

    /// Send a message to every connection subscribed to `room_id`, except
    /// `except`.
    async fn broadcast_except(&self, room_id: &RoomId, except: &ConnId, msg: ServerMessage);

    /// Add a connection to a room's broadcast group.
    async fn subscribe(&self, conn_id: &ConnId, room_id: &RoomId);

    /// Drop a connection from a room's broadcast group.
    async fn unsubscribe(&self, conn_id: &ConnId, room_id: &RoomId);
}
