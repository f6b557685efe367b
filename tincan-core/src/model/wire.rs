use crate::model::conn::ConnId;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound frames, client to relay. SDP and candidate payloads are carried
/// as raw JSON and never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "d",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientMessage {
    CreateRoom { room_id: RoomId },
    JoinRoom { room_id: RoomId },
    Offer { room_id: RoomId, sdp: Value },
    Answer { room_id: RoomId, sdp: Value },
    IceCandidate { room_id: RoomId, candidate: Value },
    LeaveRoom { room_id: RoomId },
}

/// Outbound frames, relay to client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "d",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerMessage {
    /// First frame on every connection; tells the client the identifier
    /// peers will see in `from` fields.
    Welcome { conn_id: ConnId },

    /// Reply to `create-room` / `join-room`.
    Ack {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },

    /// Sent to the room creator when a second participant is admitted.
    PeerJoined { from: ConnId },

    /// Sent to remaining participants when the other side leaves.
    PeerLeft { from: ConnId },

    Offer { sdp: Value, from: ConnId },
    Answer { sdp: Value, from: ConnId },
    IceCandidate { candidate: Value, from: ConnId },
}
