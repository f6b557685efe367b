use crate::registry::{RegistryError, RemovalOutcome, RoomRegistry};
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;
use tincan_core::{ConnId, RoomId, ServerMessage};
use tracing::info;

/// The protocol state machine. One method per inbound event; every room
/// mutation goes through the registry, every outbound frame through the
/// transport. `create_room` and `join_room` return a result the transport
/// layer may deliver as an ack; the remaining events never fail.
pub struct SignalingCoordinator {
    registry: RoomRegistry,
    transport: Arc<dyn Transport>,
}

impl SignalingCoordinator {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            registry: RoomRegistry::new(),
            transport,
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    pub async fn create_room(
        &self,
        conn_id: &ConnId,
        room_id: &RoomId,
    ) -> Result<(), RegistryError> {
        self.registry.create(room_id, conn_id)?;
        self.transport.subscribe(conn_id, room_id).await;
        info!("Room {} created by {}", room_id, conn_id);
        Ok(())
    }

    pub async fn join_room(&self, conn_id: &ConnId, room_id: &RoomId) -> Result<(), RegistryError> {
        let creator = self.registry.join(room_id, conn_id)?;
        self.transport.subscribe(conn_id, room_id).await;
        self.transport
            .send_to(
                &creator,
                ServerMessage::PeerJoined {
                    from: conn_id.clone(),
                },
            )
            .await;
        info!("{} joined room {}", conn_id, room_id);
        Ok(())
    }

    pub async fn forward_offer(&self, conn_id: &ConnId, room_id: &RoomId, sdp: Value) {
        self.relay(
            conn_id,
            room_id,
            ServerMessage::Offer {
                sdp,
                from: conn_id.clone(),
            },
        )
        .await;
    }

    pub async fn forward_answer(&self, conn_id: &ConnId, room_id: &RoomId, sdp: Value) {
        self.relay(
            conn_id,
            room_id,
            ServerMessage::Answer {
                sdp,
                from: conn_id.clone(),
            },
        )
        .await;
    }

    pub async fn forward_ice_candidate(&self, conn_id: &ConnId, room_id: &RoomId, candidate: Value) {
        self.relay(
            conn_id,
            room_id,
            ServerMessage::IceCandidate {
                candidate,
                from: conn_id.clone(),
            },
        )
        .await;
    }

    /// Forward an opaque negotiation payload to the other side of the room.
    /// A payload for an unknown room has no delivery target and is dropped.
    async fn relay(&self, conn_id: &ConnId, room_id: &RoomId, msg: ServerMessage) {
        self.transport.broadcast_except(room_id, conn_id, msg).await;
    }

    /// Explicit departure. Silently a no-op when the room or membership is
    /// absent, so it doubles as the per-room step of the disconnect sweep.
    pub async fn leave_room(&self, conn_id: &ConnId, room_id: &RoomId) {
        let outcome = self.registry.remove(room_id, conn_id);
        self.transport.unsubscribe(conn_id, room_id).await;

        match outcome {
            RemovalOutcome::NotMember => {}
            RemovalOutcome::Deleted => {
                info!("Room {} deleted (empty)", room_id);
            }
            RemovalOutcome::Remaining { .. } => {
                self.transport
                    .broadcast_except(
                        room_id,
                        conn_id,
                        ServerMessage::PeerLeft {
                            from: conn_id.clone(),
                        },
                    )
                    .await;
            }
        }
    }

    /// Cleanup for an abruptly closed connection. Sweeps every room the
    /// connection still belongs to. Idempotent: a second invocation finds
    /// no memberships and does nothing.
    pub async fn handle_disconnect(&self, conn_id: &ConnId) {
        for room_id in self.registry.rooms_containing(conn_id) {
            self.leave_room(conn_id, &room_id).await;
        }
    }
}
