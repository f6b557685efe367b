use crate::registry::RegistryError;
use crate::signaling::SignalingCoordinator;
use crate::transport::{Transport, WsTransport};
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tincan_core::{ClientMessage, ConnId, ServerMessage};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Shared state behind the WebSocket route.
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<SignalingCoordinator>,
    pub transport: Arc<WsTransport>,
}

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = ConnId::new();
    info!("New WebSocket connection: {}", conn_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.transport.register(conn_id.clone(), tx);
    state
        .transport
        .send_to(
            &conn_id,
            ServerMessage::Welcome {
                conn_id: conn_id.clone(),
            },
        )
        .await;

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let coordinator = state.coordinator.clone();
        let transport = state.transport.clone();
        let conn_id = conn_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(event) => {
                            dispatch(&coordinator, transport.as_ref(), &conn_id, event).await;
                        }
                        Err(e) => warn!("Ignoring malformed frame from {}: {}", conn_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Both the clean close and the abrupt drop land here; the sweep is
    // idempotent, so an already-left connection is a no-op.
    state.coordinator.handle_disconnect(&conn_id).await;
    state.transport.deregister(&conn_id);
    info!("WebSocket disconnected: {}", conn_id);
}

async fn dispatch(
    coordinator: &SignalingCoordinator,
    transport: &WsTransport,
    conn_id: &ConnId,
    event: ClientMessage,
) {
    match event {
        ClientMessage::CreateRoom { room_id } => {
            let ack = ack_of(coordinator.create_room(conn_id, &room_id).await);
            transport.send_to(conn_id, ack).await;
        }
        ClientMessage::JoinRoom { room_id } => {
            let ack = ack_of(coordinator.join_room(conn_id, &room_id).await);
            transport.send_to(conn_id, ack).await;
        }
        ClientMessage::Offer { room_id, sdp } => {
            coordinator.forward_offer(conn_id, &room_id, sdp).await;
        }
        ClientMessage::Answer { room_id, sdp } => {
            coordinator.forward_answer(conn_id, &room_id, sdp).await;
        }
        ClientMessage::IceCandidate { room_id, candidate } => {
            coordinator
                .forward_ice_candidate(conn_id, &room_id, candidate)
                .await;
        }
        ClientMessage::LeaveRoom { room_id } => {
            coordinator.leave_room(conn_id, &room_id).await;
        }
    }
}

/// The ack frame for a create/join result. Whether the client listens for
/// it is the client's business; delivery is fire-and-forget.
fn ack_of(result: Result<(), RegistryError>) -> ServerMessage {
    match result {
        Ok(()) => ServerMessage::Ack {
            success: true,
            error: None,
        },
        Err(e) => ServerMessage::Ack {
            success: false,
            error: Some(e.to_string()),
        },
    }
}
