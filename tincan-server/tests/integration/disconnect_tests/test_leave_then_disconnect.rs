use tincan_core::{ConnId, RoomId, ServerMessage};

use crate::integration::{create_test_coordinator, init_tracing};

/// An explicit leave followed by the socket teardown's disconnect sweep
/// must not notify the survivor twice.
#[tokio::test]
async fn test_disconnect_after_leave_is_a_noop() {
    init_tracing();

    let (coordinator, transport) = create_test_coordinator();
    let (a, b) = (ConnId::new(), ConnId::new());
    let room = RoomId::from("R1");

    coordinator.create_room(&a, &room).await.unwrap();
    coordinator.join_room(&b, &room).await.unwrap();

    coordinator.leave_room(&a, &room).await;
    coordinator.handle_disconnect(&a).await;

    assert_eq!(
        transport.sent_to(&b).await,
        vec![ServerMessage::PeerLeft { from: a }]
    );
}
