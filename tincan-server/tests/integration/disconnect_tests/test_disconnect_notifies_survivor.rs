use tincan_core::{ConnId, RoomId, ServerMessage};

use crate::integration::{create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_disconnect_notifies_survivor_and_hands_over_ownership() {
    init_tracing();

    let (coordinator, transport) = create_test_coordinator();
    let (a, b) = (ConnId::new(), ConnId::new());
    let room = RoomId::from("R1");

    coordinator.create_room(&a, &room).await.unwrap();
    coordinator.join_room(&b, &room).await.unwrap();

    coordinator.handle_disconnect(&a).await;

    assert_eq!(
        transport.sent_to(&b).await,
        vec![ServerMessage::PeerLeft { from: a.clone() }]
    );
    assert!(!transport.is_subscribed(&a, &room));

    let snapshot = coordinator.registry().get(&room).expect("room survives");
    assert_eq!(snapshot.creator(), &b);
    assert_eq!(snapshot.participants().to_vec(), vec![b]);
}
