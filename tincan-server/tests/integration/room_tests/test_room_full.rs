use tincan_core::{ConnId, RoomId};
use tincan_server::RegistryError;

use crate::integration::{create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_third_join_is_rejected() {
    init_tracing();

    let (coordinator, transport) = create_test_coordinator();
    let (a, b, c) = (ConnId::new(), ConnId::new(), ConnId::new());
    let room = RoomId::from("R1");

    coordinator.create_room(&a, &room).await.unwrap();
    coordinator.join_room(&b, &room).await.unwrap();

    let err = coordinator
        .join_room(&c, &room)
        .await
        .expect_err("third join must fail");
    assert_eq!(err, RegistryError::Full);
    assert_eq!(err.to_string(), "Room full");

    // No notification fired for the rejected join.
    assert_eq!(transport.sent_to(&a).await.len(), 1);
    assert!(!transport.is_subscribed(&c, &room));

    let snapshot = coordinator.registry().get(&room).unwrap();
    assert!(snapshot.is_full());
    assert_eq!(snapshot.participants().len(), 2);
}
