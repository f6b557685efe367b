use tincan_core::{ConnId, RoomId};
use tincan_server::RegistryError;

use crate::integration::{create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_leaving_sole_participant_deletes_room() {
    init_tracing();

    let (coordinator, transport) = create_test_coordinator();
    let a = ConnId::new();
    let room = RoomId::from("R1");

    coordinator.create_room(&a, &room).await.unwrap();
    coordinator.leave_room(&a, &room).await;

    assert!(coordinator.registry().get(&room).is_none());
    assert!(!transport.is_subscribed(&a, &room));
    // Nobody was left to notify.
    assert!(transport.all_sent().await.is_empty());

    // The id is reusable only via create; a join now fails.
    let err = coordinator
        .join_room(&ConnId::new(), &room)
        .await
        .expect_err("join after deletion must fail");
    assert_eq!(err, RegistryError::NotFound);
    assert_eq!(err.to_string(), "Room does not exist");
}

#[tokio::test]
async fn test_leave_of_unknown_room_is_silent() {
    init_tracing();

    let (coordinator, transport) = create_test_coordinator();
    let a = ConnId::new();

    coordinator.leave_room(&a, &RoomId::from("ghost")).await;

    assert!(transport.all_sent().await.is_empty());
    assert!(coordinator.registry().is_empty());
}
