use tincan_core::{ConnId, RoomId};
use tincan_server::RegistryError;

use crate::integration::{create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_duplicate_create_is_rejected() {
    init_tracing();

    let (coordinator, transport) = create_test_coordinator();
    let (a, b) = (ConnId::new(), ConnId::new());
    let room = RoomId::from("R1");

    coordinator
        .create_room(&a, &room)
        .await
        .expect("first create should succeed");

    let err = coordinator
        .create_room(&b, &room)
        .await
        .expect_err("second create must fail");
    assert_eq!(err, RegistryError::AlreadyExists);
    assert_eq!(err.to_string(), "Room already exists");

    // The loser is not subscribed and the room is untouched.
    assert!(!transport.is_subscribed(&b, &room));
    assert_eq!(coordinator.registry().get(&room).unwrap().creator(), &a);
}
