pub mod disconnect_tests;
pub mod room_tests;

use std::sync::Arc;
use tracing::Level;

use tincan_server::SignalingCoordinator;

use crate::utils::MockTransport;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_coordinator() -> (Arc<SignalingCoordinator>, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let coordinator = Arc::new(SignalingCoordinator::new(transport.clone()));
    (coordinator, transport)
}
