pub mod model;

pub use model::{ClientMessage, ConnId, RoomId, ServerMessage};
