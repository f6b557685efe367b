mod conn;
mod room;
mod wire;

pub use conn::ConnId;
pub use room::RoomId;
pub use wire::{ClientMessage, ServerMessage};
