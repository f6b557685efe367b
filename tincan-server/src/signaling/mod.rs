mod coordinator;
mod ws_handler;

pub use coordinator::*;
pub use ws_handler::*;
