mod error;
mod registry;
mod room;

pub use error::*;
pub use registry::*;
pub use room::*;
