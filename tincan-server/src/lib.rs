pub mod config;
pub mod registry;
pub mod signaling;
pub mod transport;

pub use config::*;
pub use registry::*;
pub use signaling::*;
pub use transport::*;
