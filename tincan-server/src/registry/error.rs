use thiserror::Error;

/// Room lifecycle failures reported back to the requesting client. The
/// `Display` strings are the exact `error` values carried in ack frames.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Room already exists")]
    AlreadyExists,

    #[error("Room does not exist")]
    NotFound,

    #[error("Room full")]
    Full,
}
