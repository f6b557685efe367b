/// Default listening port, matching the conventional deployment.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the relay listens on (`PORT`).
    pub port: u16,
    /// Exact origin admitted by the CORS layer (`ALLOWED_ORIGIN`). Any
    /// origin is admitted when unset.
    pub allowed_origin: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let allowed_origin = std::env::var("ALLOWED_ORIGIN").ok();

        Self {
            port,
            allowed_origin,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origin: None,
        }
    }
}
