use std::time::Duration;

/// Timeout applied to every request, connect through body completion.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable client configuration, fixed for the client's lifetime.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
