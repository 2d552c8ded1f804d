//! Relay Configuration
//!
//! Built once at startup from CLI flags / environment variables and passed
//! into the router state. Handlers never read configuration globally.

/// Relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address the relay binds to.
    pub host: String,
    /// Port the relay listens on.
    pub port: u16,
    /// Exact origin allowed by CORS. Unset means any origin, no credentials.
    pub frontend_origin: Option<String>,
    /// Base URL of the completion API, without the `/chat/completions` route.
    pub api_base: String,
    /// Bearer credential for the completion API. Not validated at startup;
    /// an empty key surfaces as an upstream auth error at request time.
    pub api_key: String,
    /// Model identifier sent with every completion request.
    pub model: String,
}
