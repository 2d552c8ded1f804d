//! Minimal HTTP relay for an LLM chat-completions API.
//!
//! Accepts a prompt over a local REST endpoint, forwards it to the configured
//! completion API, and relays the result (or error) back to the caller.
//! Stateless: nothing is persisted, nothing is retried, each request is a
//! single upstream attempt.

/// Relay configuration
pub mod config;

/// Upstream completion API client
pub mod llm_client;

/// HTTP server and request handlers
pub mod server;
