//! Typed client for the Pulumi Cloud REST API
//!
//! [`PulumiClient`] exposes one façade per resource family
//! ([`Organizations`](client::Organizations), [`Projects`](client::Projects),
//! [`Stacks`](client::Stacks), [`Policies`](client::Policies)) on top of a
//! single request core that retries rate-limited and server-side failures
//! with jittered exponential backoff.

pub mod client;
pub mod config;
pub mod error;

pub use client::PulumiClient;
pub use config::ClientConfig;
pub use error::{ApiError, Error, Result};
