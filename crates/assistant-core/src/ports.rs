//! The backend port — the boundary between the session layer and HTTP.
//!
//! The trait is defined here in `assistant-core` (pure Rust). The gloo-net
//! implementation lives in `assistant-platform`. Session and UI code only
//! ever see these types.

use assistant_types::{message::AnswerSource, Result};
use async_trait::async_trait;

/// Decoded reply from `POST /ask`
#[derive(Debug, Clone)]
pub struct AskReply {
    pub answer: String,
    pub model: String,
    pub tokens_used: u32,
    pub source: AnswerSource,
}

/// Decoded reply from `GET /health`
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// True iff the wire status was exactly "healthy"
    pub healthy: bool,
    pub service: Option<String>,
    pub provider: Option<String>,
}

/// Decoded reply from `GET /info`
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub service_name: String,
    pub version: String,
    pub provider: String,
    pub model: String,
    pub status: String,
    pub requires_api_key: bool,
}

#[async_trait(?Send)]
pub trait BackendPort {
    /// Submit a question. Single attempt, no retry or timeout.
    async fn ask(&self, question: &str) -> Result<AskReply>;

    /// One-shot reachability probe.
    async fn health(&self) -> Result<HealthStatus>;

    /// Service metadata for the status display.
    async fn service_info(&self) -> Result<ServiceInfo>;
}
