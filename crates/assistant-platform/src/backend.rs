//! HTTP client wrapper over the Q&A backend.
//!
//! Every call goes through one `request` path: base URL prefix, JSON
//! content type, and the static `X-API-Key` header. Uses browser `fetch()`
//! via gloo-net. Single attempt per call — no retries, timeout, or
//! cancellation; failures propagate to the caller.

use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use assistant_core::ports::{AskReply, BackendPort, HealthStatus, ServiceInfo};
use assistant_types::{config::ApiConfig, message::AnswerSource, ApiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// Backend adapter holding the immutable connection config.
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// `request(endpoint, method, body?) → parsed JSON`.
    ///
    /// The body is serialized only for POST/PUT. Non-2xx responses become
    /// `ApiError::Request` with the server's `error` field (or the status
    /// line); everything without a usable response is `ApiError::Transport`.
    async fn request(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        log::debug!("request: {} {}", method.as_str(), url);

        let builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
        }
        .header("Content-Type", "application/json")
        .header("X-API-Key", &self.config.api_key);

        let request = match (method, body) {
            (HttpMethod::Post | HttpMethod::Put, Some(body)) => builder
                .json(body)
                .map_err(|e| ApiError::transport(e.to_string()))?,
            _ => builder
                .build()
                .map_err(|e| ApiError::transport(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.json::<Value>().await.ok();
            return Err(ApiError::request(error_message(status, body)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn ask(&self, question: &str) -> Result<AskReply> {
        let body = json!({ "question": question });
        let value = self.request("/ask", HttpMethod::Post, Some(&body)).await?;
        parse_ask_reply(value)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let value = self.request("/health", HttpMethod::Get, None).await?;
        Ok(parse_health(&value))
    }

    async fn service_info(&self) -> Result<ServiceInfo> {
        let value = self.request("/info", HttpMethod::Get, None).await?;
        parse_service_info(value)
    }
}

// ─── Wire types ──────────────────────────────────────────────

#[derive(Deserialize)]
struct AskWire {
    answer: String,
    model: String,
    tokens_used: u32,
    #[serde(default)]
    source: String,
}

#[derive(Deserialize)]
struct InfoWire {
    service_name: String,
    version: String,
    #[serde(default)]
    provider: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    requires_api_key: bool,
}

// ─── Decoding helpers ────────────────────────────────────────

/// Message for a non-2xx response: the server's `error` field when the body
/// parses, else the status line.
pub fn error_message(status: u16, body: Option<Value>) -> String {
    body.as_ref()
        .and_then(|b| b.get("error"))
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

pub fn parse_ask_reply(value: Value) -> Result<AskReply> {
    let wire: AskWire =
        serde_json::from_value(value).map_err(|e| ApiError::transport(e.to_string()))?;
    Ok(AskReply {
        answer: wire.answer,
        model: wire.model,
        tokens_used: wire.tokens_used,
        source: AnswerSource::from_wire(&wire.source),
    })
}

/// Lenient on purpose: anything but `status == "healthy"` reads as not
/// healthy, and the probe caller only logs on that path.
pub fn parse_health(value: &Value) -> HealthStatus {
    HealthStatus {
        healthy: value["status"].as_str() == Some("healthy"),
        service: value["service"].as_str().map(String::from),
        provider: value["provider"].as_str().map(String::from),
    }
}

pub fn parse_service_info(value: Value) -> Result<ServiceInfo> {
    let wire: InfoWire =
        serde_json::from_value(value).map_err(|e| ApiError::transport(e.to_string()))?;
    Ok(ServiceInfo {
        service_name: wire.service_name,
        version: wire.version,
        provider: wire.provider,
        model: wire.model,
        status: wire.status,
        requires_api_key: wire.requires_api_key,
    })
}
