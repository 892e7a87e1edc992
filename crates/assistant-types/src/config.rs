use serde::{Deserialize, Serialize};

/// Backend connection settings.
///
/// Built once at startup and moved into the HTTP wrapper; never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            api_key: "your_app_secret_key_here".to_string(),
        }
    }
}

/// Which page the client was loaded into, decided once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Landing page with the hero section
    Home,
    /// Chat page with the message container
    Assistant,
    /// Neither marker element found
    Unknown,
}

impl PageKind {
    /// Canvas element id the page is expected to carry
    pub fn canvas_id(&self) -> Option<&'static str> {
        match self {
            PageKind::Home => Some("home_canvas"),
            PageKind::Assistant => Some("assistant_canvas"),
            PageKind::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Assistant => "assistant",
            PageKind::Unknown => "unknown",
        }
    }
}
