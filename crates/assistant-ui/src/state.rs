//! UI-level state that drives rendering.
//!
//! Conversation truth lives in `assistant_core::session::ChatSession`; this
//! struct holds what only the view cares about — the input buffer, the
//! status indicator, and service metadata from the startup probes.

/// State visible to UI panels
pub struct UiState {
    /// Input field content (cleared on submit)
    pub input_text: String,
    /// Flipped to true by a healthy probe; never flipped back
    pub backend_healthy: bool,
    /// Service name from `/info`
    pub service_name: Option<String>,
    /// Service version from `/info`
    pub service_version: Option<String>,
    /// Model label from `/info`, shown until the first reply
    pub default_model: Option<String>,
    /// Transient notice line (home page docs button)
    pub notice: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            backend_healthy: false,
            service_name: None,
            service_version: None,
            default_model: None,
            notice: None,
        }
    }

    /// Health probe outcome. Only a healthy report changes the indicator;
    /// anything else leaves it as it was.
    pub fn apply_probe(&mut self, healthy: bool) {
        if healthy {
            self.backend_healthy = true;
        }
    }

    pub fn apply_service_info(&mut self, name: String, version: String, model: String) {
        self.service_name = Some(name);
        self.service_version = Some(version);
        if !model.is_empty() {
            self.default_model = Some(model);
        }
    }

    /// "name v2.0" for the top bar, once `/info` has resolved
    pub fn service_label(&self) -> Option<String> {
        let name = self.service_name.as_ref()?;
        match &self.service_version {
            Some(version) => Some(format!("{} v{}", name, version)),
            None => Some(name.clone()),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
