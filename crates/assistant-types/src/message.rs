use serde::{Deserialize, Serialize};

/// Who authored a chat bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// Where an answer came from, decoded from the wire `source` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Cached/local knowledge base ("mock" on the wire)
    Mock,
    /// Live generation backend (any other wire value)
    Live,
    /// Synthesized locally for a failed request
    Error,
}

impl AnswerSource {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "mock" => AnswerSource::Mock,
            _ => AnswerSource::Live,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnswerSource::Mock => "本地知识库",
            AnswerSource::Live => "AI 服务",
            AnswerSource::Error => "错误",
        }
    }
}

/// Metadata attached to AI replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageMeta {
    pub model: String,
    pub tokens_used: u32,
    pub source: AnswerSource,
}

/// A single entry in the visible conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// RFC3339, set at creation
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MessageMeta>,
    /// True for the transient "thinking" bubble
    #[serde(default)]
    pub placeholder: bool,
}

impl Message {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            meta: None,
            placeholder: false,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// An AI reply carrying answer metadata
    pub fn answer(text: impl Into<String>, model: impl Into<String>, tokens_used: u32, source: AnswerSource) -> Self {
        let mut msg = Self::new(Sender::Ai, text);
        msg.meta = Some(MessageMeta {
            model: model.into(),
            tokens_used,
            source,
        });
        msg
    }

    /// The error banner bubble shown when a request fails
    pub fn error_reply(message: impl Into<String>) -> Self {
        Self::answer(
            format!("请求出错: {}", message.into()),
            "Error",
            0,
            AnswerSource::Error,
        )
    }

    /// The transient "thinking" placeholder
    pub fn thinking() -> Self {
        let mut msg = Self::new(Sender::Ai, "正在思考，请稍候...");
        msg.placeholder = true;
        msg
    }

    /// HH:MM clock shown in the bubble header
    pub fn clock(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}
