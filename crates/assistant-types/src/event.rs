use serde::{Deserialize, Serialize};

use crate::message::AnswerSource;

/// Events crossing from fire-and-forget network tasks back to the UI thread.
/// The frame loop drains these from the bus once per frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// `/ask` resolved with an answer
    AnswerReceived {
        answer: String,
        model: String,
        tokens_used: u32,
        source: AnswerSource,
    },

    /// `/ask` failed; message is ready for the error bubble
    AskFailed { message: String },

    /// The startup `/health` probe got a response
    HealthChecked { healthy: bool },

    /// The startup `/info` call resolved
    InfoLoaded {
        service_name: String,
        version: String,
        model: String,
    },
}
