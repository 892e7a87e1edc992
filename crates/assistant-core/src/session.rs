//! Chat session controller — the per-question state machine.
//!
//! Lifecycle of one question:
//! 1. Idle — input enabled.
//! 2. `submit` (guarded by non-empty trimmed input) appends the user bubble
//!    and one placeholder, then hands the question back for dispatch.
//! 3. Awaiting — a single outstanding `/ask` call.
//! 4. `apply` resolves the placeholder into a reply or error bubble and
//!    returns to Idle on every path.
//!
//! The controller owns the message list and an explicit message counter; the
//! display syncs from here, never the other way around.

use assistant_types::event::SessionEvent;
use assistant_types::message::{AnswerSource, Message, Sender};

use crate::ports::AskReply;

/// Where the controller is in the request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Awaiting,
}

/// Last successful reply's usage, shown in the status summary
#[derive(Debug, Clone, PartialEq)]
pub struct UsageStats {
    pub model: String,
    pub tokens_used: u32,
    pub source: AnswerSource,
}

pub struct ChatSession {
    messages: Vec<Message>,
    message_count: usize,
    placeholder_id: Option<String>,
    phase: SessionPhase,
    stats: Option<UsageStats>,
}

impl ChatSession {
    /// A fresh session, seeded with the greeting bubble.
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            message_count: 0,
            placeholder_id: None,
            phase: SessionPhase::Idle,
            stats: None,
        };
        session.push(Message::answer(
            "您好！我是智能合约问答助手，可以回答智能合约、ERC20、安全风险、Solidity 等相关问题。",
            "local_knowledge_base",
            0,
            AnswerSource::Mock,
        ));
        session
    }

    /// Try to start a question. Returns the trimmed question to dispatch, or
    /// `None` when the input is blank or a placeholder is already pending —
    /// the one-placeholder invariant holds even against a programmatic
    /// double-submit.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let question = input.trim();
        if question.is_empty() {
            return None;
        }
        if self.placeholder_id.is_some() {
            log::warn!("Submit ignored: a question is already in flight");
            return None;
        }

        self.push(Message::user(question));
        let thinking = Message::thinking();
        self.placeholder_id = Some(thinking.id.clone());
        self.push(thinking);
        self.phase = SessionPhase::Awaiting;
        Some(question.to_string())
    }

    /// Apply a resolution event from the bus.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::AnswerReceived {
                answer,
                model,
                tokens_used,
                source,
            } => self.resolve_answer(AskReply {
                answer,
                model,
                tokens_used,
                source,
            }),
            SessionEvent::AskFailed { message } => self.resolve_error(&message),
            // Health and info are UI concerns, not session state
            SessionEvent::HealthChecked { .. } | SessionEvent::InfoLoaded { .. } => {}
        }
    }

    /// Success path: placeholder out, answer bubble in, stats updated.
    pub fn resolve_answer(&mut self, reply: AskReply) {
        self.remove_placeholder();
        self.stats = Some(UsageStats {
            model: reply.model.clone(),
            tokens_used: reply.tokens_used,
            source: reply.source,
        });
        self.push(Message::answer(
            reply.answer,
            reply.model,
            reply.tokens_used,
            reply.source,
        ));
        self.phase = SessionPhase::Idle;
    }

    /// Failure path: placeholder out, error banner in. The send control is
    /// re-enabled regardless of outcome.
    pub fn resolve_error(&mut self, message: &str) {
        self.remove_placeholder();
        self.push(Message::error_reply(message));
        self.phase = SessionPhase::Idle;
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.message_count += 1;
    }

    fn remove_placeholder(&mut self) {
        if let Some(id) = self.placeholder_id.take() {
            let before = self.messages.len();
            self.messages.retain(|m| m.id != id);
            self.message_count -= before - self.messages.len();
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.message_count
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True while a question is outstanding; drives the disabled send button.
    pub fn is_awaiting(&self) -> bool {
        self.phase == SessionPhase::Awaiting
    }

    pub fn stats(&self) -> Option<&UsageStats> {
        self.stats.as_ref()
    }

    /// True until the user has said anything; drives the example chips row.
    pub fn is_fresh(&self) -> bool {
        !self.messages.iter().any(|m| m.sender == Sender::User)
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
