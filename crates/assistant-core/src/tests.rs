#[cfg(test)]
mod tests {
    use crate::event_bus::EventBus;
    use crate::ports::AskReply;
    use crate::session::{ChatSession, SessionPhase};
    use assistant_types::event::SessionEvent;
    use assistant_types::message::{AnswerSource, Sender};

    fn reply(answer: &str, model: &str, tokens: u32, source: AnswerSource) -> AskReply {
        AskReply {
            answer: answer.to_string(),
            model: model.to_string(),
            tokens_used: tokens,
            source,
        }
    }

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_new_is_empty() {
        let bus = EventBus::new();
        assert!(!bus.has_pending());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_emit_and_drain() {
        let bus = EventBus::new();
        bus.emit(SessionEvent::HealthChecked { healthy: true });
        bus.emit(SessionEvent::AskFailed {
            message: "HTTP 500".to_string(),
        });

        assert!(bus.has_pending());

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(!bus.has_pending());
    }

    #[test]
    fn test_event_bus_drain_empties() {
        let bus = EventBus::new();
        bus.emit(SessionEvent::HealthChecked { healthy: false });
        let _ = bus.drain();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_clone_shares_state() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        bus1.emit(SessionEvent::HealthChecked { healthy: true });
        assert!(bus2.has_pending());

        assert_eq!(bus2.drain().len(), 1);
        assert!(!bus1.has_pending());
    }

    // ─── ChatSession Tests ───────────────────────────────────

    #[test]
    fn test_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Ai);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.is_awaiting());
        assert!(session.is_fresh());
    }

    #[test]
    fn test_submit_appends_user_and_placeholder() {
        let mut session = ChatSession::new();
        let question = session.submit("什么是ERC20？").unwrap();
        assert_eq!(question, "什么是ERC20？");

        // greeting + user + placeholder
        assert_eq!(session.message_count(), 3);
        let msgs = session.messages();
        assert_eq!(msgs[1].sender, Sender::User);
        assert!(!msgs[1].placeholder);
        assert_eq!(msgs[2].sender, Sender::Ai);
        assert!(msgs[2].placeholder);
        assert!(session.is_awaiting());
        assert!(!session.is_fresh());
    }

    #[test]
    fn test_submit_trims_input() {
        let mut session = ChatSession::new();
        let question = session.submit("  hello  \n").unwrap();
        assert_eq!(question, "hello");
        assert_eq!(session.messages()[1].text, "hello");
    }

    #[test]
    fn test_submit_empty_is_noop() {
        let mut session = ChatSession::new();
        assert!(session.submit("").is_none());
        assert!(session.submit("   ").is_none());
        assert!(session.submit("\n\t").is_none());

        assert_eq!(session.message_count(), 1);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_submit_while_awaiting_is_noop() {
        let mut session = ChatSession::new();
        assert!(session.submit("first").is_some());
        assert!(session.submit("second").is_none());

        // Still exactly one placeholder
        let placeholders = session
            .messages()
            .iter()
            .filter(|m| m.placeholder)
            .count();
        assert_eq!(placeholders, 1);
        assert_eq!(session.message_count(), 3);
    }

    #[test]
    fn test_resolve_answer_replaces_placeholder() {
        let mut session = ChatSession::new();
        session.submit("什么是智能合约？");
        session.resolve_answer(reply("A", "M", 5, AnswerSource::Mock));

        // greeting + user + answer; placeholder gone
        assert_eq!(session.message_count(), 3);
        assert!(session.messages().iter().all(|m| !m.placeholder));

        let last = session.messages().last().unwrap();
        assert_eq!(last.text, "A");
        let meta = last.meta.as_ref().unwrap();
        assert_eq!(meta.model, "M");
        assert_eq!(meta.tokens_used, 5);
        assert_eq!(meta.source.label(), "本地知识库");

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.is_awaiting());
    }

    #[test]
    fn test_resolve_answer_updates_stats() {
        let mut session = ChatSession::new();
        session.submit("q");
        session.resolve_answer(reply("a", "qwen3-next-80b", 321, AnswerSource::Live));

        let stats = session.stats().unwrap();
        assert_eq!(stats.model, "qwen3-next-80b");
        assert_eq!(stats.tokens_used, 321);
        assert_eq!(stats.source, AnswerSource::Live);
    }

    #[test]
    fn test_resolve_error_appends_error_bubble() {
        let mut session = ChatSession::new();
        session.submit("q");
        session.resolve_error("network error: fetch failed");

        assert_eq!(session.message_count(), 3);
        assert!(session.messages().iter().all(|m| !m.placeholder));

        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Ai);
        assert!(last.text.contains("请求出错"));
        let meta = last.meta.as_ref().unwrap();
        assert_eq!(meta.model, "Error");
        assert_eq!(meta.tokens_used, 0);
        assert_eq!(meta.source, AnswerSource::Error);

        // Send control ends enabled on failure too
        assert!(!session.is_awaiting());
    }

    #[test]
    fn test_resolve_error_keeps_stats() {
        let mut session = ChatSession::new();
        session.submit("q");
        session.resolve_answer(reply("a", "M", 5, AnswerSource::Mock));
        session.submit("q2");
        session.resolve_error("HTTP 500");

        // Stats reflect the last success, not the failure
        assert_eq!(session.stats().unwrap().model, "M");
    }

    #[test]
    fn test_count_tracks_list_across_lifecycle() {
        let mut session = ChatSession::new();
        assert_eq!(session.message_count(), session.messages().len());

        session.submit("one");
        assert_eq!(session.message_count(), session.messages().len());

        session.resolve_answer(reply("a", "m", 1, AnswerSource::Live));
        assert_eq!(session.message_count(), session.messages().len());

        session.submit("two");
        assert_eq!(session.message_count(), session.messages().len());

        session.resolve_error("boom");
        assert_eq!(session.message_count(), session.messages().len());
    }

    #[test]
    fn test_placeholder_removed_exactly_once() {
        let mut session = ChatSession::new();
        session.submit("q");
        let count_awaiting = session.message_count();
        session.resolve_answer(reply("a", "m", 1, AnswerSource::Live));

        // -1 placeholder, +1 answer
        assert_eq!(session.message_count(), count_awaiting);

        // A stray second resolution must not remove anything else
        session.resolve_error("late failure");
        assert_eq!(session.message_count(), count_awaiting + 1);
    }

    #[test]
    fn test_apply_routes_events() {
        let mut session = ChatSession::new();
        session.submit("q");
        session.apply(SessionEvent::AnswerReceived {
            answer: "A".to_string(),
            model: "M".to_string(),
            tokens_used: 5,
            source: AnswerSource::Mock,
        });
        assert_eq!(session.messages().last().unwrap().text, "A");

        session.submit("q2");
        session.apply(SessionEvent::AskFailed {
            message: "HTTP 502".to_string(),
        });
        assert!(session.messages().last().unwrap().text.contains("HTTP 502"));
    }

    #[test]
    fn test_apply_ignores_probe_events() {
        let mut session = ChatSession::new();
        session.apply(SessionEvent::HealthChecked { healthy: true });
        session.apply(SessionEvent::InfoLoaded {
            service_name: "s".to_string(),
            version: "2.0".to_string(),
            model: "m".to_string(),
        });
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_second_question_after_resolution() {
        let mut session = ChatSession::new();
        session.submit("first");
        session.resolve_answer(reply("a1", "m", 1, AnswerSource::Live));
        let question = session.submit("second");
        assert_eq!(question.as_deref(), Some("second"));
        assert!(session.is_awaiting());
    }
}
