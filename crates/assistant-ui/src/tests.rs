#[cfg(test)]
mod tests {
    use crate::markdown::{parse, Block, Span};
    use crate::state::UiState;

    fn plain(text: &str) -> Span {
        Span {
            text: text.to_string(),
            code: false,
        }
    }

    fn code(text: &str) -> Span {
        Span {
            text: text.to_string(),
            code: true,
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.input_text.is_empty());
        assert!(!state.backend_healthy);
        assert!(state.service_name.is_none());
        assert!(state.default_model.is_none());
        assert!(state.notice.is_none());
        assert!(state.service_label().is_none());
    }

    #[test]
    fn test_probe_healthy_sets_indicator() {
        let mut state = UiState::new();
        state.apply_probe(true);
        assert!(state.backend_healthy);
    }

    #[test]
    fn test_probe_unhealthy_leaves_indicator() {
        let mut state = UiState::new();
        state.apply_probe(false);
        assert!(!state.backend_healthy);

        // And never flips an already-green dot back
        state.apply_probe(true);
        state.apply_probe(false);
        assert!(state.backend_healthy);
    }

    #[test]
    fn test_service_info_fills_labels() {
        let mut state = UiState::new();
        state.apply_service_info(
            "智能合约问答助手".to_string(),
            "2.0".to_string(),
            "qwen3-next-80b".to_string(),
        );
        assert_eq!(
            state.service_label().as_deref(),
            Some("智能合约问答助手 v2.0")
        );
        assert_eq!(state.default_model.as_deref(), Some("qwen3-next-80b"));
    }

    #[test]
    fn test_service_info_empty_model_ignored() {
        let mut state = UiState::new();
        state.apply_service_info("s".to_string(), "1.0".to_string(), String::new());
        assert!(state.default_model.is_none());
    }

    // ─── Markdown Tests ──────────────────────────────────────

    #[test]
    fn test_markdown_plain_text() {
        let blocks = parse("智能合约是部署在区块链上的自执行代码。");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![plain(
                "智能合约是部署在区块链上的自执行代码。"
            )])]
        );
    }

    #[test]
    fn test_markdown_inline_code() {
        let blocks = parse("调用 `transfer` 函数");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                plain("调用 "),
                code("transfer"),
                plain(" 函数"),
            ])]
        );
    }

    #[test]
    fn test_markdown_unmatched_backtick_is_literal() {
        let blocks = parse("a `b c");
        assert_eq!(blocks, vec![Block::Paragraph(vec![plain("a `b c")])]);
    }

    #[test]
    fn test_markdown_fenced_block() {
        let blocks = parse("示例：\n```solidity\ncontract A {}\n```\n完。");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![plain("示例：")]),
                Block::Code {
                    lang: Some("solidity".to_string()),
                    text: "contract A {}".to_string(),
                },
                Block::Paragraph(vec![plain("完。")]),
            ]
        );
    }

    #[test]
    fn test_markdown_fence_without_lang() {
        let blocks = parse("```\nx = 1\ny = 2\n```");
        assert_eq!(
            blocks,
            vec![Block::Code {
                lang: None,
                text: "x = 1\ny = 2".to_string(),
            }]
        );
    }

    #[test]
    fn test_markdown_unterminated_fence_degrades() {
        let blocks = parse("前文\n```\nleftover");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![plain("前文")]),
                Block::Paragraph(vec![plain("leftover")]),
            ]
        );
    }

    #[test]
    fn test_markdown_backticks_inside_fence_stay_literal() {
        let blocks = parse("```\nlet s = `tmpl`;\n```");
        match &blocks[0] {
            Block::Code { text, .. } => assert_eq!(text, "let s = `tmpl`;"),
            other => panic!("expected code block, got {:?}", other),
        }
    }

    #[test]
    fn test_markdown_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  ").is_empty());
    }

    #[test]
    fn test_markdown_multiline_paragraph_kept_together() {
        let blocks = parse("第一行\n第二行");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![plain("第一行\n第二行")])]
        );
    }
}
