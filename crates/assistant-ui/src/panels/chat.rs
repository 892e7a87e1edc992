//! Chat panel — conversation bubbles, example chips, and the input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use assistant_core::session::ChatSession;
use assistant_types::message::{AnswerSource, Message, Sender};

use crate::markdown::{self, Block};
use crate::state::UiState;
use crate::theme::*;

/// Questions offered while the conversation is fresh; clicking one fills
/// the input. Mirrors the backend's knowledge-base topics.
pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "什么是智能合约？",
    "ERC20是什么标准？",
    "智能合约有哪些安全风险？",
    "Solidity是什么语言？",
];

/// Render the chat panel. Returns Some(raw input) when the user submits.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    session: &ChatSession,
) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Contract Assistant")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{} 条消息", session.message_count()))
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 96.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in session.messages() {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(4.0);

                // Example chips until the user has asked something
                if session.is_fresh() {
                    ui.horizontal_wrapped(|ui| {
                        for chip in EXAMPLE_QUESTIONS {
                            if ui
                                .small_button(RichText::new(chip).color(TEXT_SECONDARY))
                                .clicked()
                            {
                                state.input_text = chip.to_string();
                            }
                        }
                    });
                    ui.add_space(4.0);
                }

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::multiline(&mut state.input_text)
                        .hint_text("输入您的问题，Shift+Enter 换行...")
                        .desired_rows(2)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled =
                        !state.input_text.trim().is_empty() && !session.is_awaiting();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("发送").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter-without-Shift or button click
                    let enter_pressed = response.has_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);

                    if (enter_pressed && send_enabled) || send_btn.clicked() {
                        submitted = Some(state.input_text.clone());
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    if message.placeholder {
        egui::Frame::default()
            .fill(BUBBLE_AI)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(
                        RichText::new(&message.text)
                            .color(TEXT_SECONDARY)
                            .italics(),
                    );
                });
            });
        return;
    }

    let is_error = message
        .meta
        .as_ref()
        .is_some_and(|m| m.source == AnswerSource::Error);
    let (label, label_color, bg) = match (message.sender, is_error) {
        (Sender::User, _) => ("You", ACCENT, BUBBLE_USER),
        (Sender::Ai, false) => ("Contract Assistant", SUCCESS, BUBBLE_AI),
        (Sender::Ai, true) => ("Contract Assistant", ERROR, BUBBLE_ERROR),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(message.clock())
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });
            });

            render_body(ui, &message.text);

            if let Some(meta) = &message.meta {
                ui.label(
                    RichText::new(format!(
                        "模型: {} | Token: {} | 来源: {}",
                        meta.model,
                        meta.tokens_used,
                        meta.source.label()
                    ))
                    .color(TEXT_SECONDARY)
                    .small(),
                );
            }
        });
}

/// Markdown-lite body: paragraphs with inline code spans, plus fenced
/// blocks as monospace frames.
fn render_body(ui: &mut egui::Ui, text: &str) {
    for block in markdown::parse(text) {
        match block {
            Block::Paragraph(spans) => {
                let mut job = egui::text::LayoutJob::default();
                for span in spans {
                    let format = if span.code {
                        egui::TextFormat {
                            font_id: egui::FontId::monospace(13.0),
                            color: CODE_FG,
                            background: CODE_BG,
                            ..Default::default()
                        }
                    } else {
                        egui::TextFormat {
                            font_id: egui::FontId::proportional(14.0),
                            color: TEXT_PRIMARY,
                            ..Default::default()
                        }
                    };
                    job.append(&span.text, 0.0, format);
                }
                ui.label(job);
            }
            Block::Code { text, .. } => {
                egui::Frame::default()
                    .fill(CODE_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(text)
                                .color(CODE_FG)
                                .monospace(),
                        );
                    });
            }
        }
    }
}
