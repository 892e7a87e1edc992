//! Home panel — hero section and feature cards for the landing page.

use egui::{self, RichText, Vec2};

use crate::state::UiState;
use crate::theme::*;

const FEATURES: [(&str, &str); 3] = [
    ("智能问答", "基于大模型与本地知识库，解答智能合约相关问题"),
    ("代码示例", "回答附带 Solidity 代码片段，支持代码块展示"),
    ("安全建议", "覆盖重入攻击、整数溢出等常见风险的防范措施"),
];

/// Render the landing page.
pub fn home_panel(ui: &mut egui::Ui, state: &mut UiState) {
    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(
                    RichText::new("智能合约问答助手")
                        .color(TEXT_PRIMARY)
                        .strong()
                        .size(28.0),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new("向 AI 提问，获取准确、易懂的智能合约解答")
                        .color(TEXT_SECONDARY)
                        .size(15.0),
                );
                ui.add_space(24.0);

                ui.horizontal_wrapped(|ui| {
                    for (title, detail) in FEATURES {
                        feature_card(ui, title, detail);
                    }
                });

                ui.add_space(24.0);

                if ui
                    .add(
                        egui::Button::new(RichText::new("查看文档").color(TEXT_PRIMARY))
                            .fill(ACCENT)
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(120.0, 32.0)),
                    )
                    .clicked()
                {
                    state.notice = Some("文档功能开发中，敬请期待！".to_string());
                }

                if let Some(notice) = &state.notice {
                    ui.add_space(8.0);
                    ui.label(RichText::new(notice).color(WARNING).small());
                }
            });
        });
}

fn feature_card(ui: &mut egui::Ui, title: &str, detail: &str) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(200.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(title).color(ACCENT).strong());
                ui.label(RichText::new(detail).color(TEXT_SECONDARY).small());
            });
        });
}
