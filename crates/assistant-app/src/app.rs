//! Main egui application — composes the panels and owns the session.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, TopBottomPanel};

use assistant_core::event_bus::EventBus;
use assistant_core::ports::BackendPort;
use assistant_core::session::ChatSession;
use assistant_platform::HttpBackend;
use assistant_types::config::{ApiConfig, PageKind};
use assistant_types::event::SessionEvent;
use assistant_ui::panels::{chat, home};
use assistant_ui::state::UiState;
use assistant_ui::theme;

/// The main application state
pub struct AssistantApp {
    page: PageKind,
    ui_state: UiState,
    session: ChatSession,
    event_bus: EventBus,
    backend: Rc<dyn BackendPort>,
    first_frame: bool,
    font_loaded: Rc<RefCell<bool>>,
}

impl AssistantApp {
    pub fn new(cc: &eframe::CreationContext<'_>, page: PageKind) -> Self {
        let config = ApiConfig::default();
        let event_bus = EventBus::new();
        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::new(config));

        // Two independent one-shot startup calls; neither waits for the other
        Self::spawn_health_probe(backend.clone(), event_bus.clone(), cc.egui_ctx.clone());
        if page == PageKind::Assistant {
            Self::spawn_info_fetch(backend.clone(), event_bus.clone(), cc.egui_ctx.clone());
        }

        Self {
            page,
            ui_state: UiState::new(),
            session: ChatSession::new(),
            event_bus,
            backend,
            first_frame: true,
            font_loaded: Rc::new(RefCell::new(false)),
        }
    }

    /// One-shot reachability probe. Failures are logged, never shown.
    fn spawn_health_probe(backend: Rc<dyn BackendPort>, bus: EventBus, ctx: egui::Context) {
        wasm_bindgen_futures::spawn_local(async move {
            match backend.health().await {
                Ok(status) => {
                    log::info!("Backend reachable, healthy={}", status.healthy);
                    bus.emit(SessionEvent::HealthChecked {
                        healthy: status.healthy,
                    });
                    ctx.request_repaint();
                }
                Err(e) => log::warn!("Health probe failed: {}", e),
            }
        });
    }

    /// One-shot `/info` fetch for the top-bar labels. Advisory only.
    fn spawn_info_fetch(backend: Rc<dyn BackendPort>, bus: EventBus, ctx: egui::Context) {
        wasm_bindgen_futures::spawn_local(async move {
            match backend.service_info().await {
                Ok(info) => {
                    bus.emit(SessionEvent::InfoLoaded {
                        service_name: info.service_name,
                        version: info.version,
                        model: info.model,
                    });
                    ctx.request_repaint();
                }
                Err(e) => log::warn!("Service info unavailable: {}", e),
            }
        });
    }

    /// Dispatch a submitted question (async, single attempt).
    fn dispatch_question(&self, question: String, ctx: &egui::Context) {
        let backend = self.backend.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match backend.ask(&question).await {
                Ok(reply) => bus.emit(SessionEvent::AnswerReceived {
                    answer: reply.answer,
                    model: reply.model,
                    tokens_used: reply.tokens_used,
                    source: reply.source,
                }),
                Err(e) => {
                    log::error!("Ask failed: {}", e);
                    bus.emit(SessionEvent::AskFailed {
                        message: e.to_string(),
                    });
                }
            }
            ctx.request_repaint();
        });
    }

    /// Fetch a CJK font from the server and install it into egui.
    /// The Chinese labels fall back to tofu until this resolves.
    fn load_cjk_font(ctx: egui::Context, loaded_flag: Rc<RefCell<bool>>) {
        wasm_bindgen_futures::spawn_local(async move {
            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };
            let resp = match wasm_bindgen_futures::JsFuture::from(
                window.fetch_with_str("NotoSansSC-Regular.otf"),
            )
            .await
            {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("Failed to fetch CJK font: {:?}", e);
                    return;
                }
            };
            let resp: web_sys::Response = resp.into();
            let buf = match resp.array_buffer() {
                Ok(p) => match wasm_bindgen_futures::JsFuture::from(p).await {
                    Ok(b) => b,
                    Err(_) => return,
                },
                Err(_) => return,
            };
            let uint8 = js_sys::Uint8Array::new(&buf);
            let bytes = uint8.to_vec();

            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert(
                "noto_sans_sc".to_owned(),
                egui::FontData::from_owned(bytes).into(),
            );
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, "noto_sans_sc".to_owned());
            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_default()
                .push("noto_sans_sc".to_owned());

            ctx.set_fonts(fonts);
            *loaded_flag.borrow_mut() = true;
            ctx.request_repaint();
            log::info!("CJK font loaded");
        });
    }

    fn route_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::HealthChecked { healthy } => self.ui_state.apply_probe(healthy),
            SessionEvent::InfoLoaded {
                service_name,
                version,
                model,
            } => self.ui_state.apply_service_info(service_name, version, model),
            other => self.session.apply(other),
        }
    }

    fn status_summary(&self) -> String {
        match self.session.stats() {
            Some(stats) => format!(
                "模型: {} | Token: {} | 来源: {}",
                stats.model,
                stats.tokens_used,
                stats.source.label()
            ),
            None => format!(
                "模型: {} | Token: 0",
                self.ui_state
                    .default_model
                    .as_deref()
                    .unwrap_or("qwen3-next-80b")
            ),
        }
    }
}

impl eframe::App for AssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            Self::load_cjk_font(ctx.clone(), self.font_loaded.clone());
            self.first_frame = false;
        }

        // Drain resolutions from the startup probes and in-flight question
        let events = self.event_bus.drain();
        if !events.is_empty() {
            for event in events {
                self.route_event(event);
            }
            ctx.request_repaint();
        }

        // Keep the placeholder spinner animating
        if self.session.is_awaiting() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let dot_color = if self.ui_state.backend_healthy {
                    theme::SUCCESS
                } else {
                    theme::DOT_IDLE
                };
                ui.label(RichText::new("●").color(dot_color));
                ui.label(
                    RichText::new(
                        self.ui_state
                            .service_label()
                            .unwrap_or_else(|| "智能合约问答助手".to_string()),
                    )
                    .strong()
                    .color(theme::ACCENT)
                    .size(16.0),
                );
                if self.page == PageKind::Assistant {
                    ui.separator();
                    ui.label(
                        RichText::new(self.status_summary())
                            .color(theme::TEXT_SECONDARY)
                            .small(),
                    );
                }
            });
        });

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| match self.page {
            PageKind::Assistant => {
                if let Some(raw) = chat::chat_panel(ui, &mut self.ui_state, &self.session) {
                    if let Some(question) = self.session.submit(&raw) {
                        self.dispatch_question(question, ctx);
                    }
                }
            }
            PageKind::Home => home::home_panel(ui, &mut self.ui_state),
            // The entry point never mounts an Unknown page
            PageKind::Unknown => {}
        });
    }
}
