//! Assistant App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer). It decides the
//! page kind once at startup and mounts the egui application onto the
//! page's canvas.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use assistant_types::config::PageKind;

/// Decide which page we were loaded into. Runs once; the rest of the app
/// dispatches on the result instead of re-probing the DOM.
fn detect_page_kind(document: &web_sys::Document) -> PageKind {
    if document.get_element_by_id("assistant_canvas").is_some() {
        PageKind::Assistant
    } else if document.get_element_by_id("home_canvas").is_some() {
        PageKind::Home
    } else {
        PageKind::Unknown
    }
}

/// WASM entry point — called from the host page
#[wasm_bindgen(start)]
pub async fn main() {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Contract assistant client starting...");

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");

    let page = detect_page_kind(&document);
    let canvas_id = match page.canvas_id() {
        Some(id) => id,
        None => {
            log::error!("No page marker canvas found; nothing to mount");
            return;
        }
    };
    log::info!("Detected page: {}", page.label());

    let canvas = document
        .get_element_by_id(canvas_id)
        .expect("Marker canvas disappeared")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::AssistantApp::new(cc, page)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
