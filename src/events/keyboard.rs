use super::InputWiring;
use crate::core::keys::{action_for_key, KeyAction};
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

fn toggle_fullscreen(document: &web::Document, canvas: &web::HtmlCanvasElement) {
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else if let Err(e) = canvas.request_fullscreen() {
        log::warn!("[keys] fullscreen refused: {:?}", e);
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    if ev.repeat() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    if action.prevents_default() {
        ev.prevent_default();
    }
    match action {
        KeyAction::ToggleMode => w.toggle_mode(),
        KeyAction::ToggleMute => w.toggle_mute(),
        KeyAction::ToggleGesture => w.toggle_gesture(),
        KeyAction::ToggleOverlay => overlay::toggle(&w.document),
        KeyAction::ToggleFullscreen => toggle_fullscreen(&w.document, &w.canvas),
        KeyAction::ExitFullscreen => {
            if w.document.fullscreen_element().is_some() {
                w.document.exit_fullscreen();
            }
        }
    }
}

pub fn wire_global_keydown(w: &InputWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
