use super::InputWiring;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A click or tap anywhere on the canvas flips the mode.
pub fn wire_canvas_toggle(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Primary button or touch/pen contact only
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        w.toggle_mode();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
