use crate::audio::AudioRig;
use crate::core::Controls;
use crate::gesture::GestureController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod keyboard;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_canvas_toggle;

/// Handles shared by the input callbacks.
#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub controls: Rc<RefCell<Controls>>,
    pub audio: Option<AudioRig>,
    pub gesture: Option<Rc<GestureController>>,
}

impl InputWiring {
    pub fn toggle_mode(&self) {
        let mode = self.controls.borrow_mut().toggle_mode();
        log::info!("[input] mode -> {:?}", mode);
    }

    pub fn toggle_mute(&self) {
        if let Some(audio) = &self.audio {
            let muted = audio.toggle_muted();
            crate::overlay::set_muted_icon(&self.document, muted);
        }
    }

    pub fn toggle_gesture(&self) {
        match &self.gesture {
            Some(g) => g.toggle(),
            None => log::warn!("[gesture] controller unavailable"),
        }
    }
}
