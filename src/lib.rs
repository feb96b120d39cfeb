#![cfg(target_arch = "wasm32")]
use crate::core::{Controls, InterpolationDriver, OffsetRelease, SceneConfig, TreeScene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod gesture;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

// Release the camera when the page goes away
fn wire_pagehide(gesture: &Rc<gesture::GestureController>) {
    let gesture = gesture.clone();
    let closure = Closure::wrap(Box::new(move || {
        gesture.deactivate();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_overlay_buttons(w: &events::InputWiring) {
    let enter = w.clone();
    dom::add_click_listener(&w.document, "enter", move || {
        overlay::hide(&enter.document);
        if let Some(audio) = &enter.audio {
            audio.start();
        }
    });

    let enter_gesture = w.clone();
    dom::add_click_listener(&w.document, "enter-gesture", move || {
        overlay::hide(&enter_gesture.document);
        if let Some(audio) = &enter_gesture.audio {
            audio.start();
        }
        if let Some(g) = &enter_gesture.gesture {
            g.activate();
        }
    });

    let mute = w.clone();
    dom::add_click_listener(&w.document, "mute-toggle", move || mute.toggle_mute());
}

fn build_scene() -> TreeScene {
    let config = SceneConfig::default();
    let t0 = Instant::now();
    let scene = TreeScene::build(&config);
    log::info!(
        "[scene] {} particles generated in {:.1} ms",
        config.particle_count(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    scene
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dream-tree starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "app-canvas")?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let controls = Rc::new(RefCell::new(Controls::default()));
    overlay::set_mode_label(&document, controls.borrow().mode);
    overlay::set_gesture_panel_visible(&document, false);

    let audio = match audio::AudioRig::new() {
        Ok(a) => Some(a),
        Err(e) => {
            log::error!("[audio] init failed: {:?}", e);
            None
        }
    };
    overlay::set_muted_icon(&document, audio.as_ref().is_some_and(|a| a.is_muted()));

    let gesture = match gesture::GestureController::new(&document, controls.clone()) {
        Ok(g) => {
            let g = Rc::new(g);
            wire_pagehide(&g);
            Some(g)
        }
        Err(e) => {
            log::error!("[gesture] {}", e);
            None
        }
    };

    let wiring = events::InputWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        controls: controls.clone(),
        audio: audio.clone(),
        gesture,
    };
    wire_overlay_buttons(&wiring);
    events::wire_canvas_toggle(&wiring);
    events::wire_global_keydown(&wiring);

    let scene = build_scene();
    let gpu = frame::init_gpu(&canvas, &scene).await;
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        driver: InterpolationDriver::new(OffsetRelease::default()),
        controls: controls.clone(),
        last_mode: controls.borrow().mode,
        audio,
        document,
        canvas,
        gpu,
        start_instant: now,
        last_instant: now,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
