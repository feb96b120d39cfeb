use crate::constants::{
    HAND_MODEL_URL, LANDMARK_COLOR, LANDMARK_RADIUS, SKELETON_COLOR, SKELETON_LINE_WIDTH,
    VISION_WASM_ROOT,
};
use crate::core::gesture::{self, Hand, Landmark, HAND_CONNECTIONS};
use crate::core::session::{Acquire, ActivityFlag, ActivityToken, SharedLoad};
use crate::core::{Controls, TreeError};
use crate::{dom, overlay};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen(module = "/js/hand_landmarker.js")]
extern "C" {
    #[wasm_bindgen(js_name = createHandLandmarker)]
    fn create_hand_landmarker(wasm_root: &str, model_url: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = detectForVideo, catch)]
    fn detect_for_video(
        landmarker: &JsValue,
        video: &web::HtmlVideoElement,
        timestamp_ms: f64,
    ) -> Result<JsValue, JsValue>;
}

fn coord(obj: &JsValue, key: &str) -> f32 {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Convert the shim's `[[{x,y,z}, ...], ...]` into hands.
fn parse_hands(value: &JsValue) -> Vec<Hand> {
    if !js_sys::Array::is_array(value) {
        return Vec::new();
    }
    js_sys::Array::from(value)
        .iter()
        .filter(|h| js_sys::Array::is_array(h))
        .map(|h| {
            js_sys::Array::from(&h)
                .iter()
                .map(|p| Landmark::new(coord(&p, "x"), coord(&p, "y"), coord(&p, "z")))
                .collect::<Hand>()
        })
        .collect()
}

fn js_err(e: JsValue) -> String {
    e.as_string()
        .or_else(|| {
            e.dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", e))
}

struct Elements {
    video: web::HtmlVideoElement,
    preview: web::HtmlCanvasElement,
    preview_ctx: Option<web::CanvasRenderingContext2d>,
}

struct Inner {
    flag: ActivityFlag,
    controls: Rc<RefCell<Controls>>,
    document: web::Document,
    elements: Elements,
    landmarker: SharedLoad<js_sys::Promise, JsValue>,
    stream: RefCell<Option<web::MediaStream>>,
    raf_handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Webcam + hand-landmark loop that writes into the shared [`Controls`].
///
/// The loop runs only between [`activate`](Self::activate) and
/// [`deactivate`](Self::deactivate); the camera is released on deactivation
/// and on drop.
pub struct GestureController {
    inner: Rc<Inner>,
}

impl GestureController {
    pub fn new(
        document: &web::Document,
        controls: Rc<RefCell<Controls>>,
    ) -> Result<Self, TreeError> {
        let video: web::HtmlVideoElement = dom::element_by_id(document, "gesture-video")?;
        let preview: web::HtmlCanvasElement = dom::element_by_id(document, "gesture-canvas")?;
        let preview_ctx = preview
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
        video.set_muted(true);
        video.set_autoplay(true);
        _ = video.set_attribute("playsinline", "");
        Ok(Self {
            inner: Rc::new(Inner {
                flag: ActivityFlag::new(),
                controls,
                document: document.clone(),
                elements: Elements {
                    video,
                    preview,
                    preview_ctx,
                },
                landmarker: SharedLoad::new(),
                stream: RefCell::new(None),
                raf_handle: Cell::new(None),
                tick: RefCell::new(None),
            }),
        })
    }

    pub fn is_active(&self) -> bool {
        self.inner.flag.is_active()
    }

    pub fn toggle(&self) {
        if self.is_active() {
            self.deactivate();
        } else {
            self.activate();
        }
    }

    /// Load the model if needed, open the camera and start the inference loop.
    pub fn activate(&self) {
        if self.inner.flag.is_active() {
            return;
        }
        let token = self.inner.flag.activate();
        self.inner.controls.borrow_mut().gesture_active = true;
        overlay::set_gesture_panel_visible(&self.inner.document, true);
        overlay::set_gesture_status(&self.inner.document, Some("Loading AI..."));
        log::info!("[gesture] activating (generation {})", token.generation());

        let inner = self.inner.clone();
        spawn_local(async move {
            if let Err(e) = Inner::start(&inner, &token).await {
                log::error!("[gesture] {}", e);
                // A stale generation must not touch a newer session's camera
                if token.is_live() {
                    overlay::set_gesture_status(&inner.document, Some(&e.status_text()));
                    inner.release_camera();
                }
            }
        });
    }

    /// Stop the loop and release the camera. Safe to call repeatedly.
    pub fn deactivate(&self) {
        let was_active = self.inner.flag.deactivate();
        self.inner.release_camera();
        self.inner.controls.borrow_mut().gesture_active = false;
        overlay::set_gesture_panel_visible(&self.inner.document, false);
        if was_active {
            log::info!("[gesture] deactivated");
        }
    }
}

impl Drop for GestureController {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl Inner {
    async fn start(inner: &Rc<Inner>, token: &ActivityToken) -> Result<(), TreeError> {
        let landmarker = inner.load_landmarker().await?;
        if !token.is_live() {
            return Ok(());
        }

        let stream = open_camera().await?;
        if !token.is_live() {
            // Deactivated while the permission prompt was up
            stop_tracks(&stream);
            return Ok(());
        }
        let video = &inner.elements.video;
        video.set_src_object(Some(&stream));
        *inner.stream.borrow_mut() = Some(stream);
        if let Ok(p) = video.play() {
            _ = JsFuture::from(p).await;
        }
        if !token.is_live() {
            return Ok(());
        }
        overlay::set_gesture_status(&inner.document, None);
        Inner::start_loop(inner, token.clone(), landmarker);
        Ok(())
    }

    /// The cached landmarker, or the one load already in flight.
    async fn load_landmarker(&self) -> Result<JsValue, TreeError> {
        let joining = self.landmarker.is_loading();
        let promise = match self
            .landmarker
            .acquire(|| create_hand_landmarker(VISION_WASM_ROOT, HAND_MODEL_URL))
        {
            Acquire::Ready(l) => return Ok(l),
            Acquire::Pending(p) => p,
        };
        if joining {
            log::info!("[gesture] waiting for hand model already loading");
        }
        let outcome = JsFuture::from(promise).await;
        let loaded = self
            .landmarker
            .settle(outcome.map_err(|e| TreeError::ModelLoad(js_err(e))))?;
        log::info!("[gesture] hand model ready");
        Ok(loaded)
    }

    fn start_loop(inner: &Rc<Inner>, token: ActivityToken, landmarker: JsValue) {
        let weak: Weak<Inner> = Rc::downgrade(inner);
        let last_video_time = Cell::new(-1.0_f64);
        let closure = Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !token.is_live() {
                return;
            }
            let video = &inner.elements.video;
            let t = video.current_time();
            if video.ready_state() >= 2 && t != last_video_time.get() {
                last_video_time.set(t);
                let now = web::window()
                    .and_then(|w| w.performance())
                    .map(|p| p.now())
                    .unwrap_or(0.0);
                match detect_for_video(&landmarker, video, now) {
                    Ok(result) => {
                        let hands = parse_hands(&result);
                        inner.draw_preview(hands.first().map(|h| h.as_slice()));
                        let update = gesture::classify(&hands);
                        if !update.is_empty() {
                            update.apply(&mut inner.controls.borrow_mut());
                        }
                    }
                    Err(e) => log::warn!("[gesture] detect failed: {}", js_err(e)),
                }
            }
            // Re-arm only while this generation is still live
            if token.is_live() {
                inner.request_frame();
            }
        }) as Box<dyn FnMut()>);
        *inner.tick.borrow_mut() = Some(closure);
        inner.request_frame();
    }

    fn request_frame(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(handle) => self.raf_handle.set(Some(handle)),
                Err(e) => log::error!("[gesture] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    /// Cancel the pending frame, stop all tracks and detach the stream.
    fn release_camera(&self) {
        if let Some(handle) = self.raf_handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        }
        if let Some(stream) = self.stream.borrow_mut().take() {
            stop_tracks(&stream);
        }
        self.elements.video.set_src_object(None);
        // The loop closure is never running here; callers are event handlers
        self.tick.borrow_mut().take();
    }

    /// Mirrored camera frame with the hand skeleton on top.
    fn draw_preview(&self, hand: Option<&[Landmark]>) {
        let Some(ctx) = &self.elements.preview_ctx else {
            return;
        };
        let canvas = &self.elements.preview;
        let video = &self.elements.video;
        if video.video_width() > 0 && canvas.width() != video.video_width() {
            canvas.set_width(video.video_width());
            canvas.set_height(video.video_height());
        }
        let w = canvas.width() as f64;
        let h = canvas.height() as f64;
        ctx.save();
        ctx.clear_rect(0.0, 0.0, w, h);
        _ = ctx.scale(-1.0, 1.0);
        _ = ctx.translate(-w, 0.0);
        _ = ctx.draw_image_with_html_video_element_and_dw_and_dh(video, 0.0, 0.0, w, h);
        if let Some(hand) = hand {
            ctx.set_stroke_style_str(SKELETON_COLOR);
            ctx.set_line_width(SKELETON_LINE_WIDTH);
            for &(a, b) in HAND_CONNECTIONS.iter() {
                if let (Some(p), Some(q)) = (hand.get(a), hand.get(b)) {
                    ctx.begin_path();
                    ctx.move_to(p.x as f64 * w, p.y as f64 * h);
                    ctx.line_to(q.x as f64 * w, q.y as f64 * h);
                    ctx.stroke();
                }
            }
            ctx.set_fill_style_str(LANDMARK_COLOR);
            for p in hand {
                ctx.begin_path();
                _ = ctx.arc(
                    p.x as f64 * w,
                    p.y as f64 * h,
                    LANDMARK_RADIUS,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }
        }
        ctx.restore();
    }
}

async fn open_camera() -> Result<web::MediaStream, TreeError> {
    let devices = web::window()
        .ok_or_else(|| TreeError::Camera("no window".into()))?
        .navigator()
        .media_devices()
        .map_err(|e| TreeError::Camera(js_err(e)))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| TreeError::Camera(js_err(e)))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| TreeError::Camera(js_err(e)))?;
    stream
        .dyn_into::<web::MediaStream>()
        .map_err(|e| TreeError::Camera(js_err(e)))
}

fn stop_tracks(stream: &web::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
}
