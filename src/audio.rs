use crate::constants::{CHIME_DURATION_SEC, CHIME_GAIN, MASTER_GAIN, MUSIC_URL, REVERB_SECONDS};
use crate::core::{Mode, TreeError};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Background music plus the WebAudio bus used for mode-change chimes.
#[derive(Clone)]
pub struct AudioRig {
    audio_ctx: web::AudioContext,
    master_gain: web::GainNode,
    reverb_in: web::GainNode,
    music: web::HtmlAudioElement,
    muted: Rc<Cell<bool>>,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

// Long, dark stereo impulse response built from xorshift noise
fn build_reverb(audio_ctx: &web::AudioContext) -> anyhow::Result<web::ConvolverNode> {
    let reverb = web::ConvolverNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("ConvolverNode error: {:?}", e))?;
    reverb.set_normalize(true);
    let sr = audio_ctx.sample_rate();
    let len = (sr * REVERB_SECONDS) as u32;
    let ir = audio_ctx
        .create_buffer(2, len.max(1), sr)
        .map_err(|e| anyhow::anyhow!("impulse buffer error: {:?}", e))?;
    let mut seeds: [u32; 2] = [0x1234ABCD, 0x7890FEDC];
    let dt = 1.0_f32 / sr;
    for (ch, seed) in seeds.iter_mut().enumerate() {
        let mut buf: Vec<f32> = vec![0.0; len as usize];
        let mut t = 0.0_f32;
        for v in buf.iter_mut() {
            let mut x = *seed;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            *seed = x;
            let n = (x as f32 / u32::MAX as f32) * 2.0 - 1.0;
            let decay = (-t / (REVERB_SECONDS * 0.5)).exp();
            let dark = (1.0 - t / REVERB_SECONDS).max(0.0);
            *v = n * decay * (0.6 + 0.4 * dark);
            t += dt;
        }
        _ = ir.copy_to_channel(&mut buf, ch as i32);
    }
    reverb.set_buffer(Some(&ir));
    Ok(reverb)
}

impl AudioRig {
    pub fn new() -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master_gain = create_gain(&audio_ctx, MASTER_GAIN, "Master")?;
        _ = master_gain.connect_with_audio_node(&audio_ctx.destination());

        let reverb_in = create_gain(&audio_ctx, 1.0, "Reverb in")?;
        let reverb = build_reverb(&audio_ctx)?;
        let reverb_wet = create_gain(&audio_ctx, 0.6, "Reverb wet")?;
        _ = reverb_in.connect_with_audio_node(&reverb);
        _ = reverb.connect_with_audio_node(&reverb_wet);
        _ = reverb_wet.connect_with_audio_node(&master_gain);

        let music = web::HtmlAudioElement::new_with_src(MUSIC_URL)
            .map_err(|e| anyhow::anyhow!("audio element error: {:?}", e))?;
        music.set_loop(true);
        music.set_cross_origin(Some("anonymous"));

        Ok(Self {
            audio_ctx,
            master_gain,
            reverb_in,
            music,
            muted: Rc::new(Cell::new(false)),
        })
    }

    /// Resume the context and try to start the music. Must run inside a user
    /// gesture; a rejected `play()` is logged and left alone.
    pub fn start(&self) {
        _ = self.audio_ctx.resume();
        if self.muted.get() {
            return;
        }
        let promise = match self.music.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] play() threw: {:?}", e);
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                let err = TreeError::AudioBlocked(format!("{:?}", e));
                log::warn!("[audio] {}", err);
            }
        });
    }

    pub fn is_muted(&self) -> bool {
        self.muted.get()
    }

    pub fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
        self.music.set_muted(muted);
        self.master_gain
            .gain()
            .set_value(if muted { 0.0 } else { MASTER_GAIN });
        if !muted && self.music.paused() {
            self.start();
        }
        log::info!("[audio] muted={}", muted);
    }

    pub fn toggle_muted(&self) -> bool {
        let next = !self.muted.get();
        self.set_muted(next);
        next
    }

    /// Short bell through the reverb bus: a falling fifth when the tree
    /// scatters, a rising one when it gathers.
    pub fn chime(&self, mode: Mode) {
        if self.muted.get() {
            return;
        }
        let (from_hz, to_hz) = match mode {
            Mode::Scattered => (1174.66_f32, 783.99_f32),
            Mode::Assembled => (783.99_f32, 1174.66_f32),
        };
        let Ok(src) = web::OscillatorNode::new(&self.audio_ctx) else {
            return;
        };
        src.set_type(web::OscillatorType::Sine);
        let Ok(g) = web::GainNode::new(&self.audio_ctx) else {
            return;
        };
        let t0 = self.audio_ctx.current_time() + 0.005;
        src.frequency().set_value(from_hz);
        _ = src
            .frequency()
            .exponential_ramp_to_value_at_time(to_hz, t0 + 0.15);
        g.gain().set_value(0.0);
        _ = g.gain().linear_ramp_to_value_at_time(CHIME_GAIN, t0 + 0.02);
        _ = g
            .gain()
            .exponential_ramp_to_value_at_time(0.0001, t0 + CHIME_DURATION_SEC);
        _ = src.connect_with_audio_node(&g);
        _ = g.connect_with_audio_node(&self.master_gain);
        _ = g.connect_with_audio_node(&self.reverb_in);
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(t0 + CHIME_DURATION_SEC + 0.05);
    }
}
