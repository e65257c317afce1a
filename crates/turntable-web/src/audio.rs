//! Background audio: volume slider, mute button and autoplay unlock.

use std::cell::RefCell;
use std::rc::Rc;

use turntable_core::{AudioConfig, AudioControl, Rejection};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlAudioElement, HtmlElement, HtmlInputElement};

use crate::dom;
use crate::error::WebResult;

/// Elements driven by the audio control. Slider and button are optional.
#[derive(Clone)]
struct AudioView {
    audio: HtmlAudioElement,
    slider: Option<HtmlInputElement>,
    button: Option<HtmlElement>,
    muted_class: String,
}

impl AudioView {
    fn render(&self, control: &AudioControl) {
        self.audio.set_volume(control.volume());
        self.audio.set_muted(control.is_muted());

        if let Some(slider) = &self.slider {
            slider.set_value(&control.slider_value().to_string());
        }
        if let Some(button) = &self.button {
            let muted = control.is_muted();
            let pressed = if muted { "true" } else { "false" };
            if let Err(e) = button.set_attribute("aria-pressed", pressed) {
                log::warn!("Failed to update mute button: {:?}", e);
            }
            if let Err(e) = button.class_list().toggle_with_force(&self.muted_class, muted) {
                log::warn!("Failed to update mute button: {:?}", e);
            }
        }
    }
}

/// Wire the audio element and its controls, then try to start playback.
pub fn mount(document: &Document, config: &AudioConfig) -> WebResult<()> {
    let audio: HtmlAudioElement = dom::by_id(document, &config.audio_id)?;
    let slider = dom::by_id::<HtmlInputElement>(document, &config.slider_id)
        .map_err(|e| log::debug!("No volume slider: {}", e))
        .ok();
    let button = dom::by_id::<HtmlElement>(document, &config.mute_button_id)
        .map_err(|e| log::debug!("No mute button: {}", e))
        .ok();

    let view = AudioView {
        audio,
        slider: slider.clone(),
        button: button.clone(),
        muted_class: config.muted_class.clone(),
    };
    let control = Rc::new(RefCell::new(AudioControl::new(config.initial_volume)));
    view.render(&control.borrow());

    if let Some(slider) = slider {
        let control = control.clone();
        let view = view.clone();
        let input = slider.clone();
        dom::listen(&slider, "input", move |_| {
            let mut control = control.borrow_mut();
            match control.set_volume_from_slider(&input.value()) {
                Some(_) => view.render(&control),
                None => log::warn!("Ignoring volume value {:?}", input.value()),
            }
        })?;
    }

    if let Some(button) = button {
        let control = control.clone();
        let view = view.clone();
        dom::listen(&button, "click", move |_| {
            let mut control = control.borrow_mut();
            let muted = control.toggle_mute();
            view.render(&control);
            log::debug!("Audio muted: {}", muted);
        })?;
    }

    play(view, control, document.clone());
    Ok(())
}

/// Call `play()` and route the outcome back into the control.
fn play(view: AudioView, control: Rc<RefCell<AudioControl>>, document: Document) {
    let attempt = view.audio.play();
    spawn_local(async move {
        let result = match attempt {
            Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
            Err(e) => Err(e),
        };

        let rejection = match result {
            Ok(()) => {
                control.borrow_mut().play_started();
                log::info!("Background audio playing");
                return;
            }
            Err(e) => {
                log::debug!("play() rejected: {:?}", e);
                control.borrow_mut().play_rejected()
            }
        };

        match rejection {
            Rejection::AwaitGesture => {
                if let Err(e) = unlock_on_gesture(view, control, document) {
                    log::warn!("Could not install audio unlock: {}", e);
                }
            }
            Rejection::GiveUp => log::warn!("Background audio blocked by the browser"),
        }
    });
}

/// Retry playback once, on the first pointer or key press anywhere.
fn unlock_on_gesture(
    view: AudioView,
    control: Rc<RefCell<AudioControl>>,
    document: Document,
) -> WebResult<()> {
    log::info!("Autoplay blocked, waiting for a tap to start audio");
    let target = document.clone();
    dom::listen_once(&target, &["pointerdown", "keydown"], move |_| {
        let retry = control.borrow_mut().on_gesture();
        if retry {
            play(view.clone(), control.clone(), document.clone());
        }
    })
}
