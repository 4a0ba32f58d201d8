//! Browser collaborators: media query, game-over markup, animation frames

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, Window};

use super::{FrameScheduler, GameOverDisplay};
use crate::sim::Winner;
use crate::tuning::DeviceProfile;

/// Media query that marks a phone-sized screen
pub const SMALL_SCREEN_QUERY: &str = "(max-width: 600px)";

/// Checked once; resizing later does not change the preset
pub fn detect_device_profile() -> DeviceProfile {
    let matches = web_sys::window()
        .and_then(|w| w.match_media(SMALL_SCREEN_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false);
    let profile = DeviceProfile::from_small_screen(matches);
    log::info!("Device profile: {}", profile.as_str());
    profile
}

/// Slot holding the per-frame callback, filled once the game exists
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame`-backed scheduler
pub struct AnimationFrameScheduler {
    window: Window,
    callback: FrameCallback,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::warn!("Frame requested before the frame callback was installed");
            return;
        };
        if let Err(err) = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
    }
}

/// "<winner> Wins!" screen with a Play Again button
pub struct GameOverScreen {
    body: HtmlElement,
    canvas: HtmlCanvasElement,
    container: HtmlElement,
    title: HtmlElement,
    button: HtmlButtonElement,
    attached: bool,
}

impl GameOverScreen {
    pub fn new(document: &Document, canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let container: HtmlElement = document.create_element("div")?.dyn_into()?;
        container.class_list().add_1("game-over-container")?;

        let title: HtmlElement = document.create_element("h1")?.dyn_into()?;
        let button: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
        button.set_text_content(Some("Play Again"));

        container.append_child(&title)?;
        container.append_child(&button)?;

        Ok(Self {
            body,
            canvas,
            container,
            title,
            button,
            attached: false,
        })
    }

    /// The restart trigger
    pub fn restart_button(&self) -> &HtmlButtonElement {
        &self.button
    }
}

impl GameOverDisplay for GameOverScreen {
    fn show_winner(&mut self, winner: Winner) {
        self.canvas.set_hidden(true);
        self.title
            .set_text_content(Some(&format!("{} Wins!", winner.label())));
        if !self.attached {
            match self.body.append_child(&self.container) {
                Ok(_) => self.attached = true,
                Err(err) => log::error!("Failed to show game over screen: {:?}", err),
            }
        }
    }

    fn hide(&mut self) {
        if self.attached {
            if let Err(err) = self.body.remove_child(&self.container) {
                log::error!("Failed to remove game over screen: {:?}", err);
            }
            self.attached = false;
        }
        self.canvas.set_hidden(false);
    }
}
