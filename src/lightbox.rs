//! Screenshot lightbox: a carousel over one project's images.
//!
//! DESIGN
//! ======
//! [`LightboxCore`] owns the only mutable carousel state, an optional
//! [`CarouselSession`]. Every entry point returns a [`LightboxAction`] that
//! the browser layer applies to the overlay; the core never touches the DOM.
//! A visible lightbox always has a session, and a session is never empty.
//!
//! Markup opts in through data attributes instead of inline handlers:
//!
//! - `<img data-lightbox="slider-id">` opens with that card's slider
//! - `data-lightbox-step="-1"` / `"1"` on prev/next controls
//! - `data-lightbox-close` on the close control

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use url::Url;

use crate::carousel::CarouselSession;
use crate::image_path::find_image;

pub const MODAL_ID: &str = "image-modal";
pub const MODAL_IMAGE_ID: &str = "modal-img";
pub const CAPTION_ID: &str = "caption";
/// Selector for the images inside a slider container, in document order.
pub const SLIDE_IMAGE_SELECTOR: &str = ".slide img";

pub const OPEN_ATTR: &str = "data-lightbox";
pub const STEP_ATTR: &str = "data-lightbox-step";
pub const CLOSE_ATTR: &str = "data-lightbox-close";

/// Where the cursor started when the lightbox opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartPosition {
    /// The clicked image was found at this index.
    Matched(usize),
    /// No entry matched; the cursor defaulted to the first image.
    Defaulted,
}

/// Image and caption to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxFrame {
    pub src: String,
    pub caption: String,
}

/// Instruction for the browser layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    /// Make the overlay visible, lock page scroll, and show the frame.
    Show(LightboxFrame),
    /// Swap the displayed frame.
    Update(LightboxFrame),
    /// Hide the overlay and restore page scroll.
    Hide,
    None,
}

/// Keys the lightbox reacts to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    Previous,
    Next,
    Other,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::Previous,
            "ArrowRight" => Self::Next,
            _ => Self::Other,
        }
    }
}

/// Parse a `data-lightbox-step` value. Missing or malformed values are `None`.
#[must_use]
pub fn parse_step(raw: &str) -> Option<i64> {
    match raw.trim().trim_start_matches('+').parse::<i64>() {
        Ok(step) => Some(step),
        Err(_) => None,
    }
}

pub struct LightboxCore {
    base: Url,
    caption_label: String,
    session: Option<CarouselSession>,
    start: Option<StartPosition>,
}

impl LightboxCore {
    /// `base` resolves relative image sources; `caption_label` prefixes the
    /// "n of total" caption.
    pub fn new(base: Url, caption_label: impl Into<String>) -> Self {
        Self {
            base,
            caption_label: caption_label.into(),
            session: None,
            start: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&CarouselSession> {
        self.session.as_ref()
    }

    /// How the current session's cursor was chosen, if open.
    #[must_use]
    pub fn start_position(&self) -> Option<StartPosition> {
        self.start
    }

    /// Open on `clicked`. `slider` holds the slider container's image
    /// sources when the container exists; without it, or when it holds no
    /// images, the set is just the clicked image. Any previous session is
    /// discarded.
    pub fn open(&mut self, clicked: &str, slider: Option<Vec<String>>) -> LightboxAction {
        let images = match slider {
            Some(images) if !images.is_empty() => images,
            Some(_) => {
                log::debug!("lightbox: slider for `{clicked}` has no slides, showing it alone");
                vec![clicked.to_owned()]
            }
            None => vec![clicked.to_owned()],
        };

        let start = match find_image(&images, clicked, &self.base) {
            Some(index) => StartPosition::Matched(index),
            None => {
                log::debug!("lightbox: `{clicked}` not found in its slider, starting at 0");
                StartPosition::Defaulted
            }
        };
        let index = match start {
            StartPosition::Matched(index) => index,
            StartPosition::Defaulted => 0,
        };

        self.session = CarouselSession::new(images, index);
        self.start = self.session.as_ref().map(|_| start);
        match self.frame() {
            Some(frame) => LightboxAction::Show(frame),
            None => LightboxAction::None,
        }
    }

    /// Step through the set with wraparound. No-op while closed.
    pub fn advance(&mut self, delta: i64) -> LightboxAction {
        let Some(session) = self.session.as_mut() else {
            return LightboxAction::None;
        };
        session.advance(delta);
        match self.frame() {
            Some(frame) => LightboxAction::Update(frame),
            None => LightboxAction::None,
        }
    }

    /// Hide and drop the session.
    pub fn close(&mut self) -> LightboxAction {
        self.session = None;
        self.start = None;
        LightboxAction::Hide
    }

    /// Keyboard handling; ignored while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> LightboxAction {
        if !self.is_open() {
            return LightboxAction::None;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::Previous => self.advance(-1),
            LightboxKey::Next => self.advance(1),
            LightboxKey::Other => LightboxAction::None,
        }
    }

    /// A click landed on the overlay. Only a click on the backdrop itself,
    /// not on the image or caption, closes.
    pub fn handle_overlay_click(&mut self, on_backdrop: bool) -> LightboxAction {
        if on_backdrop && self.is_open() {
            self.close()
        } else {
            LightboxAction::None
        }
    }

    fn frame(&self) -> Option<LightboxFrame> {
        let session = self.session.as_ref()?;
        Some(LightboxFrame {
            src: session.current().to_owned(),
            caption: session.caption(&self.caption_label),
        })
    }
}
