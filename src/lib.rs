//! # folio
//!
//! Client-side behavior for a static portfolio site, compiled to WebAssembly.
//!
//! The pages are plain HTML; this crate wires the four interactive pieces on
//! top of them: the persisted light/dark theme, the shared navigation
//! fragment, scroll reveal of content cards, and the screenshot lightbox.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Per-page settings read from an embedded JSON block |
//! | [`error`] | Crate-wide error type |
//! | [`theme`] | Theme mode resolution and persistence |
//! | [`nav`] | Navigation fragment loading, active link, mobile menu |
//! | [`reveal`] | One-way visibility tracking for content cards |
//! | [`carousel`] | Image set + circular cursor |
//! | [`image_path`] | URL normalization for matching the clicked image |
//! | [`lightbox`] | Lightbox state machine driven by clicks and keys |
//!
//! Everything above is browser-independent and tested natively. The
//! `browser` feature adds the web-sys layer that reads the DOM, feeds these
//! cores, and applies what they return.

pub mod carousel;
pub mod config;
pub mod error;
pub mod image_path;
pub mod lightbox;
pub mod nav;
pub mod reveal;
pub mod theme;

#[cfg(feature = "browser")]
mod browser;

pub use error::SiteError;
