//! Presentation-deck adapter around reveal.js.
//!
//! A [`DeckAdapter`] owns at most one live widget. `mount` builds and starts
//! it from a fixed [`DeckConfig`], `unmount` destroys it, and dropping an
//! active adapter destroys it as well (including while unwinding), so every
//! construct call is paired with exactly one destroy call.
//!
//! The widget itself sits behind [`DeckBackend`]:
//! - wasm32: [`RevealBackend`] talks to the global `Reveal` class through
//!   `wasm-bindgen`.
//! - native webview: [`ScriptBackend`] drives the same class through
//!   `document::eval`.

use std::fmt;

use dioxus::logger::tracing;

mod config;
pub use config::{DeckConfig, DeckPlugin};

#[cfg(target_arch = "wasm32")]
mod reveal;
#[cfg(target_arch = "wasm32")]
pub use reveal::RevealBackend;

#[cfg(not(target_arch = "wasm32"))]
mod script;
#[cfg(not(target_arch = "wasm32"))]
pub use script::ScriptBackend;

mod view;
pub use view::SlideDeck;

/// Backend used by [`SlideDeck`] on the current target.
#[cfg(target_arch = "wasm32")]
pub type PlatformBackend = RevealBackend;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformBackend = ScriptBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// reveal.js or the deck element is not present on the page.
    Unavailable(String),
    /// The widget threw while being built or started.
    Construct(String),
    /// The configuration could not be turned into a JS object.
    Config(String),
    /// The widget threw while being torn down.
    Destroy(String),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Unavailable(msg) => write!(f, "deck unavailable: {msg}"),
            DeckError::Construct(msg) => write!(f, "deck construction failed: {msg}"),
            DeckError::Config(msg) => write!(f, "invalid deck configuration: {msg}"),
            DeckError::Destroy(msg) => write!(f, "deck teardown failed: {msg}"),
        }
    }
}

impl std::error::Error for DeckError {}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        DeckError::Config(err.to_string())
    }
}

/// Seam between the adapter's lifecycle and a concrete widget.
pub trait DeckBackend {
    type Handle;

    /// Build the widget on the element with `element_id` and start it.
    fn construct(&self, element_id: &str, config: &DeckConfig) -> Result<Self::Handle, DeckError>;

    fn destroy(&self, handle: Self::Handle) -> Result<(), DeckError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    Inactive,
    Active,
}

pub struct DeckAdapter<B: DeckBackend> {
    backend: B,
    element_id: String,
    config: DeckConfig,
    handle: Option<B::Handle>,
}

impl<B: DeckBackend> DeckAdapter<B> {
    pub fn new(backend: B, element_id: impl Into<String>, config: DeckConfig) -> Self {
        Self {
            backend,
            element_id: element_id.into(),
            config,
            handle: None,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn state(&self) -> DeckState {
        if self.handle.is_some() {
            DeckState::Active
        } else {
            DeckState::Inactive
        }
    }

    /// `Inactive -> Active`. A second mount without an unmount is ignored.
    ///
    /// On error the adapter stays inactive.
    pub fn mount(&mut self) -> Result<(), DeckError> {
        if self.handle.is_some() {
            tracing::warn!("[deck] #{} already active; mount ignored", self.element_id);
            return Ok(());
        }

        let handle = self.backend.construct(&self.element_id, &self.config)?;
        self.handle = Some(handle);
        tracing::debug!("[deck] #{} mounted", self.element_id);
        Ok(())
    }

    /// `Active -> Inactive`. No-op when already inactive.
    pub fn unmount(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        match self.backend.destroy(handle) {
            Ok(()) => tracing::debug!("[deck] #{} unmounted", self.element_id),
            Err(err) => tracing::error!("[deck] #{}: {err}", self.element_id),
        }
    }
}

impl<B: DeckBackend> Drop for DeckAdapter<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}
