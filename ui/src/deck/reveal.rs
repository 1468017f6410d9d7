//! Browser backend: typed bindings to the global `Reveal` class.

use dioxus::logger::tracing;
use js_sys::{Array, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{DeckBackend, DeckConfig, DeckError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Reveal)]
    pub type RevealDeck;

    #[wasm_bindgen(constructor, js_class = "Reveal", catch)]
    fn new(element: &web_sys::Element, options: &JsValue) -> Result<RevealDeck, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn initialize(this: &RevealDeck) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &RevealDeck) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RevealBackend;

impl DeckBackend for RevealBackend {
    type Handle = RevealDeck;

    fn construct(&self, element_id: &str, config: &DeckConfig) -> Result<RevealDeck, DeckError> {
        let global = js_sys::global();
        if !Reflect::has(&global, &JsValue::from_str("Reveal")).unwrap_or(false) {
            return Err(DeckError::Unavailable("reveal.js script not loaded".into()));
        }

        let element = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(element_id))
            .ok_or_else(|| DeckError::Unavailable(format!("no element #{element_id}")))?;

        let options = build_options(config)?;
        let deck = RevealDeck::new(&element, &options)
            .map_err(|err| DeckError::Construct(js_error(err)))?;
        let started = deck
            .initialize()
            .map_err(|err| DeckError::Construct(js_error(err)))?;

        let id = element_id.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(started).await {
                tracing::error!("[deck] #{id} initialize rejected: {}", js_error(err));
            }
        });

        Ok(deck)
    }

    fn destroy(&self, handle: RevealDeck) -> Result<(), DeckError> {
        handle
            .destroy()
            .map_err(|err| DeckError::Destroy(js_error(err)))
    }
}

fn build_options(config: &DeckConfig) -> Result<JsValue, DeckError> {
    let options = js_sys::JSON::parse(&config.to_json()?)
        .map_err(|err| DeckError::Config(js_error(err)))?;

    let global = js_sys::global();
    let plugins = Array::new();
    for plugin in &config.plugins {
        let module = Reflect::get(&global, &JsValue::from_str(plugin.global_name()))
            .unwrap_or(JsValue::UNDEFINED);
        if module.is_undefined() {
            tracing::warn!("[deck] plugin {} not loaded; skipping", plugin.global_name());
            continue;
        }
        plugins.push(&module);
    }

    Reflect::set(&options, &JsValue::from_str("plugins"), &plugins)
        .map_err(|err| DeckError::Config(js_error(err)))?;
    Ok(options)
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
