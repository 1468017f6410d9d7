//! Native webview backend: reveal.js is driven through `document::eval`.
//!
//! Live decks are kept in `window.__aulasDecks`, keyed by element id, so the
//! destroy script can find the instance its construct script created.
//!
//! `eval` cannot be awaited from the synchronous [`DeckBackend`] calls, so
//! `construct` hands back a handle as soon as the script is queued. A page
//! without `Reveal` or without the deck element makes the script throw; that
//! error is only logged, the adapter still reports `Active`, and the later
//! destroy script finds no registry entry and does nothing.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::{DeckBackend, DeckConfig, DeckError};

const REGISTRY: &str = "window.__aulasDecks";

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptBackend;

/// Key into the page-side registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptHandle {
    element_id: String,
}

impl DeckBackend for ScriptBackend {
    type Handle = ScriptHandle;

    fn construct(&self, element_id: &str, config: &DeckConfig) -> Result<ScriptHandle, DeckError> {
        let script = construct_script(element_id, config)?;
        run_logged(script, "construct");
        Ok(ScriptHandle {
            element_id: element_id.to_string(),
        })
    }

    fn destroy(&self, handle: ScriptHandle) -> Result<(), DeckError> {
        let script = destroy_script(&handle.element_id)?;
        run_logged(script, "destroy");
        Ok(())
    }
}

// The snippet runs as soon as `eval` is called; awaiting it only reports
// errors. Spawned on the root scope since destroy runs while the deck's own
// scope is being dropped.
fn run_logged(script: String, stage: &'static str) {
    let eval = document::eval(&script);
    spawn_forever(async move {
        if let Err(err) = eval.join::<serde_json::Value>().await {
            tracing::error!("[deck] {stage} script failed: {err}");
        }
    });
}

pub(crate) fn construct_script(element_id: &str, config: &DeckConfig) -> Result<String, DeckError> {
    let id = serde_json::to_string(element_id)?;
    let options = config.to_json()?;
    let plugins = config
        .plugins
        .iter()
        .map(|plugin| plugin.global_name())
        .collect::<Vec<_>>();
    let plugins = serde_json::to_string(&plugins)?;

    Ok(format!(
        r#"const el = document.getElementById({id});
if (!el || typeof Reveal === "undefined") {{
  throw new Error("reveal.js unavailable for #" + {id});
}}
const options = {options};
options.plugins = {plugins}.map((name) => window[name]).filter(Boolean);
const deck = new Reveal(el, options);
{REGISTRY} = {REGISTRY} || {{}};
{REGISTRY}[{id}] = deck;
await deck.initialize();
return true;"#
    ))
}

pub(crate) fn destroy_script(element_id: &str) -> Result<String, DeckError> {
    let id = serde_json::to_string(element_id)?;
    Ok(format!(
        r#"const decks = {REGISTRY} || {{}};
const deck = decks[{id}];
if (deck) {{
  delete decks[{id}];
  deck.destroy();
}}
return true;"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_script_embeds_options_and_plugins() {
        let script = construct_script("deck-1", &DeckConfig::default()).unwrap();
        assert!(script.contains(r#"document.getElementById("deck-1")"#));
        assert!(script.contains(r#""transition":"slide""#));
        assert!(script.contains(r#""backgroundTransition":"fade""#));
        assert!(script.contains(r#"options.plugins = ["RevealHighlight"]"#));
        assert!(script.contains("new Reveal(el, options)"));
        assert!(script.contains(r#"window.__aulasDecks["deck-1"] = deck"#));
    }

    #[test]
    fn destroy_script_targets_the_same_registry_entry() {
        let script = destroy_script("deck-1").unwrap();
        assert!(script.contains(r#"decks["deck-1"]"#));
        assert!(script.contains("deck.destroy()"));
    }

    #[test]
    fn construct_registers_only_after_availability_check() {
        let script = construct_script("deck-1", &DeckConfig::default()).unwrap();
        let guard = script.find(r#"typeof Reveal === "undefined""#).unwrap();
        let register = script.find("window.__aulasDecks[").unwrap();
        assert!(guard < register);
    }

    #[test]
    fn destroy_without_registered_deck_is_a_no_op() {
        let script = destroy_script("deck-missing").unwrap();
        let lookup = script.find("if (deck)").unwrap();
        let destroy = script.find("deck.destroy()").unwrap();
        assert!(lookup < destroy);
        assert!(script.trim_end().ends_with("return true;"));
    }

    #[test]
    fn element_ids_are_quoted() {
        let script = destroy_script(r#"a"b"#).unwrap();
        assert!(script.contains(r#"decks["a\"b"]"#));
    }
}
