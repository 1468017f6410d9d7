use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use uuid::Uuid;

use crate::t;

use super::{DeckAdapter, DeckConfig, PlatformBackend};

/// Full-screen reveal.js deck. `children` must be `section` slides.
///
/// The widget is built once the markup is in the DOM and destroyed when the
/// component unmounts; a fresh adapter is created for every mount.
#[component]
pub fn SlideDeck(title: String, children: Element) -> Element {
    crate::i18n::init();

    let element_id = use_hook(|| format!("deck-{}", Uuid::new_v4().simple()));
    let adapter = use_hook({
        let element_id = element_id.clone();
        move || {
            Rc::new(RefCell::new(DeckAdapter::new(
                PlatformBackend::default(),
                element_id,
                DeckConfig::default(),
            )))
        }
    });

    use_effect({
        let adapter = adapter.clone();
        move || {
            if let Err(err) = adapter.borrow_mut().mount() {
                tracing::error!("[deck] {err}");
            }
        }
    });

    use_drop(move || adapter.borrow_mut().unmount());

    #[cfg(debug_assertions)]
    {
        tracing::debug!("[deck] render {title} (#{element_id})");
    }

    rsx! {
        document::Title { "{title} · Aulas" }
        div { class: "deck-page",
            Link { class: "deck-page__back", to: "/", {t!("deck-back-home")} }
            div { id: "{element_id}", class: "reveal deck-page__reveal",
                div { class: "slides", {children} }
            }
            p { class: "deck-page__hint", {t!("deck-hint")} }
        }
    }
}
