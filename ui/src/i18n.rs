//! String catalog for `aulas-ui`.
//!
//! UI chrome (navbar labels, landing copy, quiz headings) lives in a Fluent
//! file embedded at compile time:
//! ```text
//! i18n.toml
//! i18n/
//!   pt-BR/aulas-ui.ftl   (fallback and only locale)
//! ```
//!
//! Slide content itself is plain markup inside the deck modules; only strings
//! shared across views go through the catalog.
//!
//! Usage (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let home_label = t!("nav-home");
//! ```
use std::sync::Once;

use dioxus::logger::tracing;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Ergonomic lookup macro: `t!("nav-home")`.
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup goes through the shared
/// loader and keys are checked at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the catalog file must be `i18n/pt-BR/{DOMAIN}.ftl`.
const DOMAIN: &str = "aulas-ui";

pub const FALLBACK_LANGUAGE: &str = "pt-BR";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the embedded catalog (idempotent).
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = LOADER.load_fallback_language(&Localizations) {
            tracing::error!("[i18n] failed loading {FALLBACK_LANGUAGE} catalog: {err}");
        }
    });
}

/// Language folders embedded in the binary.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
