//! Shared UI crate for Aulas. Lessons, navigation, quizzes, the reveal.js
//! adapter and every view live here; platform crates only own the router.

use dioxus::prelude::*;

pub mod deck;
pub mod decks;
pub mod i18n;
pub mod lessons;
pub mod quiz;
pub mod views;

pub mod components {
    pub mod nav_bar;
    pub use nav_bar::{is_active, NavBar, NavEntry, NAV_ENTRIES};
}

/// Shared theme (web loads it as an asset; desktop inlines the file).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
