use dioxus::prelude::*;

use crate::decks::DataVisualizationDeck;

#[component]
pub fn DataVisualization() -> Element {
    rsx! {
        section { class: "page page-deck page-deck--data-visualization",
            DataVisualizationDeck {}
        }
    }
}
