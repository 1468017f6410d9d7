use dioxus::prelude::*;

use crate::decks::SupervisedLearningDeck;

#[component]
pub fn SupervisedLearning() -> Element {
    rsx! {
        section { class: "page page-deck page-deck--supervised-learning",
            SupervisedLearningDeck {}
        }
    }
}
