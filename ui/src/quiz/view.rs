use dioxus::prelude::*;

use crate::t;

use super::{Feedback, QuizOption, QuizQuestion, QuizState};

/// Quiz slide body. Owns the question's selection for the life of the mount.
#[component]
pub fn QuizCard(question: &'static QuizQuestion) -> Element {
    let mut state = use_signal(QuizState::new);

    rsx! {
        QuizPanel {
            question,
            state: state(),
            on_select: move |option| state.with_mut(|s: &mut QuizState| s.select(option)),
        }
    }
}

/// Stateless rendering of a question for a given selection.
#[component]
pub fn QuizPanel(
    question: &'static QuizQuestion,
    state: QuizState,
    on_select: EventHandler<QuizOption>,
) -> Element {
    crate::i18n::init();

    let variant = question.feedback_for(&state);
    let body = question.feedback_text(variant);

    rsx! {
        div { class: "quiz", "data-quiz": question.id,
            h2 { class: "slide__title quiz__title", "{question.title}" }
            if let Some(prompt) = question.prompt {
                p { class: "quiz__prompt", "{prompt}" }
            }

            div { class: "quiz__options",
                for (option, text) in question.options.iter().copied() {
                    div { key: "{option.label()}", class: "fragment fade-in",
                        button {
                            r#type: "button",
                            class: option_class(state.selected() == Some(option)),
                            onclick: move |_| on_select.call(option),
                            span { class: "quiz__option-key", "{option.label()})" }
                            span { class: "quiz__option-text", "{text}" }
                        }
                    }
                }
            }

            if let Some(body) = body {
                div { class: "quiz__feedback {variant.css_class()}",
                    strong { class: "quiz__feedback-title",
                        if variant == Feedback::Correct {
                            {t!("quiz-correct-title")}
                        } else {
                            {t!("quiz-incorrect-title")}
                        }
                    }
                    p { "{body}" }
                }
            }
        }
    }
}

fn option_class(selected: bool) -> &'static str {
    if selected {
        "quiz__option quiz__option--selected"
    } else {
        "quiz__option"
    }
}
