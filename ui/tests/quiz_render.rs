//! Server-side renders of a quiz card for each selection it can hold.

use dioxus::prelude::*;

use ui::decks::data_visualization::WHAT_IS_DATA;
use ui::quiz::{QuizOption, QuizPanel, QuizState};

fn panel(selected: Option<QuizOption>) -> Element {
    let mut state = QuizState::new();
    if let Some(option) = selected {
        state.select(option);
    }

    rsx! {
        QuizPanel {
            question: &WHAT_IS_DATA,
            state,
            on_select: move |_: QuizOption| {},
        }
    }
}

fn unanswered() -> Element {
    panel(None)
}

fn answered_a() -> Element {
    panel(Some(QuizOption::A))
}

fn answered_b() -> Element {
    panel(Some(QuizOption::B))
}

fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn no_feedback_before_a_choice() {
    let html = render(unanswered);
    assert!(html.contains("Afinal, o que são dados?"));
    assert_eq!(html.matches(r#"class="quiz__option""#).count(), 4);
    assert!(!html.contains("quiz__feedback"), "{html}");
}

#[test]
fn wrong_choice_shows_the_correction() {
    let html = render(answered_a);
    assert!(html.contains("quiz__feedback--incorrect"), "{html}");
    assert!(!html.contains("quiz__feedback--correct"));
    assert!(html.contains("❌ Incorreto"));
    assert!(html.contains("Dados vão além de números e gráficos"));
    assert_eq!(html.matches("quiz__option--selected").count(), 1);
}

#[test]
fn right_choice_shows_the_explanation() {
    let html = render(answered_b);
    assert!(html.contains("quiz__feedback--correct"), "{html}");
    assert!(!html.contains("quiz__feedback--incorrect"));
    assert!(html.contains("✅ Correto!"));
    assert!(html.contains("informações estruturadas e processáveis"));
    assert!(html.contains("fundamentais para análise e tomada de decisão"));
}
