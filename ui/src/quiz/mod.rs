//! Single-answer multiple-choice checks embedded in the slide decks.
//!
//! Each question keeps its own [`QuizState`], created fresh when the deck view
//! mounts. [`feedback`] is a pure mapping from that state to the variant the
//! card renders.

mod view;
pub use view::{QuizCard, QuizPanel};

/// Fixed answer identifiers a question can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizOption {
    A,
    B,
    C,
    D,
}

impl QuizOption {
    pub const ALL: [QuizOption; 4] = [QuizOption::A, QuizOption::B, QuizOption::C, QuizOption::D];

    pub fn label(self) -> &'static str {
        match self {
            QuizOption::A => "A",
            QuizOption::B => "B",
            QuizOption::C => "C",
            QuizOption::D => "D",
        }
    }
}

/// Per-question selection. `None` means nothing chosen yet.
///
/// Once an option is chosen the state only ever moves to another option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizState {
    selected: Option<QuizOption>,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<QuizOption> {
        self.selected
    }

    /// Overwrites any prior choice.
    pub fn select(&mut self, option: QuizOption) {
        self.selected = Some(option);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    NoFeedback,
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn css_class(self) -> &'static str {
        match self {
            Feedback::NoFeedback => "quiz__feedback--none",
            Feedback::Correct => "quiz__feedback--correct",
            Feedback::Incorrect => "quiz__feedback--incorrect",
        }
    }
}

pub fn feedback(state: &QuizState, correct: QuizOption) -> Feedback {
    match state.selected {
        None => Feedback::NoFeedback,
        Some(chosen) if chosen == correct => Feedback::Correct,
        Some(_) => Feedback::Incorrect,
    }
}

/// Static description of one question.
#[derive(Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: &'static str,
    /// Slide heading.
    pub title: &'static str,
    /// Question text under the heading, when the heading is not the question.
    pub prompt: Option<&'static str>,
    pub options: &'static [(QuizOption, &'static str)],
    pub correct: QuizOption,
    /// Shown together with the `Correct` variant.
    pub explanation: &'static str,
    /// Shown for any wrong option.
    pub correction: &'static str,
}

impl QuizQuestion {
    pub fn feedback_for(&self, state: &QuizState) -> Feedback {
        feedback(state, self.correct)
    }

    pub fn feedback_text(&self, variant: Feedback) -> Option<&'static str> {
        match variant {
            Feedback::NoFeedback => None,
            Feedback::Correct => Some(self.explanation),
            Feedback::Incorrect => Some(self.correction),
        }
    }
}
