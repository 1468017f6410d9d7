//! Lecture decks. Each module holds its slide markup and the quiz questions
//! asked along the way.

pub mod data_visualization;
pub use data_visualization::DataVisualizationDeck;

pub mod supervised_learning;
pub use supervised_learning::SupervisedLearningDeck;

mod fragments;
