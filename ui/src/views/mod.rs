mod home;
pub use home::Home;

mod data_visualization;
pub use data_visualization::DataVisualization;

mod supervised_learning;
pub use supervised_learning::SupervisedLearning;
