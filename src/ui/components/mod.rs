mod palette;
mod size_input;
mod sort_chart;
mod status_bar;

pub use size_input::{SizeInput, SizeInputState};
pub use sort_chart::SortChart;
pub use status_bar::StatusBar;
