//! Terminal presentation: the console day loop and the history charts.

pub mod chart;
pub mod console;

pub use chart::{draw_history_chart, interactive_chart_available, show_history_chart};
pub use console::{ChartMode, ConsoleFrontend, ConsoleOptions};
