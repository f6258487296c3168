pub mod app;
pub mod chart;
pub mod components;
pub mod config;
pub mod logging;
pub mod models;
pub mod session;
pub mod utils;

pub use app::CalculatorApp;
pub use chart::{ChartData, ChartRenderer, TextChart, TextChartRenderer};
pub use session::Session;
