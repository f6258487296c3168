pub mod assumptions;
pub mod report;
pub mod status_bar;

pub use assumptions::AssumptionsOverlay;
pub use report::SavingsReport;
