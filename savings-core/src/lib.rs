pub mod calculations;
pub mod models;

pub use calculations::{DepositSolver, ProjectionBuilder, SavingsError, SavingsPlan};
pub use models::*;
