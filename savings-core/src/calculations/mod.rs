//! Savings goal calculations.
//!
//! This module provides the amortization math that solves for the periodic
//! deposit, the year-by-year projection used for charting, and the
//! [`SavingsPlan`] pipeline that runs both in a single pass.

pub mod common;
pub mod deposit_solver;
pub mod error;
pub mod plan;
pub mod projection;

pub use deposit_solver::DepositSolver;
pub use error::SavingsError;
pub use plan::SavingsPlan;
pub use projection::ProjectionBuilder;
