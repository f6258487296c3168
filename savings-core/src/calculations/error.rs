use thiserror::Error;

/// Errors that can occur while solving or projecting a savings plan.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SavingsError {
    /// The term covers zero contribution periods, so no deposit can be solved.
    #[error("saving term must cover at least one contribution period")]
    InvalidTerm,

    /// An intermediate value left the representable decimal range.
    #[error("calculation overflowed the supported numeric range")]
    Overflow,

    /// The annuity factor collapsed to zero (periodic rate of exactly -100%).
    #[error("future value factor is zero for the given interest rate")]
    DegenerateFactor,
}
