mod frequency;
mod plan_result;
mod projection_series;
mod savings_parameters;

pub use frequency::ContributionFrequency;
pub use plan_result::SavingsPlanResult;
pub use projection_series::ProjectionSeries;
pub use savings_parameters::SavingsParameters;
