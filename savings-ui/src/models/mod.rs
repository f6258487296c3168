mod savings_form;

pub use savings_form::{FormField, SavingsForm};
