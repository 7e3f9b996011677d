pub mod diagnoses;
pub mod health;
pub mod plans;
