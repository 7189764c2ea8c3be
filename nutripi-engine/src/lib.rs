pub mod history;
pub mod input;
pub mod profile;
pub mod targets;
pub mod units;

pub use history::upsert_logged_weight;
pub use profile::apply_patch;
pub use targets::{
    bmi, ideal_body_weight_kg, macro_target_range_grams, progress_percent, recommend,
    target_daily_calories, CalorieRange, GramRange, Recommendation,
};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("height out of range")]
    InvalidHeight,
    #[error("value unavailable")]
    Unavailable,
    #[error("invalid input \"{0}\"")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
