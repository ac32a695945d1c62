//! Request handlers for the RideWise backend

mod health;
mod parameters;
mod predictions;

pub use health::health_check;
pub use parameters::extract_from_document;
pub use predictions::{predict_daily, predict_hourly};
