//! Demand prediction service
//!
//! Builds the model feature vectors from resolved parameters, invokes
//! the appropriate deployed model, and post-processes the raw output
//! into a rental count. Negative raw predictions clamp to zero; the
//! count is truncated to a whole number of rentals.

use shared::{DailyFeatures, HourlyFeatures, ResolvedParameters};

use crate::error::AppResult;
use crate::external::model::{DemandModelClient, ModelKind};

#[derive(Clone)]
pub struct PredictionService {
    model: DemandModelClient,
}

impl PredictionService {
    pub fn new(model: DemandModelClient) -> Self {
        Self { model }
    }

    /// Predict total rentals for one day
    pub async fn predict_daily(&self, params: &ResolvedParameters) -> AppResult<u32> {
        let features = DailyFeatures::from_params(params);
        let raw = self
            .model
            .predict(ModelKind::Daily, &DailyFeatures::COLUMNS, &features.to_row())
            .await?;
        let predicted = clamp_prediction(raw);
        tracing::info!(raw, predicted, "Daily demand prediction");
        Ok(predicted)
    }

    /// Predict rentals for one hour of one day
    pub async fn predict_hourly(&self, params: &ResolvedParameters) -> AppResult<u32> {
        let features = HourlyFeatures::from_params(params);
        let raw = self
            .model
            .predict(
                ModelKind::Hourly,
                &HourlyFeatures::COLUMNS,
                &features.to_row(),
            )
            .await?;
        let predicted = clamp_prediction(raw);
        tracing::info!(raw, predicted, "Hourly demand prediction");
        Ok(predicted)
    }
}

/// A rental count cannot be negative or fractional
fn clamp_prediction(raw: f64) -> u32 {
    raw.max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_negative_to_zero() {
        assert_eq!(clamp_prediction(-42.7), 0);
        assert_eq!(clamp_prediction(-0.1), 0);
    }

    #[test]
    fn test_clamp_truncates_fraction() {
        assert_eq!(clamp_prediction(187.9), 187);
        assert_eq!(clamp_prediction(0.4), 0);
    }

    #[test]
    fn test_clamp_passes_whole_counts() {
        assert_eq!(clamp_prediction(0.0), 0);
        assert_eq!(clamp_prediction(5210.0), 5210);
    }
}
