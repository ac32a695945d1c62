//! Demand prediction handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{
    validate_parameters, DayType, ParameterRecord, ResolvedParameters, Season, ValidationReport,
    WeatherCondition,
};

use crate::error::{AppError, AppResult};
use crate::services::prediction::PredictionService;
use crate::AppState;

/// Request body for a daily demand prediction. Every field is optional;
/// anything omitted falls back to the baseline defaults.
#[derive(Debug, Deserialize)]
pub struct DailyPredictionRequest {
    pub season: Option<Season>,
    pub weather: Option<WeatherCondition>,
    pub temperature: Option<f64>,
    pub humidity: Option<i32>,
    pub wind_speed: Option<i32>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub holiday: Option<bool>,
    pub working_day: Option<bool>,
    pub day_type: Option<DayType>,
}

/// Request body for an hourly demand prediction
#[derive(Debug, Deserialize)]
pub struct HourlyPredictionRequest {
    #[serde(flatten)]
    pub base: DailyPredictionRequest,
    pub hour: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    /// Predicted rental count, clamped to a non-negative whole number
    pub predicted_rentals: u32,
    /// The fully resolved parameters the prediction was made from
    pub parameters: ResolvedParameters,
    /// Advisory validation over the resolved parameters
    pub validation: ValidationReport,
}

impl DailyPredictionRequest {
    fn to_record(&self) -> ParameterRecord {
        ParameterRecord {
            season: self.season,
            weather: self.weather,
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            year: self.year,
            month: self.month,
            hour: None,
            holiday: self.holiday,
            working_day: self.working_day,
            day_type: self.day_type,
        }
    }
}

/// Predict total rentals for one day
pub async fn predict_daily(
    State(state): State<AppState>,
    Json(request): Json<DailyPredictionRequest>,
) -> AppResult<Json<PredictionResponse>> {
    let params = request
        .to_record()
        .resolve(&ResolvedParameters::default());
    let validation = advisory_validation(&params);

    let service = prediction_service(&state)?;
    let predicted_rentals = service.predict_daily(&params).await?;

    Ok(Json(PredictionResponse {
        predicted_rentals,
        parameters: params,
        validation,
    }))
}

/// Predict rentals for one hour of one day
pub async fn predict_hourly(
    State(state): State<AppState>,
    Json(request): Json<HourlyPredictionRequest>,
) -> AppResult<Json<PredictionResponse>> {
    let mut record = request.base.to_record();
    record.hour = request.hour;
    let params = record.resolve(&ResolvedParameters::default());
    let validation = advisory_validation(&params);

    let service = prediction_service(&state)?;
    let predicted_rentals = service.predict_hourly(&params).await?;

    Ok(Json(PredictionResponse {
        predicted_rentals,
        parameters: params,
        validation,
    }))
}

/// Validation is advisory: findings ride along in the response so the
/// caller can flag them, but they never block the prediction itself.
fn advisory_validation(params: &ResolvedParameters) -> ValidationReport {
    let validation = validate_parameters(&params.to_record());
    if !validation.overall_valid {
        tracing::warn!(
            messages = ?validation.messages,
            "Predicting with out-of-range parameters"
        );
    }
    validation
}

fn prediction_service(state: &AppState) -> AppResult<PredictionService> {
    let model = state.model.clone().ok_or_else(|| {
        AppError::ModelUnavailable("No model endpoint configured".to_string())
    })?;
    Ok(PredictionService::new(model))
}
