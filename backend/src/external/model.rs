//! Demand model client
//!
//! Client for the external model-serving endpoint hosting the pre-trained
//! daily and hourly rental-demand regression models. The core only
//! prepares the model's input and consumes its output; the model itself
//! is a black box behind this client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};

/// Which of the two deployed models to invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Daily,
    Hourly,
}

impl ModelKind {
    fn path(&self) -> &'static str {
        match self {
            ModelKind::Daily => "daily",
            ModelKind::Hourly => "hourly",
        }
    }
}

/// Client for the model-serving endpoint
#[derive(Clone)]
pub struct DemandModelClient {
    endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Inference request: one feature row plus its column names, so the
/// serving side can verify the training-time order.
#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// Inference response: one prediction per submitted row
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<f64>,
}

impl DemandModelClient {
    /// Create a new model client with an explicit inference timeout
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            http_client,
        }
    }

    /// Create a client from configuration; `None` when no endpoint is set
    pub fn from_config(config: &ModelConfig) -> Option<Self> {
        if config.endpoint.is_empty() {
            return None;
        }
        Some(Self::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_seconds),
        ))
    }

    /// Run one inference and return the predicted scalar. Transport
    /// failures map to `ModelUnavailable`; a reachable endpoint that
    /// rejects or garbles the request maps to `ModelInference` carrying
    /// the submitted columns.
    pub async fn predict(&self, kind: ModelKind, columns: &[&str], row: &[f64]) -> AppResult<f64> {
        let url = format!(
            "{}/predict/{}",
            self.endpoint.trim_end_matches('/'),
            kind.path()
        );
        let column_names: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let request = PredictRequest {
            columns: column_names.clone(),
            rows: vec![row.to_vec()],
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::ModelUnavailable(format!("{}: {}", url, e))
                } else {
                    AppError::ExternalService(format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ModelInference {
                message: format!("API returned {}: {}", status, body),
                columns: column_names,
            });
        }

        let result: PredictResponse = response.json().await.map_err(|e| AppError::ModelInference {
            message: format!("Failed to parse response: {}", e),
            columns: column_names.clone(),
        })?;

        result
            .predictions
            .first()
            .copied()
            .ok_or_else(|| AppError::ModelInference {
                message: "Empty prediction response".to_string(),
                columns: column_names,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_kind_paths() {
        assert_eq!(ModelKind::Daily.path(), "daily");
        assert_eq!(ModelKind::Hourly.path(), "hourly");
    }

    #[test]
    fn test_from_config_requires_endpoint() {
        let unconfigured = ModelConfig {
            endpoint: String::new(),
            api_key: String::new(),
            timeout_seconds: 30,
        };
        assert!(DemandModelClient::from_config(&unconfigured).is_none());

        let configured = ModelConfig {
            endpoint: "http://localhost:8500".to_string(),
            api_key: "secret".to_string(),
            timeout_seconds: 30,
        };
        assert!(DemandModelClient::from_config(&configured).is_some());
    }

    #[test]
    fn test_predict_request_shape() {
        let request = PredictRequest {
            columns: vec!["season".to_string(), "yr".to_string()],
            rows: vec![vec![1.0, 0.0]],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["columns"][0], "season");
        assert_eq!(json["rows"][0][1], 0.0);
    }
}
