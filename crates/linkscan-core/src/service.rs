//! Prediction service: validate → normalize → extract → predict → respond.
//!
//! Every per-request failure is converted into a structured error response;
//! nothing here can take the serving process down. The only fatal error in
//! the system is the artifact load at startup, which happens before a
//! `Service` exists.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::features::FeatureVector;
use crate::labels::Label;
use crate::model::{PredictError, Predictor};
use crate::normalize::normalize_url;

/// Successful classification result.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub input_url: String,
    pub prediction: String,
    pub status: &'static str,
}

/// Error payload for any failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness probe payload; independent of the classification pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Stateless health check.
pub fn health() -> HealthResponse {
    HealthResponse { status: "healthy" }
}

/// Per-request failure taxonomy. All variants are recoverable: the request
/// gets an error response and the process keeps serving.
#[derive(Debug)]
pub enum ServiceError {
    /// Missing or invalid payload; the caller sent something unusable.
    BadInput(&'static str),
    /// The predictor failed during inference.
    Prediction(PredictError),
    /// The predictor returned an index outside the label table — a
    /// model/label-table mismatch an operator needs to know about.
    InvalidResult { index: usize },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::BadInput(msg) => f.write_str(msg),
            ServiceError::Prediction(e) => write!(f, "Prediction failed: {e}"),
            ServiceError::InvalidResult { .. } => f.write_str("Invalid prediction result"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Prediction(e) => Some(e),
            ServiceError::BadInput(_) | ServiceError::InvalidResult { .. } => None,
        }
    }
}

impl ServiceError {
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

/// The request pipeline around a loaded predictor. Cheap to clone via the
/// inner `Arc`; shared read-only across all concurrent requests.
pub struct Service {
    predictor: Arc<dyn Predictor + Send + Sync>,
}

impl Service {
    pub fn new(predictor: Arc<dyn Predictor + Send + Sync>) -> Self {
        Self { predictor }
    }

    /// Full pipeline from a raw JSON payload (the inbound contract:
    /// `{"url": <string>}`).
    pub fn classify_payload(&self, payload: &serde_json::Value) -> Result<ClassifyResponse, ServiceError> {
        if payload.is_null() {
            return Err(ServiceError::BadInput("No input data provided"));
        }
        let url = payload
            .get("url")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or(ServiceError::BadInput("Invalid or missing 'url' field"))?;
        self.classify_url(url)
    }

    /// Pipeline steps 2–5 for an already-validated URL string.
    pub fn classify_url(&self, raw: &str) -> Result<ClassifyResponse, ServiceError> {
        let url = normalize_url(raw);
        let features = FeatureVector::from_url(&url);
        let index = self
            .predictor
            .predict(&features)
            .map_err(ServiceError::Prediction)?;
        let label = Label::from_index(index).ok_or_else(|| {
            tracing::error!(index, "classifier returned an out-of-range label index");
            ServiceError::InvalidResult { index }
        })?;
        tracing::debug!(url = %url, label = %label, "classified");
        Ok(ClassifyResponse {
            input_url: url,
            prediction: label.as_str().to_string(),
            status: "success",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Stub predictor returning a fixed index or error.
    struct Fixed(Result<usize, ()>);

    impl Predictor for Fixed {
        fn predict(&self, _features: &FeatureVector) -> Result<usize, PredictError> {
            self.0.map_err(|_| PredictError::EmptyForest)
        }
    }

    fn service(result: Result<usize, ()>) -> Service {
        Service::new(Arc::new(Fixed(result)))
    }

    #[test]
    fn classify_normalizes_and_labels() {
        let resp = service(Ok(0))
            .classify_payload(&json!({"url": "example.com"}))
            .unwrap();
        assert_eq!(resp.input_url, "http://example.com");
        assert_eq!(resp.prediction, "Safe");
        assert_eq!(resp.status, "success");
    }

    #[test]
    fn null_payload_is_bad_input() {
        let err = service(Ok(0))
            .classify_payload(&serde_json::Value::Null)
            .unwrap_err();
        assert_eq!(err.to_string(), "No input data provided");
    }

    #[test]
    fn missing_url_field_is_bad_input() {
        let err = service(Ok(0)).classify_payload(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid or missing 'url' field");
    }

    #[test]
    fn non_string_url_is_bad_input() {
        let err = service(Ok(0))
            .classify_payload(&json!({"url": 42}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid or missing 'url' field");
        let err = service(Ok(0))
            .classify_payload(&json!({"url": ""}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid or missing 'url' field");
    }

    #[test]
    fn predictor_failure_is_prediction_error() {
        let err = service(Err(()))
            .classify_payload(&json!({"url": "example.com"}))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Prediction(_)));
        assert!(err.to_string().starts_with("Prediction failed:"));
    }

    #[test]
    fn out_of_range_index_is_invalid_result() {
        let err = service(Ok(99))
            .classify_payload(&json!({"url": "example.com"}))
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidResult { index: 99 }));
        assert_eq!(err.to_string(), "Invalid prediction result");
    }

    #[test]
    fn error_response_serialization() {
        let err = ServiceError::BadInput("No input data provided");
        let json = serde_json::to_string(&err.to_error_response()).unwrap();
        assert_eq!(json, r#"{"error":"No input data provided"}"#);
    }

    #[test]
    fn health_is_stateless_and_fixed() {
        let json = serde_json::to_string(&health()).unwrap();
        assert_eq!(json, r#"{"status":"healthy"}"#);
    }
}
