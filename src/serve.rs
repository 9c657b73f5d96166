//! Line protocol for the driver binary: one JSON request in, one JSON response out.

use crate::context::DetectionContext;
use crate::error::PredictError;
use crate::prediction::Label;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    pub email_text: String,
    pub sender_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Prediction {
        request_id: Uuid,
        prediction: Label,
    },
    Error {
        request_id: Uuid,
        error: &'static str,
        reason: String,
    },
}

impl Response {
    fn error(request_id: Uuid, error: &'static str, reason: impl Into<String>) -> Self {
        Response::Error {
            request_id,
            error,
            reason: reason.into(),
        }
    }
}

/// Boundary validation happens here; the core only ever sees two strings.
pub fn handle_line(ctx: &DetectionContext, line: &str) -> Response {
    let request_id = Uuid::new_v4();
    let request: EmailRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(%request_id, error = %e, "rejected malformed request");
            return Response::error(request_id, "invalid request", e.to_string());
        }
    };

    match ctx.classify(&request.email_text, &request.sender_address) {
        Ok(prediction) => {
            tracing::info!(%request_id, %prediction, "classified");
            Response::Prediction {
                request_id,
                prediction,
            }
        }
        Err(PredictError::Unavailable { reason }) => {
            tracing::warn!(%request_id, "prediction requested while model not loaded");
            Response::error(request_id, "Model not loaded", reason)
        }
        Err(e @ PredictError::Integrity(_)) => {
            Response::error(request_id, "integrity fault", e.to_string())
        }
        Err(e @ PredictError::Inference(_)) => {
            tracing::error!(%request_id, error = %e, "inference failed");
            Response::error(request_id, "inference failed", e.to_string())
        }
    }
}
