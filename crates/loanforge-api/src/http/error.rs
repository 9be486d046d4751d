//! Application error type mapping pipeline failures to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use loanforge_types::error::PipelineError;

/// Message returned for every toolchain failure; details stay in the logs.
pub const DEPLOYMENT_FAILED: &str = "Deployment failed";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Pipeline(PipelineError),
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        AppError::Pipeline(e)
    }
}

impl AppError {
    /// Client-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            AppError::Pipeline(PipelineError::Deploy(_)) => DEPLOYMENT_FAILED.to_string(),
            AppError::Pipeline(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Pipeline(ref err) = self;
        tracing::error!(error = %err, "Request failed");

        let body = json!({ "error": self.message() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanforge_types::error::DeployError;
    use loanforge_types::llm::LlmError;

    #[test]
    fn test_deploy_errors_are_generic() {
        let err = AppError::from(PipelineError::Deploy(DeployError::Failed {
            command: "truffle migrate --reset --network development".to_string(),
            status: "exit status: 1".to_string(),
            stdout: String::new(),
            stderr: "Error: connect ECONNREFUSED 127.0.0.1:7545".to_string(),
        }));
        assert_eq!(err.message(), "Deployment failed");

        let err = AppError::from(PipelineError::Deploy(DeployError::TimedOut(300)));
        assert_eq!(err.message(), "Deployment failed");
    }

    #[test]
    fn test_completion_errors_keep_message() {
        let err = AppError::from(PipelineError::Llm(LlmError::AuthenticationFailed));
        assert_eq!(err.message(), "authentication failed");
    }

    #[test]
    fn test_status_is_500() {
        let response = AppError::from(PipelineError::Llm(LlmError::EmptyResponse)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
