//! POST /auto-deploy - generate, write, compile, and migrate a contract.
//!
//! The request body is ignored; the loan comes from app state. A run that
//! succeeds but prints no address still answers 200, with
//! `"status": "unconfirmed"` and the zero address.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};

use crate::http::error::AppError;
use crate::state::AppState;

/// Response header carrying the deploy run id, for matching against logs.
pub const RUN_ID_HEADER: &str = "x-run-id";

pub async fn auto_deploy(State(state): State<AppState>) -> Result<Response, AppError> {
    let report = state.pipeline.deploy(&state.loan).await?;

    let mut response = Json(report.outcome).into_response();
    if let Ok(value) = HeaderValue::from_str(&report.run_id.to_string()) {
        response.headers_mut().insert(RUN_ID_HEADER, value);
    }
    Ok(response)
}
