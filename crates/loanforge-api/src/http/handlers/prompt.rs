//! GET /generate-prompt - preview the prompt and the model's raw answer.
//!
//! Nothing is written to disk and the toolchain is not invoked.

use axum::Json;
use axum::extract::State;

use loanforge_types::deploy::PromptPreview;

use crate::http::error::AppError;
use crate::state::AppState;

pub async fn generate_prompt(
    State(state): State<AppState>,
) -> Result<Json<PromptPreview>, AppError> {
    let preview = state.pipeline.preview(&state.loan).await?;
    Ok(Json(preview))
}
