//! Generate Routes - Batch recipe generation
//!
//! POST and PUT behave the same; only the status code and message differ.
//! Neither updates existing recipes.

use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Json, Router};

use recipegen::{DomainError, PromptBatch};

use crate::models::{ErrorResponse, GenerateTextRequest, GenerateTextResponse, RecipeSummary};
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// HTTP verb a batch arrived with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchMethod {
    Post,
    Put,
}

impl BatchMethod {
    fn status(self) -> StatusCode {
        match self {
            BatchMethod::Post => StatusCode::CREATED,
            BatchMethod::Put => StatusCode::OK,
        }
    }

    fn message(self) -> &'static str {
        match self {
            BatchMethod::Post => "Recipes created successfully.",
            BatchMethod::Put => "Recipes updated successfully.",
        }
    }
}

fn error_response(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidPrompt(e) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string())))
        }
        DomainError::Generation(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(err.to_string())),
        ),
        _ => {
            tracing::error!("Recipe batch failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::unexpected(err)),
            )
        }
    }
}

async fn process_batch(
    state: &AppState,
    method: BatchMethod,
    body: &[u8],
) -> Result<(StatusCode, Json<GenerateTextResponse>), ApiError> {
    let batch = PromptBatch::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected {:?} batch: {}", method, e);
        error_response(e.into())
    })?;

    tracing::info!("{:?} batch with {} prompt pairs", method, batch.len());

    let recipes = state
        .recipe_service
        .generate_batch(batch)
        .await
        .map_err(error_response)?;

    Ok((
        method.status(),
        Json(GenerateTextResponse {
            message: method.message().to_string(),
            response: recipes.into_iter().map(RecipeSummary::from).collect(),
        }),
    ))
}

/// Generate recipes for a batch of prompt pairs
#[utoipa::path(
    post,
    path = "/generate-text/",
    request_body(
        content = GenerateTextRequest,
        description = "`{\"prompts\": [...]}` or a bare array of prompt pairs"
    ),
    responses(
        (status = 201, description = "Recipes created", body = GenerateTextResponse),
        (status = 400, description = "Invalid batch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 500, description = "Generation or unexpected error", body = ErrorResponse)
    ),
    tag = "Recipe"
)]
pub async fn create_recipes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<GenerateTextResponse>), ApiError> {
    process_batch(&state, BatchMethod::Post, &body).await
}

/// Generate recipes for a batch of prompt pairs (always creates new records)
#[utoipa::path(
    put,
    path = "/generate-text/",
    request_body(
        content = GenerateTextRequest,
        description = "`{\"prompts\": [...]}` or a bare array of prompt pairs"
    ),
    responses(
        (status = 200, description = "Recipes created", body = GenerateTextResponse),
        (status = 400, description = "Invalid batch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 500, description = "Generation or unexpected error", body = ErrorResponse)
    ),
    tag = "Recipe"
)]
pub async fn update_recipes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<GenerateTextResponse>), ApiError> {
    process_batch(&state, BatchMethod::Put, &body).await
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-text/", post(create_recipes).put(update_recipes))
        .route("/generate-text", post(create_recipes).put(update_recipes))
}
