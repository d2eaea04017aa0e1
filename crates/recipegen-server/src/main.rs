use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{HttpTextGenerator, PgRecipeRepository};
use application::RecipeService;
use config::AppConfig;
use models::ErrorResponse;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub recipe_service: Arc<RecipeService>,
    /// Bearer token required on protected routes; `None` disables auth
    pub api_key: Option<Arc<str>>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Recipegen API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Render a handler panic as the generic 500 error body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let description = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", description);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::unexpected(description)),
    )
        .into_response()
}

/// Build the full router
pub fn app(state: AppState) -> Router {
    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::generate::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🍳 Recipegen API initializing...");

    let config = AppConfig::from_secrets(&secrets);

    if config.api_key.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No RECIPEGEN_API_KEY set - authentication disabled");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| shuttle_runtime::Error::Database(e.to_string()))?;

    tracing::info!("✅ Database migrations completed");

    // Text generation capability, built once and shared read-only
    let generator = HttpTextGenerator::new(&config.generation)
        .map_err(|e| shuttle_runtime::Error::Custom(e.into()))?;

    tracing::info!(
        "🤖 Text generation via {} ({}), max length {}",
        config.generation.model,
        config.generation.endpoint,
        config.generation.max_length
    );

    let recipe_repo = Arc::new(PgRecipeRepository::new(pool));
    let recipe_service = Arc::new(RecipeService::new(
        recipe_repo,
        Arc::new(generator),
        config.generation.max_length,
    ));

    let state = AppState {
        recipe_service,
        api_key: config.api_key.map(Arc::from),
    };

    let router = app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Recipegen API ready");

    Ok(router.into())
}
