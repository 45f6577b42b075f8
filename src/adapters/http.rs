use crate::core::synthesizer::RecipeSynthesizer;
use crate::domain::model::{GenerateRequest, GenerateResponse};
use crate::domain::ports::RandomSource;
use crate::utils::error::{generic_failure_response, RecipeError, Result};
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, MatchedPath, State};
use axum::http::Request;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

pub const GENERATE_PATH: &str = "/api/generate-recipe";
pub const HEALTH_PATH: &str = "/api/health";

const PROMPT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn router<R: RandomSource + 'static>(synthesizer: Arc<RecipeSynthesizer<R>>) -> Router {
    Router::new()
        .route(GENERATE_PATH, post(generate_recipe::<R>))
        .route(HEALTH_PATH, get(health))
        .with_state(synthesizer)
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    if matched_path == HEALTH_PATH {
                        tracing::trace_span!("http_request")
                    } else {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            path = %matched_path,
                        )
                    }
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        if span.metadata().map(|m| m.level()) == Some(&tracing::Level::TRACE) {
                            return;
                        }
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        )
}

// The body is decoded by hand so that malformed JSON and a missing or
// non-string prompt all end in the same generic 500 response.
async fn generate_recipe<R: RandomSource + 'static>(
    State(synthesizer): State<Arc<RecipeSynthesizer<R>>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>> {
    let request: GenerateRequest = serde_json::from_slice(&body)
        .map_err(|e| RecipeError::invalid_request(format!("unreadable request body: {}", e)))?;

    let preview: String = request.prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
    tracing::info!("Generating recipe with prompt: {}...", preview);

    let recipe = synthesizer.synthesize(&request.prompt);

    tracing::info!("Generated recipe: {}", recipe.title);
    Ok(Json(GenerateResponse { recipe }))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Recipe generation panicked: {}", detail);
    generic_failure_response()
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
