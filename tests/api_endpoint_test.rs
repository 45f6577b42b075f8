use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use quick_recipe::adapters::http::router;
use quick_recipe::{RandomSource, RecipeSynthesizer, SeededRandom};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    router(Arc::new(RecipeSynthesizer::new(SeededRandom::new(17))))
}

async fn post_raw(body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate-recipe")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_generate_recipe_success() {
    let (status, body) = post_raw(
        &json!({
            "prompt": "Give me a quick, easy, and delicious recipe for instant noodle upgrade."
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let recipe = &body["recipe"];
    assert_eq!(recipe["difficulty"], "Beginner");
    assert_eq!(recipe["method"], "Boiling");
    assert_eq!(recipe["cookingTime"], "5-8 minutes");
    assert_eq!(recipe["servings"], "4 servings");
    assert_eq!(
        recipe["ingredients"][0],
        "1 packet instant noodles (any flavor)"
    );
    assert!(recipe["tips"].as_array().unwrap().len() <= 3);
    assert!(recipe["title"]
        .as_str()
        .unwrap()
        .ends_with("Instant noodle upgrade"));
}

#[tokio::test]
async fn test_generic_prompt_returns_dietary_info() {
    let (status, body) =
        post_raw(&json!({ "prompt": "A light vegan mushroom dish, about 45 minutes" }).to_string())
            .await;

    assert_eq!(status, StatusCode::OK);
    let recipe = &body["recipe"];
    assert_eq!(recipe["cuisine"], "International");
    assert_eq!(recipe["cookingTime"], "35-45 minutes");
    assert_eq!(recipe["dietaryInfo"], json!(["Vegan", "Healthy"]));
}

#[tokio::test]
async fn test_missing_prompt_is_generic_500() {
    let (status, body) = post_raw(r#"{"query": "pasta"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to generate recipe" }));
}

#[tokio::test]
async fn test_non_string_prompt_is_generic_500() {
    let (status, body) = post_raw(r#"{"prompt": 42}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate recipe");
}

#[tokio::test]
async fn test_malformed_json_is_generic_500() {
    let (status, body) = post_raw("{not json").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate recipe");
}

#[tokio::test]
async fn test_prompt_larger_than_default_body_limit() {
    let prompt = format!("garlic bread {}", "a".repeat(3 * 1024 * 1024));
    let (status, body) = post_raw(&json!({ "prompt": prompt }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"]["method"], "Baking");
    assert_eq!(body["recipe"]["cookingTime"], "10-15 minutes");
}

struct Exploding;

impl RandomSource for Exploding {
    fn pick_index(&self, _len: usize) -> usize {
        panic!("random source failed")
    }
}

#[tokio::test]
async fn test_panic_during_generation_is_generic_500() {
    let app = router(Arc::new(RecipeSynthesizer::new(Exploding)));
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate-recipe")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "prompt": "garlic bread" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Failed to generate recipe" }));
}

#[tokio::test]
async fn test_health_endpoint() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_get_on_generate_is_not_allowed() {
    let request = Request::builder()
        .uri("/api/generate-recipe")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
