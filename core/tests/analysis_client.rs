use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use foodharmony_core::{
    application::create_service,
    domain::{
        common::{
            AnalysisServiceConfig, FoodHarmonyConfig,
            entities::app_errors::{ANALYSIS_FALLBACK_MESSAGE, CoreError},
        },
        meal_analysis::{
            entities::{AnalysisRequest, AttemptState, MealImage, MealInput, UserProfile},
            ports::{AnalysisClient, Notifier},
            schema::MALFORMED_ANALYSIS_MESSAGE,
        },
    },
    infrastructure::analysis::{
        FunctionsAnalysisClient,
        functions_client::{SEND_FAILURE_MESSAGE, TIMEOUT_MESSAGE},
    },
};
use serde_json::{Value, json};

const FUNCTION_PATH: &str = "/functions/v1/analyze-meal";
const API_KEY: &str = "publishable-test-key";

#[derive(Clone, Default)]
struct Captured {
    body: Arc<Mutex<Option<Value>>>,
    headers: Arc<Mutex<Option<HeaderMap>>>,
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("ok: {}", message));
    }

    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("error: {}", message));
    }
}

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn capture_and_reply(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    *captured.body.lock().unwrap() = Some(body);
    *captured.headers.lock().unwrap() = Some(headers);

    Json(json!({
        "analysis": {
            "detectedFoods": ["eggs", "milk"],
            "dangerousCombinations": [],
            "medicalConcerns": [],
            "religiousConcerns": [],
            "recommendations": {
                "overallSafety": "safe",
                "itemsToRemove": [],
                "itemsToAdd": [],
                "notes": "Looks fine."
            }
        }
    }))
}

fn client_for(base_url: &str, timeout: Duration) -> FunctionsAnalysisClient {
    FunctionsAnalysisClient::new(
        AnalysisServiceConfig::new(base_url, API_KEY).with_timeout(timeout),
    )
    .unwrap()
}

fn text_request() -> AnalysisRequest {
    AnalysisRequest {
        image_data: None,
        ingredients: Some("eggs, milk".to_string()),
        user_profile: UserProfile::new("celiac disease", "hindu", "construction"),
    }
}

#[tokio::test]
async fn test_request_body_and_headers() {
    let captured = Captured::default();
    let router = Router::new()
        .route(FUNCTION_PATH, post(capture_and_reply))
        .with_state(captured.clone());
    let base_url = spawn_server(router).await;

    let body = client_for(&base_url, Duration::from_secs(5))
        .analyze_meal(text_request())
        .await
        .unwrap();

    assert_eq!(body["analysis"]["detectedFoods"], json!(["eggs", "milk"]));

    let sent = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(
        sent,
        json!({
            "imageData": null,
            "ingredients": "eggs, milk",
            "userProfile": {
                "medicalConditions": "celiac disease",
                "religion": "hindu",
                "workEnvironment": "construction"
            }
        })
    );

    let headers = captured.headers.lock().unwrap().clone().unwrap();
    assert_eq!(headers["apikey"], API_KEY);
    assert_eq!(headers["authorization"], format!("Bearer {}", API_KEY));
}

#[tokio::test]
async fn test_error_status_uses_service_message() {
    let router = Router::new().route(
        FUNCTION_PATH,
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": "Rate limit exceeded" })),
            )
        }),
    );
    let base_url = spawn_server(router).await;

    let result = client_for(&base_url, Duration::from_secs(5))
        .analyze_meal(text_request())
        .await;

    assert_eq!(
        result,
        Err(CoreError::Remote("Rate limit exceeded".to_string()))
    );
}

#[tokio::test]
async fn test_error_status_without_body_falls_back() {
    let router = Router::new().route(
        FUNCTION_PATH,
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = spawn_server(router).await;

    let result = client_for(&base_url, Duration::from_secs(5))
        .analyze_meal(text_request())
        .await;

    assert_eq!(
        result,
        Err(CoreError::Remote(ANALYSIS_FALLBACK_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_non_json_success_body_is_malformed() {
    let router = Router::new().route(FUNCTION_PATH, post(|| async { "<html>oops</html>" }));
    let base_url = spawn_server(router).await;

    let result = client_for(&base_url, Duration::from_secs(5))
        .analyze_meal(text_request())
        .await;

    assert_eq!(
        result,
        Err(CoreError::MalformedResponse(
            MALFORMED_ANALYSIS_MESSAGE.to_string()
        ))
    );
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let router = Router::new().route(
        FUNCTION_PATH,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let base_url = spawn_server(router).await;

    let result = client_for(&base_url, Duration::from_millis(200))
        .analyze_meal(text_request())
        .await;

    assert_eq!(result, Err(CoreError::Remote(TIMEOUT_MESSAGE.to_string())));
}

#[tokio::test]
async fn test_unreachable_service() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client_for(&format!("http://{}", addr), Duration::from_secs(5))
        .analyze_meal(text_request())
        .await;

    assert_eq!(
        result,
        Err(CoreError::Remote(SEND_FAILURE_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_image_submission_end_to_end() {
    let captured = Captured::default();
    let router = Router::new()
        .route(FUNCTION_PATH, post(capture_and_reply))
        .with_state(captured.clone());
    let base_url = spawn_server(router).await;

    let notifier = RecordingNotifier::default();
    let service = create_service(
        FoodHarmonyConfig {
            analysis: AnalysisServiceConfig::new(base_url, API_KEY),
        },
        notifier.clone(),
    )
    .unwrap();

    let mut input = MealInput::new();
    input.set_image(MealImage::from_bytes(
        vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00],
        None,
    ));

    let result = service
        .submit(&input, &UserProfile::default())
        .await
        .unwrap();

    assert_eq!(result.detected_foods, vec!["eggs", "milk"]);
    assert!(matches!(service.state(), AttemptState::Succeeded(_)));

    let sent = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(sent["ingredients"], Value::Null);
    assert!(
        sent["imageData"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,")
    );
    assert_eq!(
        *notifier.messages.lock().unwrap(),
        vec!["ok: Your meal has been analyzed successfully"]
    );
}
