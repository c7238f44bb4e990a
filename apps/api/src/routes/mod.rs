pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::careers::handlers as careers;
use crate::errors::AppError;
use crate::playlist::handlers as playlist;
use crate::settings::handlers as settings;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Playlist API
        .route("/api/v1/playlist", post(playlist::handle_build_playlist))
        // Career lookup
        .route("/api/v1/careers", get(careers::handle_list_careers))
        .route(
            "/api/v1/careers/suggestions",
            get(careers::handle_suggestions),
        )
        // Remembered inputs and user settings
        .route("/api/v1/state", get(settings::handle_last_submission))
        .route(
            "/api/v1/settings",
            get(settings::handle_get_settings)
                .put(settings::handle_save_settings)
                .delete(settings::handle_clear_settings),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::Config;
    use crate::playlist::handlers::OFFLINE_NOTICE;
    use crate::playlist::orchestrator::FetchOrchestrator;
    use crate::settings::store::MemoryStateStore;

    fn test_state(upstream_endpoints: Vec<String>) -> AppState {
        AppState {
            config: Config {
                upstream_endpoints,
                endpoint_timeout: None,
                redis_url: None,
                port: 0,
                rust_log: "debug".to_string(),
            },
            orchestrator: FetchOrchestrator::new(Some(std::time::Duration::from_secs(5))).unwrap(),
            store: Arc::new(MemoryStateStore::new()),
        }
    }

    async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        router.oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(build_router(test_state(vec![])), Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_blank_career_is_a_validation_error() {
        let response = send(
            build_router(test_state(vec![])),
            Method::POST,
            "/api/v1/playlist",
            Some(json!({"career": "   ", "known_skills": "Python"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_offline_build_reports_fallback_and_remembers_inputs() {
        let state = test_state(vec![]);
        let router = build_router(state.clone());

        let response = send(
            router.clone(),
            Method::POST,
            "/api/v1/playlist",
            Some(json!({"career": "devops", "known_skills": "Docker, git"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["was_fallback"], true);
        assert_eq!(body["notice"], OFFLINE_NOTICE);
        assert_eq!(body["source"], Value::Null);
        assert_eq!(body["stats"]["total_skills"], 5);
        assert_eq!(body["stats"]["skills_to_learn"], 4);
        assert_eq!(body["stats"]["total_videos"], 10);
        assert_eq!(body["profile"]["skills"][0]["skill"], "Linux");

        let response = send(router, Method::GET, "/api/v1/state", None).await;
        let body = json_body(response).await;
        assert_eq!(body["last_career"], "devops");
        assert_eq!(body["last_skills"], "Docker, git");
        assert!(body["last_update"].is_i64());
    }

    #[tokio::test]
    async fn test_live_build_uses_backend_data() {
        let backend = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "career": "Web Developer",
                "skills": ["React", "Git"],
                "skill_gap": ["Git"],
                "playlist": {"Git": [{"title": "Git in 100s", "url": "https://youtu.be/git"}]},
                "books": {}
            })))
            .expect(1)
            .mount(&backend)
            .await;

        let router = build_router(test_state(vec![backend.uri()]));
        let response = send(
            router,
            Method::POST,
            "/api/v1/playlist",
            Some(json!({"career": "Web Developer", "known_skills": ["React"]})),
        )
        .await;

        let body = json_body(response).await;
        assert_eq!(body["was_fallback"], false);
        assert_eq!(body["notice"], Value::Null);
        assert_eq!(body["source"], backend.uri());
        assert_eq!(body["stats"]["total_videos"], 1);
        assert_eq!(body["stats"]["skills_to_learn"], 1);
    }

    #[tokio::test]
    async fn test_backend_override_is_tried_first() {
        let preferred = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "career": "Chef",
                "skills_to_learn": [{"skill": "Knife Skills"}]
            })))
            .expect(1)
            .mount(&preferred)
            .await;

        let configured = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&configured)
            .await;

        let router = build_router(test_state(vec![configured.uri()]));
        let response = send(
            router.clone(),
            Method::PUT,
            "/api/v1/settings",
            Some(json!({"youtube": "  ", "backend": preferred.uri()})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["youtube_configured"], false);

        let response = send(
            router,
            Method::POST,
            "/api/v1/playlist",
            Some(json!({"career": "Chef"})),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["source"], preferred.uri());
        assert_eq!(body["profile"]["skills"][0]["skill"], "Knife Skills");
    }

    #[tokio::test]
    async fn test_settings_round_trip_and_clear() {
        let router = build_router(test_state(vec![]));

        let response = send(
            router.clone(),
            Method::PUT,
            "/api/v1/settings",
            Some(json!({"youtube": "yt-key", "knowledgeGraph": "kg-key"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(send(router.clone(), Method::GET, "/api/v1/settings", None).await).await;
        assert_eq!(body["youtube_configured"], true);
        assert_eq!(body["knowledge_graph_configured"], true);
        assert_eq!(body["books_configured"], false);

        let response = send(router.clone(), Method::DELETE, "/api/v1/settings", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = json_body(send(router, Method::GET, "/api/v1/settings", None).await).await;
        assert_eq!(body["youtube_configured"], false);
    }

    #[tokio::test]
    async fn test_invalid_backend_override_is_rejected() {
        let response = send(
            build_router(test_state(vec![])),
            Method::PUT,
            "/api/v1/settings",
            Some(json!({"backend": "localhost:8080"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_career_listing_and_suggestions() {
        let router = build_router(test_state(vec![]));

        let body = json_body(send(router.clone(), Method::GET, "/api/v1/careers", None).await).await;
        let careers = body["available_careers"].as_array().unwrap();
        assert_eq!(body["total_careers"].as_u64().unwrap() as usize, careers.len());
        assert_eq!(body["career_aliases"]["devops"], "devops engineer");

        let body = json_body(
            send(router, Method::GET, "/api/v1/careers/suggestions?q=eng", None).await,
        )
        .await;
        assert_eq!(
            body["suggestions"],
            json!(["DevOps Engineer", "Machine Learning Engineer"])
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = send(build_router(test_state(vec![])), Method::GET, "/nope", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }
}
