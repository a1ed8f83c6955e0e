//! Integration tests for the dockapi HTTP surface.
//!
//! The router is driven with `tower::ServiceExt::oneshot` against a spy
//! engine and a spy compose runner that record every call they receive.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use dockapi_common::config::Settings;
use dockapi_compose::{ComposeError, ComposeInvocation, ComposeOutput, ComposeRunner, DockerCompose};
use dockapi_runtime::{ContainerEngine, EngineError, PullProgress, PullStream};
use dockapi_server::{AppState, Dispatcher, create_router};
use futures::stream;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ── Spies ────────────────────────────────────────────────────────────

#[derive(Default)]
struct SpyEngine {
    calls: Mutex<Vec<String>>,
    fail_with: Option<String>,
    pull_events: Mutex<Option<Vec<dockapi_runtime::Result<PullProgress>>>>,
    pull_stream: Mutex<Option<PullStream>>,
}

impl SpyEngine {
    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn pulling(events: Vec<dockapi_runtime::Result<PullProgress>>) -> Self {
        Self {
            pull_events: Mutex::new(Some(events)),
            ..Self::default()
        }
    }

    fn streaming(events: PullStream) -> Self {
        Self {
            pull_stream: Mutex::new(Some(events)),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str, target: &str) -> dockapi_runtime::Result<()> {
        self.calls.lock().unwrap().push(format!("{call} {target}"));
        match &self.fail_with {
            Some(message) => Err(EngineError::Pull {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContainerEngine for SpyEngine {
    async fn restart_container(&self, name: &str) -> dockapi_runtime::Result<()> {
        self.record("restart", name)
    }

    async fn stop_container(&self, name: &str) -> dockapi_runtime::Result<()> {
        self.record("stop", name)
    }

    async fn start_container(&self, name: &str) -> dockapi_runtime::Result<()> {
        self.record("start", name)
    }

    async fn remove_container(&self, name: &str) -> dockapi_runtime::Result<()> {
        self.record("remove", name)
    }

    fn pull_image(&self, reference: &str) -> PullStream {
        self.calls.lock().unwrap().push(format!("pull {reference}"));
        if let Some(events) = self.pull_stream.lock().unwrap().take() {
            return events;
        }
        let events = self.pull_events.lock().unwrap().take().unwrap_or_default();
        Box::pin(stream::iter(events))
    }
}

#[derive(Default)]
struct SpyCompose {
    invocations: Mutex<Vec<Vec<String>>>,
}

impl SpyCompose {
    fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ComposeRunner for SpyCompose {
    async fn run(&self, invocation: &ComposeInvocation) -> dockapi_compose::Result<ComposeOutput> {
        self.invocations.lock().unwrap().push(invocation.args());
        Ok(ComposeOutput::default())
    }
}

// ── Harness ──────────────────────────────────────────────────────────

fn router(settings: Settings, engine: Arc<SpyEngine>, compose: Arc<dyn ComposeRunner>) -> Router {
    let dispatcher = Dispatcher::new(Arc::new(settings), engine, compose);
    create_router(AppState::new(dispatcher))
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_with_auth(uri: &str, auth: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response: Response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn with_token(token: &str) -> Settings {
    Settings {
        auth_token: token.to_string(),
        ..Settings::default()
    }
}

// ── Container ────────────────────────────────────────────────────────

#[tokio::test]
async fn container_restart_succeeds() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(
        Settings::default(),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, body) = send(
        app,
        post("/container", r#"{"operation":"restart","container":"web"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"message":"Operation restart completed successfully on container web"}"#
    );
    assert_eq!(engine.calls(), ["restart web"]);
}

#[tokio::test]
async fn container_restart_forbidden_never_reaches_engine() {
    let engine = Arc::new(SpyEngine::default());
    let settings = Settings {
        allow_restart: false,
        ..Settings::default()
    };
    let app = router(settings, engine.clone(), Arc::new(SpyCompose::default()));

    let (status, body) = send(
        app,
        post("/container", r#"{"operation":"restart","container":"web"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, r#"{"error":"Restart operation not allowed"}"#);
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn container_remove_is_denied_by_default() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(
        Settings::default(),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, body) = send(
        app,
        post("/container", r#"{"operation":"remove","container":"web"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, r#"{"error":"Remove operation not allowed"}"#);
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn container_stop_and_start_flags_are_enforced_before_engine() {
    let cases = [
        (
            "stop",
            Settings {
                allow_stop: false,
                ..Settings::default()
            },
            r#"{"error":"Stop operation not allowed"}"#,
        ),
        (
            "start",
            Settings {
                allow_start: false,
                ..Settings::default()
            },
            r#"{"error":"Start operation not allowed"}"#,
        ),
    ];
    for (operation, settings, expected) in cases {
        let engine = Arc::new(SpyEngine::default());
        let app = router(settings, engine.clone(), Arc::new(SpyCompose::default()));
        let body = format!(r#"{{"operation":"{operation}","container":"web"}}"#);

        let (status, response) = send(app, post("/container", &body)).await;

        assert_eq!(status, StatusCode::FORBIDDEN, "{operation}");
        assert_eq!(response, expected);
        assert!(engine.calls().is_empty(), "{operation}");
    }
}

#[tokio::test]
async fn container_engine_failure_is_internal_with_engine_message() {
    let engine = Arc::new(SpyEngine::failing("No such container: web"));
    let app = router(
        Settings::default(),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, body) = send(
        app,
        post("/container", r#"{"operation":"stop","container":"web"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to stop container: No such container: web"}"#);
}

#[tokio::test]
async fn container_requires_name() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(
        Settings::default(),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, body) = send(app, post("/container", r#"{"operation":"start"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Container name is required"}"#);
}

#[tokio::test]
async fn invalid_body_is_bad_request() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(
        Settings::default(),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, body) = send(app, post("/container", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid request body"}"#);
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn null_container_name_is_reported_as_missing() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(
        Settings::default(),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, body) = send(
        app,
        post("/container", r#"{"operation":"restart","container":null}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Container name is required"}"#);
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn oversized_body_is_rendered_as_invalid_body() {
    let padding = "x".repeat(3 * 1024 * 1024);
    let body = format!(r#"{{"operation":"restart","container":"web","padding":"{padding}"}}"#);
    for (uri, expected_type, expected_body) in [
        (
            "/container",
            "application/json",
            r#"{"error":"Invalid request body"}"#,
        ),
        (
            "/container?format=pretty",
            "text/plain",
            "Error: Invalid request body\n",
        ),
    ] {
        let engine = Arc::new(SpyEngine::default());
        let app = router(
            Settings::default(),
            engine.clone(),
            Arc::new(SpyCompose::default()),
        );

        let response = app.oneshot(post(uri, &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response.headers()[header::CONTENT_TYPE], expected_type);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], expected_body.as_bytes());
        assert!(engine.calls().is_empty());
    }
}

#[tokio::test]
async fn unknown_operation_is_bad_request_on_every_endpoint() {
    let bodies = [
        ("/container", r#"{"operation":"explode","container":"web"}"#),
        ("/image", r#"{"operation":"explode","image":"nginx"}"#),
        ("/compose", r#"{"operation":"explode","service":"web"}"#),
    ];
    for (uri, body) in bodies {
        let engine = Arc::new(SpyEngine::default());
        let compose = Arc::new(SpyCompose::default());
        let app = router(Settings::default(), engine.clone(), compose.clone());

        let (status, response) = send(app, post(uri, body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response, r#"{"error":"Invalid operation"}"#, "{uri}");
        assert!(engine.calls().is_empty());
        assert!(compose.invocations().is_empty());
    }
}

#[tokio::test]
async fn pretty_format_renders_plain_text() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(Settings::default(), engine, Arc::new(SpyCompose::default()));

    let request = post("/container?format=pretty", r#"{"operation":"start","container":"db"}"#);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Operation start completed successfully on container db\n");
}

#[tokio::test]
async fn repeated_format_parameter_uses_first_value() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(Settings::default(), engine, Arc::new(SpyCompose::default()));

    let (status, body) = send(
        app,
        post(
            "/container?format=pretty&format=pretty",
            r#"{"operation":"start","container":"db"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Operation start completed successfully on container db\n");
}

#[tokio::test]
async fn pretty_format_renders_errors() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(Settings::default(), engine, Arc::new(SpyCompose::default()));

    let (status, body) = send(
        app,
        post("/container?format=pretty", r#"{"operation":"remove","container":"db"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, "Error: Remove operation not allowed\n");
}

// ── Authorization ────────────────────────────────────────────────────

#[tokio::test]
async fn open_mode_passes_with_or_without_header() {
    for request in [
        post("/container", r#"{"operation":"start","container":"web"}"#),
        post_with_auth(
            "/container",
            "Bearer anything",
            r#"{"operation":"start","container":"web"}"#,
        ),
    ] {
        let engine = Arc::new(SpyEngine::default());
        let app = router(
            Settings::default(),
            engine.clone(),
            Arc::new(SpyCompose::default()),
        );
        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(engine.calls(), ["start web"]);
    }
}

#[tokio::test]
async fn configured_token_accepts_exact_bearer() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(
        with_token("abc"),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, _) = send(
        app,
        post_with_auth("/container", "Bearer abc", r#"{"operation":"start","container":"web"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(engine.calls(), ["start web"]);
}

#[tokio::test]
async fn configured_token_rejects_wrong_or_missing_credentials() {
    let body = r#"{"operation":"start","container":"web"}"#;
    let cases = [
        (post_with_auth("/container", "Bearer abcd", body), "Invalid authorization token"),
        (post_with_auth("/container", "abc", body), "Invalid authorization token"),
        (post("/container", body), "Missing authorization token"),
    ];
    for (request, message) in cases {
        let engine = Arc::new(SpyEngine::default());
        let app = router(
            with_token("abc"),
            engine.clone(),
            Arc::new(SpyCompose::default()),
        );

        let (status, response) = send(app, request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(response, format!(r#"{{"error":"{message}"}}"#));
        assert!(engine.calls().is_empty());
    }
}

#[tokio::test]
async fn unauthorized_honours_pretty_format() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(with_token("abc"), engine, Arc::new(SpyCompose::default()));

    let (status, body) = send(
        app,
        post("/image?format=pretty", r#"{"operation":"pull","image":"nginx"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Error: Missing authorization token\n");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let engine = Arc::new(SpyEngine::default());
    let app = router(with_token("abc"), engine, Arc::new(SpyCompose::default()));

    let mut request = post("/container", "{}");
    let _ = request.headers_mut().insert("x-request-id", "req-42".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

// ── Image ────────────────────────────────────────────────────────────

#[tokio::test]
async fn image_pull_streams_json_lines() {
    let engine = Arc::new(SpyEngine::pulling(vec![
        Ok(PullProgress::status("Pulling from library/nginx").with_id("latest")),
        Ok(PullProgress::status("Status: Image is up to date for nginx:latest")),
    ]));
    let app = router(
        Settings::default(),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, body) = send(
        app,
        post("/image", r#"{"operation":"pull","image":"nginx"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "{\"status\":\"Pulling from library/nginx\",\"id\":\"latest\"}\n\
         {\"status\":\"Status: Image is up to date for nginx:latest\"}\n"
    );
    assert_eq!(engine.calls(), ["pull nginx"]);
}

#[tokio::test]
async fn image_pull_pretty_streams_status_lines() {
    let engine = Arc::new(SpyEngine::pulling(vec![
        Ok(PullProgress::status("Downloading").with_id("l1").with_progress("[==> ] 2MB/8MB")),
        Ok(PullProgress::status("Pull complete").with_id("l1")),
    ]));
    let app = router(Settings::default(), engine, Arc::new(SpyCompose::default()));

    let (status, body) = send(
        app,
        post("/image?format=pretty", r#"{"operation":"pull","image":"nginx"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Downloading: l1\nProgress: [==> ] 2MB/8MB\nPull complete: l1\n");
}

#[tokio::test]
async fn image_pull_failing_immediately_is_internal() {
    let engine = Arc::new(SpyEngine::pulling(vec![Err(EngineError::InvalidReference {
        reference: String::new(),
    })]));
    let app = router(
        Settings::default(),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, body) = send(app, post("/image", r#"{"operation":"pull"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to pull image: invalid reference format: \"\""}"#);
    assert_eq!(engine.calls(), ["pull "]);
}

#[tokio::test]
async fn image_pull_without_progress_reports_success() {
    let engine = Arc::new(SpyEngine::pulling(Vec::new()));
    let app = router(
        Settings::default(),
        engine.clone(),
        Arc::new(SpyCompose::default()),
    );

    let (status, body) = send(
        app,
        post("/image", r#"{"operation":"pull","image":"nginx"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"message":"Operation pull completed successfully on image nginx"}"#
    );
    assert_eq!(engine.calls(), ["pull nginx"]);
}

/// Sets its flag when the pull stream holding it is dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn dropping_pull_body_releases_engine_stream() {
    let polls = Arc::new(AtomicUsize::new(0));
    let dropped = Arc::new(AtomicBool::new(false));
    let events: PullStream = Box::pin(stream::unfold(
        (DropFlag(Arc::clone(&dropped)), Arc::clone(&polls)),
        |(flag, polls)| async move {
            let n = polls.fetch_add(1, Ordering::SeqCst);
            let event = PullProgress::status("Downloading").with_id(format!("layer{n}"));
            Some((Ok::<_, EngineError>(event), (flag, polls)))
        },
    ));
    let engine = Arc::new(SpyEngine::streaming(events));
    let app = router(Settings::default(), engine, Arc::new(SpyCompose::default()));

    let response = app
        .oneshot(post("/image", r#"{"operation":"pull","image":"nginx"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let mut body = response.into_body();
    let first = body.frame().await.unwrap().unwrap().into_data().unwrap();
    assert_eq!(&first[..], b"{\"status\":\"Downloading\",\"id\":\"layer0\"}\n");
    let polled = polls.load(Ordering::SeqCst);
    assert!(!dropped.load(Ordering::SeqCst));

    drop(body);
    tokio::task::yield_now().await;

    assert!(dropped.load(Ordering::SeqCst));
    assert_eq!(polls.load(Ordering::SeqCst), polled);
}

#[tokio::test]
async fn image_pull_forbidden_never_reaches_engine() {
    let engine = Arc::new(SpyEngine::default());
    let settings = Settings {
        allow_pull: false,
        ..Settings::default()
    };
    let app = router(settings, engine.clone(), Arc::new(SpyCompose::default()));

    let (status, body) = send(
        app,
        post("/image", r#"{"operation":"pull","image":"nginx"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, r#"{"error":"Pull operation not allowed"}"#);
    assert!(engine.calls().is_empty());
}

// ── Compose ──────────────────────────────────────────────────────────

#[tokio::test]
async fn compose_up_with_profile_builds_expected_arguments() {
    let compose = Arc::new(SpyCompose::default());
    let app = router(
        Settings::default(),
        Arc::new(SpyEngine::default()),
        compose.clone(),
    );

    let (status, body) = send(
        app,
        post("/compose", r#"{"operation":"up","service":"web","profile":"dev"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"Operation up completed successfully on service web"}"#);
    assert_eq!(compose.invocations(), [["compose", "--profile", "dev", "up", "web"]]);
}

#[tokio::test]
async fn compose_forbidden_never_runs() {
    let compose = Arc::new(SpyCompose::default());
    let settings = Settings {
        allow_compose: false,
        ..Settings::default()
    };
    let app = router(settings, Arc::new(SpyEngine::default()), compose.clone());

    let (status, body) = send(
        app,
        post("/compose", r#"{"operation":"down","service":"web"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, r#"{"error":"Compose operations not allowed"}"#);
    assert!(compose.invocations().is_empty());
}

#[tokio::test]
async fn compose_requires_service() {
    let compose = Arc::new(SpyCompose::default());
    let app = router(
        Settings::default(),
        Arc::new(SpyEngine::default()),
        compose.clone(),
    );

    let (status, body) = send(app, post("/compose", r#"{"operation":"up"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Service name is required"}"#);
    assert!(compose.invocations().is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn compose_non_zero_exit_is_internal_with_captured_output() {
    let project = tempfile::tempdir().unwrap();
    std::fs::write(
        project.path().join("compose"),
        "echo \"invoked with: $*\"\necho \"service web failed to start\" >&2\nexit 1\n",
    )
    .unwrap();
    let compose: Arc<dyn ComposeRunner> = Arc::new(DockerCompose::new("sh", project.path()));
    let settings = Settings {
        compose_project_path: project.path().to_path_buf(),
        ..Settings::default()
    };
    let app = router(settings, Arc::new(SpyEngine::default()), compose);

    let (status, body) = send(
        app,
        post("/compose", r#"{"operation":"up","service":"web","profile":"dev"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let message = json["error"].as_str().unwrap();
    assert!(
        message.starts_with("Failed to perform operation: docker compose up failed: "),
        "{message}"
    );
    assert!(message.contains("invoked with: --profile dev up web"), "{message}");
    assert!(message.contains("service web failed to start"), "{message}");
}

#[tokio::test]
async fn compose_runner_errors_are_reported_verbatim() {
    struct Unreachable;

    #[async_trait]
    impl ComposeRunner for Unreachable {
        async fn run(
            &self,
            _invocation: &ComposeInvocation,
        ) -> dockapi_compose::Result<ComposeOutput> {
            Err(ComposeError::ProjectDir {
                path: "/srv/missing".into(),
            })
        }
    }

    let app = router(
        Settings::default(),
        Arc::new(SpyEngine::default()),
        Arc::new(Unreachable),
    );
    let (status, body) = send(
        app,
        post("/compose", r#"{"operation":"pull","service":"web"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        r#"{"error":"Failed to perform operation: compose project directory not found: /srv/missing"}"#
    );
}

// ── Routing ──────────────────────────────────────────────────────────

#[tokio::test]
async fn non_post_methods_are_rejected() {
    let app = router(
        Settings::default(),
        Arc::new(SpyEngine::default()),
        Arc::new(SpyCompose::default()),
    );
    let request = Request::builder()
        .method("GET")
        .uri("/container")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
