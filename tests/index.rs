use std::sync::Arc;

use axum::http::{StatusCode, header};
use tower::ServiceExt;

mod helpers;
use helpers::{RecordingTransport, body_string, create_app, get_request};

#[tokio::test]
async fn test_index_renders_every_section() {
    let app = create_app(Arc::new(RecordingTransport::default()));

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    for id in ["id=\"home\"", "id=\"projects\"", "id=\"skills\"", "id=\"contact\""] {
        assert!(body.contains(id), "missing section {id}");
    }
    assert!(body.contains("<form class=\"contact-form\" id=\"contact-form\">"));
    assert!(!body.contains("action=\"/api/mail\""));
    assert!(body.contains("<h3 class=\"project-title\">ICS Next Build Corp</h3>"));
    assert!(body.contains("<span class=\"tech-name\">Figma</span>"));
    assert!(body.contains("<span class=\"tech-name\">Python</span>"));
}

#[tokio::test]
async fn test_index_selects_project() {
    let app = create_app(Arc::new(RecordingTransport::default()));

    let response = app.oneshot(get_request("/?project=1")).await.unwrap();
    let body = body_string(response).await;

    assert!(body.contains("<h3 class=\"project-title\">St. Gabrielle HRS</h3>"));
    assert!(body.contains("Wireframe Design"));
}

#[tokio::test]
async fn test_index_unknown_project_falls_back_to_first() {
    let app = create_app(Arc::new(RecordingTransport::default()));

    let response = app.oneshot(get_request("/?project=99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<h3 class=\"project-title\">ICS Next Build Corp</h3>"));
}

#[tokio::test]
async fn test_index_filters_skills_by_category() {
    let app = create_app(Arc::new(RecordingTransport::default()));

    let response = app
        .oneshot(get_request("/?category=backend"))
        .await
        .unwrap();
    let body = body_string(response).await;

    assert!(body.contains("<span class=\"tech-name\">Python</span>"));
    assert!(!body.contains("<span class=\"tech-name\">Figma</span>"));
    assert!(!body.contains("<span class=\"tech-name\">React</span>"));
    assert!(body.contains("Performance Optimization"));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found() {
    let app = create_app(Arc::new(RecordingTransport::default()));

    let response = app.oneshot(get_request("/missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let app = create_app(Arc::new(RecordingTransport::default()));

    let response = app
        .clone()
        .oneshot(get_request("/static/js/site.js"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("javascript")
    );

    let script = body_string(response).await;
    let show_toast = script
        .split("function showToast")
        .nth(1)
        .and_then(|rest| rest.split("function ").next())
        .unwrap();
    assert!(show_toast.contains("clearTimeout(hideTimer)"));
    assert!(show_toast.contains("clearTimeout(graceTimer)"));

    let response = app
        .oneshot(get_request("/static/js/missing.js"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = create_app(Arc::new(RecordingTransport::default()));

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "{\"status\":\"ok\"}");
}
