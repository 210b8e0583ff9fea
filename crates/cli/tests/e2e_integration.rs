//! End-to-end integration tests for Quire.
//!
//! These exercise the full pipeline from a config file through the editor and
//! the HTTP gateway to the served edit page.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use quire_config::AppConfig;
use quire_core::{Editable, Role};
use quire_editor::Editor;
use quire_gateway::demo::{self, Article, Submission};
use quire_gateway::{GatewayState, build_router};
use tower::ServiceExt;

const ESTONIAN: &str = r#"
[gateway]
default_role = "editor"

[editor]
max_view_bytes = 65536

[editor.text]
save = "Salvesta"
delete = "Kustuta"
approve = "Kinnitage"
reject = "Keeldu"
slug_placeholder = "Määratakse automaatselt"
"#;

fn translated_config() -> AppConfig {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, ESTONIAN).unwrap();
    AppConfig::load_from(&path).unwrap()
}

async fn get(app: axum::Router, uri: &str, role: Option<&str>) -> (StatusCode, String) {
    let mut req = Request::builder().uri(uri);
    if let Some(role) = role {
        req = req.header("x-quire-role", role);
    }
    let response = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn translated_text_reaches_served_page() {
    let state = Arc::new(GatewayState::new(translated_config()));
    demo::seed(&state.store).await;
    let app = build_router(state);

    let (status, html) = get(app.clone(), "/admin/edit?type=Article&id=1", Some("admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(">Salvesta<"));
    assert!(html.contains(">Kustuta<"));
    assert!(html.contains("Määratakse automaatselt"));

    let (_, html) = get(app, "/admin/edit?type=Submission&id=1&status=pending", None).await;
    assert!(html.contains(">Kinnitage<"));
    assert!(html.contains(">Keeldu<"));
    assert!(!html.contains(">Kustuta<"));
}

#[tokio::test]
async fn served_view_matches_direct_render() {
    let config = translated_config();
    let state = Arc::new(GatewayState::new(config.clone()));
    demo::seed(&state.store).await;
    let app = build_router(state);

    let direct = Article::sample(1)
        .marshal_editor(&Editor::from_config(&config.editor), &Role::from("contributor"))
        .unwrap();

    let (_, html) = get(app, "/admin/edit?type=Article&id=1", Some("contributor")).await;
    assert!(html.contains(&*direct.to_string_lossy()));
    assert!(html.contains(r#"<div style="display:none;">"#));
}

#[tokio::test]
async fn approval_round_trip_through_gateway() {
    let state = Arc::new(GatewayState::new(AppConfig::default()));
    demo::seed(&state.store).await;
    let app = build_router(state.clone());

    let approve = Request::builder()
        .method("POST")
        .uri("/admin/edit/approve")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("type=Submission&id=1"))
        .unwrap();
    let response = app.clone().oneshot(approve).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // a second approval is refused once the item is public
    let again = Request::builder()
        .method("POST")
        .uri("/admin/edit/approve")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("type=Submission&id=1"))
        .unwrap();
    let response = app.clone().oneshot(again).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // approval controls stay capability-gated in the view itself
    let (_, html) = get(app, "/admin/edit?type=Submission&id=1", None).await;
    assert!(html.contains("approve-post"));
    assert!(Submission::sample(1).as_mergeable().is_some());
}
