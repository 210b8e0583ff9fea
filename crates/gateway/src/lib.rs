//! HTTP admin gateway for Quire.
//!
//! Endpoints:
//!
//! - `GET  /health`              — Liveness and item count
//! - `GET  /admin/edit`          — Edit page for `?type=<name>&id=<id>[&status=pending]`
//! - `POST /admin/edit`          — Save (not implemented, 501)
//! - `POST /admin/edit/delete`   — Delete or reject (not implemented, 501)
//! - `POST /admin/edit/approve`  — Approve a pending, mergeable item
//!
//! The viewer's role is taken from a configurable request header, falling
//! back to the configured default. Saving and deleting belong to a storage
//! backend; this gateway answers them with 501 so the page controls still
//! reach a handler. Built on Axum.

pub mod demo;
pub mod page;
pub mod store;

use axum::extract::DefaultBodyLimit;
use axum::{
    Form, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, Json, Redirect},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info, warn};

use quire_config::{AppConfig, GatewayConfig};
use quire_core::{ApprovalRequest, EditorError, Error, Item, ItemStatus, Role};
use quire_editor::Editor;

pub use store::{Content, ContentEntry, ContentStore};

/// Shared application state for the gateway.
pub struct GatewayState {
    pub config: AppConfig,
    pub editor: Editor,
    pub store: ContentStore,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

impl GatewayState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            editor: Editor::from_config(&config.editor),
            config,
            store: ContentStore::new(),
            start_time: chrono::Utc::now(),
        }
    }
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(page::EDIT_ACTION, get(edit_handler).post(save_handler))
        .route("/admin/edit/delete", post(delete_handler))
        .route("/admin/edit/approve", post(approve_handler))
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1 MB body limit
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server, seeded with the demo content.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let state = Arc::new(GatewayState::new(config));
    demo::seed(&state.store).await;

    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The already-resolved role of the viewer.
fn resolve_role(config: &GatewayConfig, headers: &HeaderMap) -> Role {
    headers
        .get(config.role_header.as_str())
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(Role::from)
        .unwrap_or_else(|| Role::from(config.default_role.as_str()))
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_secs: i64,
    items: usize,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: (chrono::Utc::now() - state.start_time).num_seconds(),
        items: state.store.len().await,
    })
}

#[derive(Deserialize)]
struct EditQuery {
    #[serde(rename = "type")]
    content_type: String,
    /// Absent for a new, unsaved item.
    id: Option<i64>,
    status: Option<String>,
}

async fn edit_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<EditQuery>,
) -> Result<Html<String>, StatusCode> {
    let role = resolve_role(&state.config.gateway, &headers);
    let status = ItemStatus::from_query(query.status.as_deref());

    let (id, content) = match query.id {
        Some(id) => {
            let entry = state
                .store
                .get(&query.content_type, id)
                .await
                .ok_or(StatusCode::NOT_FOUND)?;
            // pending and public items live in separate buckets
            if entry.status != status {
                warn!(
                    content_type = %query.content_type,
                    id,
                    requested = ?status,
                    actual = ?entry.status,
                    "Edit requested in the wrong status bucket"
                );
                return Err(StatusCode::NOT_FOUND);
            }
            (id, entry.content)
        }
        None => {
            let content = demo::blank(&query.content_type).ok_or(StatusCode::NOT_FOUND)?;
            (Item::UNSAVED_ID, content)
        }
    };

    let view = content.marshal_editor(&state.editor, &role).map_err(|e| {
        error!(
            error = %e,
            content_type = %query.content_type,
            id,
            "Failed to build edit view"
        );
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    info!(
        content_type = %query.content_type,
        id,
        role = %role,
        bytes = view.len(),
        "Edit view rendered"
    );

    Ok(Html(page::edit_page(&query.content_type, id, &view)))
}

/// Forward an approval to the content's merge capability.
fn approve_entry(entry: &ContentEntry, request: &ApprovalRequest) -> quire_core::Result<()> {
    let mergeable = entry
        .content
        .as_mergeable()
        .ok_or_else(|| EditorError::NotMergeable(request.content_type.clone()))?;
    mergeable.approve(request)
}

async fn approve_handler(
    State(state): State<SharedState>,
    Form(form): Form<BTreeMap<String, String>>,
) -> Result<Redirect, StatusCode> {
    let content_type = form.get("type").cloned().ok_or(StatusCode::BAD_REQUEST)?;
    let id: i64 = form
        .get("id")
        .and_then(|v| v.parse().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;

    let entry = state
        .store
        .get(&content_type, id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    if entry.status != ItemStatus::Pending {
        warn!(content_type = %content_type, id, "Approval requested for non-pending item");
        return Err(StatusCode::CONFLICT);
    }

    let request = ApprovalRequest {
        content_type: content_type.clone(),
        id,
        form,
    };
    match approve_entry(&entry, &request) {
        Ok(()) => {}
        Err(e @ Error::Editor(EditorError::NotMergeable(_))) => {
            warn!(error = %e, id, "Approval rejected");
            return Err(StatusCode::BAD_REQUEST);
        }
        Err(e) => {
            error!(error = %e, content_type = %content_type, id, "Approval failed");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    state
        .store
        .set_status(&content_type, id, ItemStatus::Public)
        .await;
    info!(content_type = %content_type, id, "Item approved");

    Ok(Redirect::to(&page::edit_url(&content_type, id, ItemStatus::Public)))
}

async fn save_handler(Form(form): Form<BTreeMap<String, String>>) -> StatusCode {
    warn!(
        content_type = form.get("type").map(String::as_str).unwrap_or_default(),
        id = form.get("id").map(String::as_str).unwrap_or_default(),
        "Save requested but no storage backend is configured"
    );
    StatusCode::NOT_IMPLEMENTED
}

async fn delete_handler(
    Query(params): Query<BTreeMap<String, String>>,
    Form(form): Form<BTreeMap<String, String>>,
) -> StatusCode {
    warn!(
        content_type = form.get("type").map(String::as_str).unwrap_or_default(),
        id = form.get("id").map(String::as_str).unwrap_or_default(),
        reject = params.get("reject").is_some_and(|v| v == "true"),
        "Delete requested but no storage backend is configured"
    );
    StatusCode::NOT_IMPLEMENTED
}
