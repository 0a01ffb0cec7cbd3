//! HTTP surface: axum routes over the TEA update/view cycle
//!
//! Every handler rebuilds the session from the URL and the hint cookie, feeds
//! one message through [`update`], and turns the resulting action into a
//! redirect or a `Set-Cookie` header.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Form, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use crodash_app::{update, AppState, Message, PageQuery, UpdateAction};
use crodash_core::prelude::*;
use crodash_core::DataStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use url::form_urlencoded;

use crate::pages::ActionsDrilldown;
use crate::render::{self, RenderContext};
use crate::session;

type SharedState = Arc<AppState>;

/// Build the application router
pub fn router(app: SharedState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/navigate", get(navigate))
        .route("/debug/mobile", post(debug_mobile))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(app)
}

/// Bind the configured address
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| Error::bind(addr, e.to_string()))
}

/// Serve until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("CRO Dashboard listening on http://{}", addr);
    }
    axum::serve(listener, router(Arc::new(app)))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::server(e.to_string()))
}

/// Datasets are re-read on every render
async fn load_data(dir: PathBuf) -> DataStore {
    match tokio::task::spawn_blocking(move || DataStore::load(&dir)).await {
        Ok(data) => data,
        Err(e) => {
            warn!("Dataset loading task failed: {}", e);
            DataStore::empty()
        }
    }
}

/// GET /?page=<id>&mobile=<flag>
async fn index(
    State(app): State<SharedState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    let raw = query.unwrap_or_default();
    let url = PageQuery::parse(&raw);
    let mut session = app.session(url, session::read_flags(&headers));
    debug!(
        "Rendering '{}' ({:?})",
        session.navigation.active_page(),
        session.navigation.viewport()
    );

    let show_hint = render::wants_mobile_hint(&app, &session);
    let data = load_data(app.data_dir()).await;
    let html = render::view(&RenderContext {
        app: &app,
        session: &session,
        data: &data,
        drilldown: ActionsDrilldown::parse(&raw),
        show_hint,
        generated_at: Local::now().naive_local(),
    });

    let mut response = Html(html).into_response();
    if show_hint {
        if let Some(UpdateAction::PersistSession(flags)) =
            update(&app, &mut session, Message::DismissMobileHint).action
        {
            session::write_flags(response.headers_mut(), flags);
        }
    }
    response
}

/// GET /navigate?to=<id>&page=<current>&mobile=<flag>
async fn navigate(
    State(app): State<SharedState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Redirect {
    let raw = query.unwrap_or_default();
    let target = form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == "to")
        .map(|(_, value)| value.into_owned());
    let mut session = app.session(PageQuery::parse(&raw), session::read_flags(&headers));

    let synced = target.and_then(|id| match update(&app, &mut session, Message::Navigate(id)).action {
        Some(UpdateAction::SyncUrl(url)) => Some(url),
        _ => None,
    });
    let location = synced.unwrap_or_else(|| session.navigation.canonical_url());
    Redirect::to(&location.href())
}

#[derive(Debug, Deserialize)]
struct DebugMobileForm {
    /// Present (`on`) when the checkbox is ticked
    force_mobile: Option<String>,
    page: Option<String>,
    mobile: Option<String>,
}

/// POST /debug/mobile
///
/// Redirects to the page URL carrying the override, or without it when the
/// box was left unticked.
async fn debug_mobile(
    State(app): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<DebugMobileForm>,
) -> Redirect {
    let url = PageQuery::new(form.page.as_deref(), form.mobile.as_deref());
    let mut session = app.session(url, session::read_flags(&headers));
    let location = match update(
        &app,
        &mut session,
        Message::SetForceMobile(form.force_mobile.is_some()),
    )
    .action
    {
        Some(UpdateAction::SyncUrl(url)) => url,
        _ => session.navigation.canonical_url(),
    };
    Redirect::to(&location.href())
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page introuvable")
}
