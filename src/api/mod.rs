mod extract;
mod handlers;
mod middleware;

pub use extract::{Submission, SubmissionRejection};
pub use middleware::{SecurityHeaderPolicy, DEFAULT_CONTENT_SECURITY_POLICY};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{BoardConfig, CspScope};
use crate::store::CommentStore;

/// State shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: CommentStore,
    pub config: BoardConfig,
}

pub fn create_router(store: CommentStore) -> Router {
    create_router_with_config(store, BoardConfig::default())
}

pub fn create_router_with_config(store: CommentStore, config: BoardConfig) -> Router {
    let headers = SecurityHeaderPolicy::default();
    let scope = config.csp_scope;

    let index = Router::new().route("/", get(handlers::index));

    let vulnerable = Router::new().route(
        "/vulnerable",
        get(handlers::show_vulnerable).post(handlers::submit_vulnerable),
    );

    let safe = Router::new().route(
        "/safe",
        get(handlers::show_safe).post(handlers::submit_safe),
    );
    let safe = match scope {
        CspScope::SafeOnly => safe.layer(headers.layer()),
        CspScope::Global | CspScope::Off => safe,
    };

    let app = Router::new().merge(index).merge(vulnerable).merge(safe);
    let app = match scope {
        CspScope::Global => app.layer(headers.layer()),
        CspScope::SafeOnly | CspScope::Off => app,
    };

    app.layer(TraceLayer::new_for_http())
        .with_state(AppState { store, config })
}
