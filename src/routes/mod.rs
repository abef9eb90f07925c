use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use testedge_contact::Relay;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::template::{NotFoundTemplate, Template};

mod about;
mod contact;
mod health;
mod index;
mod qa_audit;

/// Icon, title and blurb rendered by `partials/card.html`.
pub struct Card {
    pub icon: &'static str,
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: Arc<dyn Relay>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_status(axum::http::StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/qa-audit", get(qa_audit::page))
        .route("/contact", get(contact::page).post(contact::action))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}

/// Router with the response middleware stack used in production.
pub fn app(app_state: AppState) -> Router {
    router(app_state)
        // no-cache for HTML, long-lived cache for static files
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
