use std::sync::Arc;

use axum::{http::Request, routing::get, Router};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::debug_span;

use crate::catalog::Catalog;

use crate::common::AppError;

mod courses;
mod health;
mod root;

pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

pub fn make_app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest_service("/assets", ServeDir::new("assets"))
        // `GET /` goes to `root`
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/courses", get(courses::list))
        .route("/courses/:id", get(courses::get))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    debug_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(DefaultOnResponse::new().latency_unit(LatencyUnit::Micros)),
        )
}
