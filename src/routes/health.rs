use axum::http::StatusCode;
use tracing::{debug, instrument};

#[instrument(level = "debug")]
pub async fn health() -> StatusCode {
    debug!("health");
    StatusCode::OK
}
