use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use maud::Markup;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
    components::{course_card, course_grid},
    course::CourseId,
};

use super::{AppError, AppState};

#[instrument(level = "debug", skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Markup {
    course_grid::render(state.catalog.courses())
}

#[instrument(level = "debug", skip(state))]
pub async fn get(
    Path(id): Path<CourseId>,
    State(state): State<Arc<AppState>>,
) -> Result<Markup, AppError> {
    let Some(course) = state.catalog.get(id) else {
        debug!(%id, "no such course");
        return Err(StatusCode::NOT_FOUND.into());
    };
    Ok(course_grid::item(course, course_card::render))
}
