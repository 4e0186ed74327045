use axum::extract::State;
use maud::{html, Markup};
use std::sync::Arc;
use tracing::instrument;

use crate::components::{self, course_grid};

use super::AppState;

#[instrument(level = "debug", skip(state))]
pub async fn root(State(state): State<Arc<AppState>>) -> Markup {
    components::base(html! {
        div class="flex flex-col gap-2 p-2 dark:text-white" {
            h1 class="text-2xl" { "courses" }
            (course_grid::render(state.catalog.courses()))
        }
    })
}
