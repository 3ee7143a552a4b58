use axum::{
    extract::State,
    response::{Html, Redirect},
};

use super::extract::Submission;
use super::AppState;
use crate::models::NewComment;
use crate::render::{self, BoardMode};
use crate::sanitize::SanitizationPolicy;

// ============================================================
// Index
// ============================================================

pub async fn index() -> Html<String> {
    Html(render::index_page())
}

// ============================================================
// Vulnerable board
// ============================================================

pub async fn show_vulnerable(State(state): State<AppState>) -> Html<String> {
    show(&state, BoardMode::Vulnerable)
}

pub async fn submit_vulnerable(
    State(state): State<AppState>,
    Submission(input): Submission,
) -> Redirect {
    submit(&state, BoardMode::Vulnerable, input)
}

// ============================================================
// Safe board
// ============================================================

pub async fn show_safe(State(state): State<AppState>) -> Html<String> {
    show(&state, BoardMode::Safe)
}

pub async fn submit_safe(
    State(state): State<AppState>,
    Submission(input): Submission,
) -> Redirect {
    submit(&state, BoardMode::Safe, input)
}

// ============================================================
// Shared
// ============================================================

fn show(state: &AppState, mode: BoardMode) -> Html<String> {
    let comments = state.store.all();
    tracing::debug!(board = mode.path(), count = comments.len(), "Rendering board");
    Html(render::board_page(mode, &comments))
}

/// Append a submission to the shared log and send the client back to the
/// board it posted from.
///
/// Both boards store exactly what was submitted unless `sanitize_on_store`
/// is enabled, in which case names posted to the safe board are stripped to
/// text first.
fn submit(state: &AppState, mode: BoardMode, input: NewComment) -> Redirect {
    let author = if mode == BoardMode::Safe && state.config.sanitize_on_store {
        SanitizationPolicy::Strict.clean(input.author())
    } else {
        input.author().to_string()
    };

    let comment = state.store.append(author, input.body());
    tracing::info!(
        comment_id = %comment.id,
        board = mode.path(),
        "Stored comment"
    );

    Redirect::to(mode.path())
}
