// SPDX-License-Identifier: MIT

//! API routes for authenticated users.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Activity, ActivityForm, User};
use crate::services::activity::{load_history, submit_activity};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route(
            "/api/activities",
            get(get_activities).post(create_activity),
        )
}

// ─── User Profile ────────────────────────────────────────────

/// Get current user profile.
async fn get_me(Extension(user): Extension<AuthUser>) -> Json<User> {
    Json(User {
        id: user.user_id,
        email: user.email,
    })
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Serialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<Activity>,
}

/// Get the user's activity history, newest first.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ActivitiesResponse>> {
    tracing::debug!(user_id = %user.user_id, "Fetching activity history");

    let activities = load_history(&state.db, Some(&user.user_id)).await?;

    Ok(Json(ActivitiesResponse { activities }))
}

/// Record a new activity.
///
/// Validates the form, enriches it with a weather snapshot, and persists it.
/// The owner is always the session user; an ID sent by the client is
/// ignored.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<ActivityForm>,
) -> Result<(StatusCode, Json<Activity>)> {
    let stored = submit_activity(&state.db, &state.weather, &form, &user.user_id).await?;

    tracing::info!(
        activity_id = %stored.id,
        activity_type = ?stored.details.activity_type(),
        user_id = %user.user_id,
        "Activity created"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}
