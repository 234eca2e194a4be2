// SPDX-License-Identifier: MIT

//! Session routes.
//!
//! Sign-in happens against the identity provider; this service only checks
//! and tears down sessions. The session travels as a signed JWT, either in
//! the `outing_session` cookie or as a bearer token.

use crate::middleware::auth::{extract_token, verify_session, SESSION_COOKIE};
use crate::models::User;
use crate::AppState;
use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/session", get(get_session))
        .route("/auth/logout", post(logout))
}

/// Session check response.
#[derive(Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Report the current session, if any.
///
/// Never a 401: an anonymous visitor asking "who am I" is a normal request.
async fn get_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Json<SessionResponse> {
    let user = extract_token(&jar, &headers)
        .and_then(|token| verify_session(&token, &state.config.jwt_signing_key))
        .map(|auth| User {
            id: auth.user_id,
            email: auth.email,
        });

    Json(SessionResponse {
        authenticated: user.is_some(),
        user,
    })
}

/// Logout response.
#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Sign out: clear the session cookie.
///
/// The client drops its in-memory activity list on the session-changed
/// event; every later history request is a 401 until a new sign-in.
async fn logout(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Json(LogoutResponse { success: true }))
}
