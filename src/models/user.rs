//! User model for the session lifetime.

use serde::{Deserialize, Serialize};

/// Authenticated user, as reported by the identity provider.
///
/// The profile is owned by the identity provider; this service only holds it
/// in memory for the duration of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque user ID (also the owner key on activity records)
    pub id: String,
    /// Email address
    pub email: String,
}
