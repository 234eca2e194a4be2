// SPDX-License-Identifier: MIT

use outing_log::config::Config;
use outing_log::db::FirestoreDb;
use outing_log::routes::create_router;
use outing_log::services::WeatherService;
use outing_log::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();
    // No API key: weather lookups are always simulated, never networked.
    let weather = WeatherService::new(None);

    let state = Arc::new(AppState {
        config,
        db,
        weather,
    });

    (create_router(state.clone()), state)
}

/// Create a signed session token for tests.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, email: &str, signing_key: &[u8]) -> String {
    outing_log::middleware::auth::create_jwt(user_id, email, signing_key)
        .expect("test JWT creation")
}
