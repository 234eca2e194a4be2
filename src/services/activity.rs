// SPDX-License-Identifier: MIT

//! Activity submission and history workflow.
//!
//! One end-to-end "record an activity" operation: validate the form, fetch a
//! weather snapshot, persist, return the stored record. The two network
//! calls are sequential on purpose: the snapshot is embedded in the record
//! before it is written.

use crate::error::AppError;
use crate::models::activity::sort_newest_first;
use crate::models::{Activity, ActivityForm};
use crate::services::WeatherService;
use std::future::Future;

/// Storage operations the workflow depends on.
///
/// Implemented by [`crate::db::FirestoreDb`]; tests supply an in-memory
/// store.
pub trait ActivityStore {
    /// All records owned by `user_id`.
    fn list_activities(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Activity>, AppError>> + Send;

    /// Insert one record, returning the stored form.
    fn create_activity(
        &self,
        activity: &Activity,
    ) -> impl Future<Output = Result<Activity, AppError>> + Send;
}

impl ActivityStore for crate::db::FirestoreDb {
    async fn list_activities(&self, user_id: &str) -> Result<Vec<Activity>, AppError> {
        crate::db::FirestoreDb::list_activities(self, user_id).await
    }

    async fn create_activity(&self, activity: &Activity) -> Result<Activity, AppError> {
        crate::db::FirestoreDb::create_activity(self, activity).await
    }
}

/// Record one activity for `user_id`.
///
/// Validation failures abort before any network call. The weather lookup
/// cannot fail (it degrades to simulated data), so the only fallible step
/// after validation is the store insert, and that error propagates: the
/// caller surfaces exactly one failure and nothing is persisted.
pub async fn submit_activity<S: ActivityStore>(
    store: &S,
    weather: &WeatherService,
    form: &ActivityForm,
    user_id: &str,
) -> Result<Activity, AppError> {
    let mut activity = Activity::from_form(form, user_id)?;

    let snapshot = weather
        .fetch(&activity.city, &activity.state, activity.date)
        .await;
    activity.weather = Some(snapshot);

    let stored = store.create_activity(&activity).await?;

    tracing::debug!(
        activity_id = %stored.id,
        user_id,
        date = %stored.date,
        "Activity recorded"
    );

    Ok(stored)
}

/// Load a user's history, newest first.
///
/// No user means no query: an unauthenticated history is empty. Store errors
/// propagate so the caller can show "history unavailable" rather than a
/// silently empty list.
pub async fn load_history<S: ActivityStore>(
    store: &S,
    user_id: Option<&str>,
) -> Result<Vec<Activity>, AppError> {
    let Some(user_id) = user_id else {
        return Ok(Vec::new());
    };

    let mut activities = store.list_activities(user_id).await?;
    // The store orders by date already; re-sort in case a backend returns
    // records in insertion order.
    sort_newest_first(&mut activities);
    Ok(activities)
}
