// SPDX-License-Identifier: MIT

//! Activity model for storage and API.
//!
//! An [`Activity`] is one logged outing: common fields (date, location,
//! owner) plus a tagged union of type-specific metrics. Records are written
//! exactly once; the optional weather snapshot is attached at creation and
//! never refreshed.

use crate::models::WeatherData;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three supported activity kinds.
///
/// The wire spelling ("Mountain Biking" with a space) matches what the
/// store already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Golf,
    Surfing,
    #[serde(rename = "Mountain Biking")]
    MountainBiking,
}

/// Type-specific metrics, discriminated by the `type` field.
///
/// Legacy records written by the old client used lowercase field names
/// (`coursename`, `beachname`, `trailsystem`); those are accepted on
/// deserialization only. Everything we write uses the canonical camelCase
/// spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityDetails {
    Golf {
        #[serde(rename = "courseName", alias = "coursename")]
        course_name: String,
        score: i64,
    },
    Surfing {
        /// Session length in hours
        duration: f64,
        #[serde(rename = "beachName", alias = "beachname")]
        beach_name: String,
    },
    #[serde(rename = "Mountain Biking")]
    MountainBiking {
        /// Ride length in hours
        duration: f64,
        /// Distance in miles
        distance: f64,
        #[serde(rename = "trailSystem", alias = "trailsystem")]
        trail_system: String,
    },
}

impl ActivityDetails {
    /// The discriminator for these metrics.
    pub fn activity_type(&self) -> ActivityType {
        match self {
            ActivityDetails::Golf { .. } => ActivityType::Golf,
            ActivityDetails::Surfing { .. } => ActivityType::Surfing,
            ActivityDetails::MountainBiking { .. } => ActivityType::MountainBiking,
        }
    }
}

/// Stored activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Record ID (UUID, also used as document ID). Assigned before
    /// persistence and immutable thereafter.
    pub id: String,
    /// Calendar date of the outing
    pub date: NaiveDate,
    /// City (free text)
    pub city: String,
    /// State (free text)
    pub state: String,
    /// Owner; always the authenticated user
    pub user_id: String,
    /// Server-assigned creation timestamp (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Weather snapshot attached at creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherData>,
    /// Type discriminator plus variant metrics
    #[serde(flatten)]
    pub details: ActivityDetails,
}

/// Raw form state for a new activity, exactly as the client form holds it.
///
/// All fields are strings; numeric fields are parsed during validation so
/// that bad input is rejected instead of being coerced to NaN.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityForm {
    /// Common fields default to empty when absent so a missing key is a
    /// validation error, not a deserialization failure.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(rename = "type")]
    pub activity_type: Option<ActivityType>,
    // Golf
    #[serde(rename = "courseName", default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
    // Surfing / Mountain Biking
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(rename = "beachName", default)]
    pub beach_name: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(rename = "trailSystem", default)]
    pub trail_system: Option<String>,
}

/// Form validation failure, named after the offending field.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {0} must be a number")]
    InvalidNumber(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl From<ValidationError> for crate::error::AppError {
    fn from(err: ValidationError) -> Self {
        crate::error::AppError::BadRequest(err.to_string())
    }
}

/// Reject blank text input for a required field.
fn required_str(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Pull a required text field out of the form, rejecting blank input.
fn required_text(
    value: &Option<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value.as_deref() {
        Some(v) => required_str(v, field),
        None => Err(ValidationError::MissingField(field)),
    }
}

/// Parse a required numeric field. Non-numeric or non-finite input is a
/// validation error, never a stored sentinel.
fn required_number(
    value: &Option<String>,
    field: &'static str,
) -> Result<f64, ValidationError> {
    let raw = required_text(value, field)?;
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ValidationError::InvalidNumber(field)),
    }
}

impl Activity {
    /// Validate raw form state and assemble a new record for `user_id`.
    ///
    /// Assigns a fresh UUID; `weather` and `created_at` stay unset until the
    /// submission workflow and the store fill them in.
    pub fn from_form(form: &ActivityForm, user_id: &str) -> Result<Self, ValidationError> {
        let date: NaiveDate = {
            let raw = form.date.trim();
            if raw.is_empty() {
                return Err(ValidationError::MissingField("date"));
            }
            raw.parse()
                .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?
        };

        let city = required_str(&form.city, "city")?;
        let state = required_str(&form.state, "state")?;

        let activity_type = form
            .activity_type
            .ok_or(ValidationError::MissingField("type"))?;

        let details = match activity_type {
            ActivityType::Golf => {
                let course_name = required_text(&form.course_name, "courseName")?;
                let score_raw = required_text(&form.score, "score")?;
                let score = score_raw
                    .parse::<i64>()
                    .map_err(|_| ValidationError::InvalidNumber("score"))?;
                ActivityDetails::Golf { course_name, score }
            }
            ActivityType::Surfing => ActivityDetails::Surfing {
                duration: required_number(&form.duration, "duration")?,
                beach_name: required_text(&form.beach_name, "beachName")?,
            },
            ActivityType::MountainBiking => ActivityDetails::MountainBiking {
                duration: required_number(&form.duration, "duration")?,
                distance: required_number(&form.distance, "distance")?,
                trail_system: required_text(&form.trail_system, "trailSystem")?,
            },
        };

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            city,
            state,
            user_id: user_id.to_string(),
            created_at: None,
            weather: None,
            details,
        })
    }
}

/// Sort a history list newest-first by outing date.
///
/// Display order is never persisted; re-sorting at the edge keeps the
/// rendered history correct regardless of insertion order.
pub fn sort_newest_first(activities: &mut [Activity]) {
    activities.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golf_form() -> ActivityForm {
        ActivityForm {
            date: "2024-06-01".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            activity_type: Some(ActivityType::Golf),
            course_name: Some("Hill Country".to_string()),
            score: Some("82".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_golf_form_round_trip() {
        let activity = Activity::from_form(&golf_form(), "user-1").unwrap();

        assert_eq!(activity.date, "2024-06-01".parse::<NaiveDate>().unwrap());
        assert_eq!(activity.city, "Austin");
        assert_eq!(activity.state, "TX");
        assert_eq!(activity.user_id, "user-1");
        assert!(activity.weather.is_none());
        assert!(activity.created_at.is_none());
        assert_eq!(
            activity.details,
            ActivityDetails::Golf {
                course_name: "Hill Country".to_string(),
                score: 82,
            }
        );
    }

    #[test]
    fn test_surfing_form_parses_float_duration() {
        let form = ActivityForm {
            date: "2024-05-10".to_string(),
            city: "Santa Cruz".to_string(),
            state: "CA".to_string(),
            activity_type: Some(ActivityType::Surfing),
            duration: Some("1.5".to_string()),
            beach_name: Some("Pleasure Point".to_string()),
            ..Default::default()
        };

        let activity = Activity::from_form(&form, "user-1").unwrap();
        assert_eq!(
            activity.details,
            ActivityDetails::Surfing {
                duration: 1.5,
                beach_name: "Pleasure Point".to_string(),
            }
        );
    }

    #[test]
    fn test_mountain_biking_requires_all_metrics() {
        let form = ActivityForm {
            date: "2024-05-10".to_string(),
            city: "Moab".to_string(),
            state: "UT".to_string(),
            activity_type: Some(ActivityType::MountainBiking),
            duration: Some("2".to_string()),
            distance: None,
            trail_system: Some("Slickrock".to_string()),
            ..Default::default()
        };

        let err = Activity::from_form(&form, "user-1").unwrap_err();
        assert_eq!(err, ValidationError::MissingField("distance"));
    }

    #[test]
    fn test_non_numeric_score_rejected() {
        let mut form = golf_form();
        form.score = Some("eighty-two".to_string());

        let err = Activity::from_form(&form, "user-1").unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber("score"));
    }

    #[test]
    fn test_nan_duration_rejected() {
        let form = ActivityForm {
            date: "2024-05-10".to_string(),
            city: "Santa Cruz".to_string(),
            state: "CA".to_string(),
            activity_type: Some(ActivityType::Surfing),
            duration: Some("NaN".to_string()),
            beach_name: Some("Steamer Lane".to_string()),
            ..Default::default()
        };

        let err = Activity::from_form(&form, "user-1").unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumber("duration"));
    }

    #[test]
    fn test_blank_city_rejected() {
        let mut form = golf_form();
        form.city = "   ".to_string();

        let err = Activity::from_form(&form, "user-1").unwrap_err();
        assert_eq!(err, ValidationError::MissingField("city"));
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut form = golf_form();
        form.date = "junk".to_string();

        let err = Activity::from_form(&form, "user-1").unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("junk".to_string()));
    }

    #[test]
    fn test_each_record_gets_a_fresh_id() {
        let a = Activity::from_form(&golf_form(), "user-1").unwrap();
        let b = Activity::from_form(&golf_form(), "user-1").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialization_uses_canonical_names() {
        let activity = Activity::from_form(&golf_form(), "user-1").unwrap();
        let json = serde_json::to_value(&activity).unwrap();

        assert_eq!(json["type"], "Golf");
        assert_eq!(json["courseName"], "Hill Country");
        assert_eq!(json["score"], 82);
        assert_eq!(json["date"], "2024-06-01");
        // Legacy lowercase spellings are never written
        assert!(json.get("coursename").is_none());
    }

    #[test]
    fn test_legacy_lowercase_fields_still_deserialize() {
        let json = serde_json::json!({
            "id": "abc",
            "date": "2023-11-02",
            "city": "Bend",
            "state": "OR",
            "user_id": "user-1",
            "type": "Mountain Biking",
            "duration": 2.5,
            "distance": 14.0,
            "trailsystem": "Phil's Trail"
        });

        let activity: Activity = serde_json::from_value(json).unwrap();
        assert_eq!(
            activity.details,
            ActivityDetails::MountainBiking {
                duration: 2.5,
                distance: 14.0,
                trail_system: "Phil's Trail".to_string(),
            }
        );
    }

    #[test]
    fn test_sort_newest_first() {
        let dates = ["2024-01-01", "2024-03-01", "2024-02-01"];
        let mut activities: Vec<Activity> = dates
            .iter()
            .map(|d| {
                let mut form = golf_form();
                form.date = d.to_string();
                Activity::from_form(&form, "user-1").unwrap()
            })
            .collect();

        sort_newest_first(&mut activities);

        let sorted: Vec<String> = activities.iter().map(|a| a.date.to_string()).collect();
        assert_eq!(sorted, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }
}
