//! Data models.

pub mod activity;
pub mod user;
pub mod weather;

pub use activity::{Activity, ActivityDetails, ActivityForm, ActivityType, ValidationError};
pub use user::User;
pub use weather::WeatherData;
