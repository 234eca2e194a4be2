//! Business logic services.

pub mod activity;
pub mod weather;

pub use activity::ActivityStore;
pub use weather::WeatherService;
