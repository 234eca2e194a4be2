// SPDX-License-Identifier: MIT

//! Outing-Log: a personal activity journal API
//!
//! This crate provides the backend API for recording outings (golf rounds,
//! surf sessions, mountain bike rides), enriching each record with a weather
//! snapshot at creation time and persisting it to a user-scoped Firestore
//! collection for later browsing.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::WeatherService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub weather: WeatherService,
}
