//! LabTrack Inventory Management System
//!
//! A Rust REST API server tracking physical lab and classroom assets
//! (rooms, computers, smart boards, lab utilities) with dashboard
//! statistics and image attachment handling.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
