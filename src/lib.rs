//! FitTrack - Desktop Fitness Tracker
//!
//! A small egui application for logging workouts and meals, tracking goals,
//! and earning milestone badges. All tracker data lives in memory for the
//! current session.

pub mod app;
pub mod storage;
pub mod tracker;
pub mod ui;

// Re-export commonly used types
pub use app::FitTrackApp;
pub use storage::config::AppConfig;
pub use tracker::{Badge, BadgeKind, Tracker, TrackerError};
pub use ui::screens::Screen;
