//! Fitness tracking state.
//!
//! Covers:
//! - Workout and diet logs
//! - Goals with completion toggles
//! - Milestone badges awarded from count thresholds and goal completion

pub mod badges;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use badges::{GoalBadgePolicy, TrackedList, COUNT_RULES};
pub use session::{Tracker, TrackerError};
pub use types::{Badge, BadgeKind, DashboardStats, DietEntry, Goal, LogEntry, WorkoutEntry};
