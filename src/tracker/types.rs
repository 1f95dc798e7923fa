//! Tracker data types: log entries, goals and badges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Free-text description, stored as typed
    pub text: String,
    /// When the workout was logged
    pub logged_at: DateTime<Utc>,
}

impl WorkoutEntry {
    /// Create a new workout entry stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            logged_at: Utc::now(),
        }
    }
}

/// A single logged meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietEntry {
    /// Free-text meal description, stored as typed
    pub text: String,
    /// When the meal was logged
    pub logged_at: DateTime<Utc>,
}

impl DietEntry {
    /// Create a new diet entry stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            logged_at: Utc::now(),
        }
    }
}

/// Common view of workout and diet log entries.
pub trait LogEntry {
    /// Entry text as typed.
    fn text(&self) -> &str;
    /// When the entry was logged.
    fn logged_at(&self) -> DateTime<Utc>;
}

impl LogEntry for WorkoutEntry {
    fn text(&self) -> &str {
        &self.text
    }

    fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

impl LogEntry for DietEntry {
    fn text(&self) -> &str {
        &self.text
    }

    fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

/// A user-defined objective with a completion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,
    /// Goal description
    pub text: String,
    /// Whether the goal is currently marked done
    pub done: bool,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
    /// Set once this goal has earned a Goal Achiever badge
    pub badge_awarded: bool,
}

impl Goal {
    /// Create a new, not yet completed goal.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            done: false,
            created_at: Utc::now(),
            badge_awarded: false,
        }
    }
}

/// The milestones a badge can mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeKind {
    /// Fifth workout logged
    Starter,
    /// Fifteenth workout logged
    BeastMode,
    /// Tenth meal logged
    CleanEating,
    /// A goal was completed
    GoalAchiever,
}

impl BadgeKind {
    /// Display title without the icon.
    pub fn title(&self) -> &'static str {
        match self {
            BadgeKind::Starter => "Starter Badge",
            BadgeKind::BeastMode => "Beast Mode Badge",
            BadgeKind::CleanEating => "Clean Eating Badge",
            BadgeKind::GoalAchiever => "Goal Achiever",
        }
    }

    /// Emoji icon shown in front of the title.
    pub fn icon(&self) -> &'static str {
        match self {
            BadgeKind::Starter => "🏅",
            BadgeKind::BeastMode => "🔥",
            BadgeKind::CleanEating => "🥗",
            BadgeKind::GoalAchiever => "🎯",
        }
    }

    /// Full label, e.g. "🏅 Starter Badge".
    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self.title())
    }
}

impl std::fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An awarded badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Which milestone was reached
    pub kind: BadgeKind,
    /// When it was awarded
    pub awarded_at: DateTime<Utc>,
}

impl Badge {
    /// Award a badge now.
    pub fn award(kind: BadgeKind) -> Self {
        Self {
            kind,
            awarded_at: Utc::now(),
        }
    }

    /// Full display label.
    pub fn label(&self) -> String {
        self.kind.label()
    }
}

/// Aggregate numbers shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Workouts logged
    pub workouts: usize,
    /// Meals logged
    pub meals: usize,
    /// Goals currently marked done
    pub goals_done: usize,
    /// Goals created
    pub goals_total: usize,
}
