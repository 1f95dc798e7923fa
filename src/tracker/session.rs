//! In-memory tracker session.
//!
//! Holds every list the app displays. Nothing here is persisted; a new
//! [`Tracker`] starts empty.

use super::badges::{rules_crossed, GoalBadgePolicy, TrackedList};
use super::types::{Badge, BadgeKind, DashboardStats, DietEntry, Goal, WorkoutEntry};

/// Progress percentage added per logged workout.
pub const PROGRESS_STEP_PERCENT: usize = 10;

/// Session state for workouts, meals, goals and badges.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    workouts: Vec<WorkoutEntry>,
    diet: Vec<DietEntry>,
    goals: Vec<Goal>,
    badges: Vec<Badge>,
    goal_policy: GoalBadgePolicy,
}

impl Tracker {
    /// Create an empty tracker with the default goal badge policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tracker with a specific goal badge policy.
    pub fn with_goal_policy(goal_policy: GoalBadgePolicy) -> Self {
        Self {
            goal_policy,
            ..Self::default()
        }
    }

    /// Current goal badge policy.
    pub fn goal_policy(&self) -> GoalBadgePolicy {
        self.goal_policy
    }

    /// Change the goal badge policy. Already awarded badges are kept.
    pub fn set_goal_policy(&mut self, policy: GoalBadgePolicy) {
        self.goal_policy = policy;
    }

    /// Log a workout. Returns any badges the new count earned.
    pub fn add_workout(&mut self, text: &str) -> Result<Vec<Badge>, TrackerError> {
        validate(text)?;
        self.workouts.push(WorkoutEntry::new(text));
        tracing::debug!("Workout logged ({} total)", self.workouts.len());
        Ok(self.award_for_count(TrackedList::Workouts, self.workouts.len()))
    }

    /// Log a meal. Returns any badges the new count earned.
    pub fn add_diet(&mut self, text: &str) -> Result<Vec<Badge>, TrackerError> {
        validate(text)?;
        self.diet.push(DietEntry::new(text));
        tracing::debug!("Meal logged ({} total)", self.diet.len());
        Ok(self.award_for_count(TrackedList::Diet, self.diet.len()))
    }

    /// Add a new open goal.
    pub fn add_goal(&mut self, text: &str) -> Result<(), TrackerError> {
        validate(text)?;
        self.goals.push(Goal::new(text));
        tracing::debug!("Goal added ({} total)", self.goals.len());
        Ok(())
    }

    /// Flip the done flag of the goal at `index`.
    ///
    /// Returns the badge awarded by this toggle, if any. Un-completing a goal
    /// never removes a badge.
    pub fn toggle_goal(&mut self, index: usize) -> Result<Option<Badge>, TrackerError> {
        let policy = self.goal_policy;
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(TrackerError::GoalNotFound(index))?;

        goal.done = !goal.done;
        tracing::debug!("Goal {} marked done={}", index, goal.done);

        if !policy.should_award(goal) {
            return Ok(None);
        }

        goal.badge_awarded = true;
        Ok(Some(self.award(BadgeKind::GoalAchiever)))
    }

    /// Logged workouts, oldest first.
    pub fn workouts(&self) -> &[WorkoutEntry] {
        &self.workouts
    }

    /// Logged meals, oldest first.
    pub fn diet(&self) -> &[DietEntry] {
        &self.diet
    }

    /// Goals in creation order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Awarded badges in award order.
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Number of badges of a given kind.
    pub fn badge_count(&self, kind: BadgeKind) -> usize {
        self.badges.iter().filter(|b| b.kind == kind).count()
    }

    /// Aggregate counts for the dashboard.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            workouts: self.workouts.len(),
            meals: self.diet.len(),
            goals_done: self.goals.iter().filter(|g| g.done).count(),
            goals_total: self.goals.len(),
        }
    }

    /// Dashboard progress: ten percent per workout, capped at 100.
    pub fn progress_percent(&self) -> u8 {
        self.workouts
            .len()
            .saturating_mul(PROGRESS_STEP_PERCENT)
            .min(100) as u8
    }

    fn award_for_count(&mut self, list: TrackedList, new_len: usize) -> Vec<Badge> {
        rules_crossed(list, new_len)
            .into_iter()
            .map(|kind| self.award(kind))
            .collect()
    }

    fn award(&mut self, kind: BadgeKind) -> Badge {
        let badge = Badge::award(kind);
        tracing::info!("Badge awarded: {}", kind.title());
        self.badges.push(badge.clone());
        badge
    }
}

fn validate(text: &str) -> Result<(), TrackerError> {
    if text.trim().is_empty() {
        return Err(TrackerError::EmptyInput);
    }
    Ok(())
}

/// Tracker errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Goal not found at index {0}")]
    GoalNotFound(usize),
}
