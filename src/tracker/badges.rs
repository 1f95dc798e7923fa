//! Badge award rules.
//!
//! Count badges fire when a tracked list reaches an exact length. Since lists only
//! grow, each count rule can fire at most once per session. Goal badges fire when a
//! goal transitions to done, subject to [`GoalBadgePolicy`].

use serde::{Deserialize, Serialize};

use super::types::{BadgeKind, Goal};

/// Lists whose length drives count badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedList {
    Workouts,
    Diet,
}

/// Award `kind` when `list` reaches exactly `threshold` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRule {
    pub list: TrackedList,
    pub threshold: usize,
    pub kind: BadgeKind,
}

/// All count-based badge rules.
pub const COUNT_RULES: &[CountRule] = &[
    CountRule {
        list: TrackedList::Workouts,
        threshold: 5,
        kind: BadgeKind::Starter,
    },
    CountRule {
        list: TrackedList::Workouts,
        threshold: 15,
        kind: BadgeKind::BeastMode,
    },
    CountRule {
        list: TrackedList::Diet,
        threshold: 10,
        kind: BadgeKind::CleanEating,
    },
];

/// Badge kinds whose threshold is crossed by `list` growing to `new_len`.
pub fn rules_crossed(list: TrackedList, new_len: usize) -> Vec<BadgeKind> {
    COUNT_RULES
        .iter()
        .filter(|rule| rule.list == list && rule.threshold == new_len)
        .map(|rule| rule.kind)
        .collect()
}

/// How completing a goal awards badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalBadgePolicy {
    /// Every transition to done awards a badge, including re-completions.
    #[default]
    EveryToggle,
    /// Each goal awards at most one badge.
    OncePerGoal,
}

impl GoalBadgePolicy {
    /// Decide whether a goal that was just toggled earns a badge.
    ///
    /// Must be called after `done` has been flipped.
    pub fn should_award(&self, goal: &Goal) -> bool {
        if !goal.done {
            return false;
        }
        match self {
            GoalBadgePolicy::EveryToggle => true,
            GoalBadgePolicy::OncePerGoal => !goal.badge_awarded,
        }
    }
}

impl std::fmt::Display for GoalBadgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalBadgePolicy::EveryToggle => write!(f, "Every completion"),
            GoalBadgePolicy::OncePerGoal => write!(f, "Once per goal"),
        }
    }
}
