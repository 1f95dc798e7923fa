//! Unit tests for badge awarding.
//!
//! Covers the count thresholds (5 and 15 workouts, 10 meals) and both goal
//! badge policies.

use fittrack::tracker::{BadgeKind, GoalBadgePolicy, Tracker};

fn log_workouts(tracker: &mut Tracker, count: usize) {
    for i in 0..count {
        tracker
            .add_workout(&format!("Pushups - {} reps", 10 + i))
            .unwrap();
    }
}

fn labels(tracker: &Tracker) -> Vec<String> {
    tracker.badges().iter().map(|b| b.label()).collect()
}

#[test]
fn test_starter_badge_awarded_once_at_five_workouts() {
    let mut tracker = Tracker::new();

    log_workouts(&mut tracker, 4);
    assert!(tracker.badges().is_empty());

    log_workouts(&mut tracker, 1);
    assert_eq!(labels(&tracker), vec!["🏅 Starter Badge"]);

    log_workouts(&mut tracker, 5);
    assert_eq!(tracker.badge_count(BadgeKind::Starter), 1);
    assert_eq!(tracker.badges().len(), 1);
}

#[test]
fn test_beast_mode_badge_at_fifteen_workouts() {
    let mut tracker = Tracker::new();

    log_workouts(&mut tracker, 14);
    assert_eq!(tracker.badge_count(BadgeKind::BeastMode), 0);

    log_workouts(&mut tracker, 1);
    assert_eq!(
        labels(&tracker),
        vec!["🏅 Starter Badge", "🔥 Beast Mode Badge"]
    );

    log_workouts(&mut tracker, 10);
    assert_eq!(tracker.badges().len(), 2);
}

#[test]
fn test_clean_eating_badge_at_ten_meals() {
    let mut tracker = Tracker::new();

    for i in 0..9 {
        assert!(tracker.add_diet(&format!("Meal {}", i)).unwrap().is_empty());
    }

    let awarded = tracker.add_diet("Chicken + Rice - 500 cal").unwrap();
    assert_eq!(awarded.len(), 1);
    assert_eq!(awarded[0].kind, BadgeKind::CleanEating);
    assert!(labels(&tracker)
        .iter()
        .any(|l| l.contains("Clean Eating Badge")));

    tracker.add_diet("Salad").unwrap();
    assert_eq!(tracker.badge_count(BadgeKind::CleanEating), 1);
}

#[test]
fn test_meals_do_not_count_toward_workout_badges() {
    let mut tracker = Tracker::new();

    for i in 0..5 {
        tracker.add_diet(&format!("Meal {}", i)).unwrap();
    }

    assert_eq!(tracker.badge_count(BadgeKind::Starter), 0);
}

#[test]
fn test_rejected_input_does_not_advance_thresholds() {
    let mut tracker = Tracker::new();

    log_workouts(&mut tracker, 4);
    assert!(tracker.add_workout("   ").is_err());
    assert!(tracker.badges().is_empty());
    assert_eq!(tracker.workouts().len(), 4);
}

#[test]
fn test_every_toggle_policy_re_awards() {
    let mut tracker = Tracker::with_goal_policy(GoalBadgePolicy::EveryToggle);
    tracker.add_goal("Run 5km daily").unwrap();

    // on, off, on
    assert!(tracker.toggle_goal(0).unwrap().is_some());
    assert!(tracker.toggle_goal(0).unwrap().is_none());
    assert!(tracker.toggle_goal(0).unwrap().is_some());

    assert_eq!(tracker.badge_count(BadgeKind::GoalAchiever), 2);
}

#[test]
fn test_once_per_goal_policy() {
    let mut tracker = Tracker::with_goal_policy(GoalBadgePolicy::OncePerGoal);
    tracker.add_goal("Run 5km daily").unwrap();
    tracker.add_goal("Sleep 8 hours").unwrap();

    assert!(tracker.toggle_goal(0).unwrap().is_some());
    assert!(tracker.toggle_goal(0).unwrap().is_none());
    assert!(tracker.toggle_goal(0).unwrap().is_none());
    assert!(tracker.goals()[0].done);

    // A different goal still earns its own badge
    assert!(tracker.toggle_goal(1).unwrap().is_some());
    assert_eq!(tracker.badge_count(BadgeKind::GoalAchiever), 2);
}

#[test]
fn test_untoggling_never_removes_badges() {
    let mut tracker = Tracker::new();
    tracker.add_goal("Drink water").unwrap();

    tracker.toggle_goal(0).unwrap();
    let before = tracker.badges().len();
    tracker.toggle_goal(0).unwrap();

    assert!(!tracker.goals()[0].done);
    assert_eq!(tracker.badges().len(), before);
}
