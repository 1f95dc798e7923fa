//! UI screens for the application.

pub mod achievements;
pub mod dashboard;
pub mod goals;
pub mod home;
pub mod log;

pub use achievements::{AchievementsContent, AchievementsScreen};
pub use dashboard::DashboardScreen;
pub use goals::{GoalsAction, GoalsScreen};
pub use home::HomeScreen;
pub use log::LogScreen;

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Landing screen
    #[default]
    Home,
    /// Aggregate stats and progress
    Dashboard,
    /// Workout log
    Workouts,
    /// Diet log
    Diet,
    /// Goal list
    Goals,
    /// Awarded badges
    Achievements,
}

impl Screen {
    /// All screens in navigation order.
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Dashboard,
        Screen::Workouts,
        Screen::Diet,
        Screen::Goals,
        Screen::Achievements,
    ];

    /// Lowercase selector string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Dashboard => "dashboard",
            Screen::Workouts => "workouts",
            Screen::Diet => "diet",
            Screen::Goals => "goals",
            Screen::Achievements => "achievements",
        }
    }

    /// Navigation label.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Dashboard => "Dashboard",
            Screen::Workouts => "Workouts",
            Screen::Diet => "Diet",
            Screen::Goals => "Goals",
            Screen::Achievements => "Achievements",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

/// A selector string that names no screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown screen: {0}")]
pub struct UnknownScreen(pub String);
