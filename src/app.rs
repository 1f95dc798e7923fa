//! Main application state and egui integration.
//!
//! Owns the tracker session, the per-screen input state and the current
//! screen selector. Rendering is split from the state transitions so the
//! latter can be driven without a window.

use std::path::PathBuf;

use eframe::egui;
use egui::{Color32, RichText};

use crate::storage::config::{self, AppConfig};
use crate::tracker::{Badge, Tracker, TrackerError};
use crate::ui::screens::{
    AchievementsScreen, DashboardScreen, GoalsAction, GoalsScreen, HomeScreen, LogScreen, Screen,
};
use crate::ui::theme::{Brand, Theme};
use crate::ui::widgets::BadgeToast;

/// Main application state.
pub struct FitTrackApp {
    /// Current screen
    current_screen: Screen,
    /// UI theme
    theme: Theme,
    /// Application configuration
    config: AppConfig,
    /// Where to save configuration changes, if anywhere
    config_path: Option<PathBuf>,
    /// Session data
    tracker: Tracker,
    /// Workout log screen state
    workouts_screen: LogScreen,
    /// Diet log screen state
    diet_screen: LogScreen,
    /// Goals screen state
    goals_screen: GoalsScreen,
    /// Badge announcement
    badge_toast: BadgeToast,
    /// Status bar message
    status: String,
}

impl FitTrackApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::load(config::get_config_path());

        cc.egui_ctx.set_visuals(app.theme.visuals());
        cc.egui_ctx.set_zoom_factor(app.config.ui.zoom_factor());

        app
    }

    /// Create an application instance from the config file at `path`.
    ///
    /// Preference changes are written back to `path` only if it loaded
    /// cleanly, so a broken file is never replaced with defaults.
    pub fn load(path: PathBuf) -> Self {
        match config::load_config_from(&path) {
            Ok(config) => {
                let mut app = Self::with_config(config);
                app.config_path = Some(path);
                app
            }
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                tracing::warn!(
                    "Preferences will not be saved to {} this session",
                    path.display()
                );
                Self::with_config(AppConfig::default())
            }
        }
    }

    /// Create an application instance that never writes its configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let tracker = Tracker::with_goal_policy(config.badges.goal_policy);
        tracing::info!("Goal badges: {}", config.badges.goal_policy);

        Self {
            current_screen: config.start_screen(),
            theme: config.ui.theme,
            config,
            config_path: None,
            tracker,
            workouts_screen: LogScreen::workouts(),
            diet_screen: LogScreen::diet(),
            goals_screen: GoalsScreen::new(),
            badge_toast: BadgeToast::new(),
            status: "Ready".to_string(),
        }
    }

    /// Current screen.
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Session data.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Workout log screen state.
    pub fn workouts_screen_mut(&mut self) -> &mut LogScreen {
        &mut self.workouts_screen
    }

    /// Diet log screen state.
    pub fn diet_screen_mut(&mut self) -> &mut LogScreen {
        &mut self.diet_screen
    }

    /// Goals screen state.
    pub fn goals_screen_mut(&mut self) -> &mut GoalsScreen {
        &mut self.goals_screen
    }

    /// Application configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Status bar message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Navigate to a different screen.
    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!("Navigating from {:?} to {:?}", self.current_screen, screen);
        self.current_screen = screen;
    }

    /// Navigate using a selector string such as "dashboard".
    ///
    /// Unknown selectors leave the current screen unchanged.
    pub fn navigate_to(&mut self, selector: &str) {
        match selector.parse() {
            Ok(screen) => self.navigate(screen),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    /// Submit whatever is in the workout input.
    pub fn submit_workout(&mut self) {
        if let Some(text) = self.workouts_screen.input_mut().take_submission() {
            self.log_workout(&text);
        }
    }

    /// Submit whatever is in the diet input.
    pub fn submit_diet(&mut self) {
        if let Some(text) = self.diet_screen.input_mut().take_submission() {
            self.log_diet(&text);
        }
    }

    /// Submit whatever is in the goal input.
    pub fn submit_goal(&mut self) {
        if let Some(text) = self.goals_screen.input_mut().take_submission() {
            self.add_goal(&text);
        }
    }

    /// Toggle the goal at `index`.
    pub fn toggle_goal(&mut self, index: usize) {
        match self.tracker.toggle_goal(index) {
            Ok(Some(badge)) => self.celebrate(&[badge]),
            Ok(None) => {}
            Err(e) => tracing::warn!("Cannot toggle goal: {}", e),
        }
    }

    /// Switch between dark and light themes and remember the choice.
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
        tracing::info!("Theme changed to {}", self.theme);

        self.config.ui.theme = self.theme;
        if let Some(path) = &self.config_path {
            if let Err(e) = config::save_config_to(path, &self.config) {
                tracing::warn!("Failed to save theme preference: {}", e);
            }
        }
    }

    fn log_workout(&mut self, text: &str) {
        let result = self.tracker.add_workout(text);
        self.handle_awards("Workout logged", result);
    }

    fn log_diet(&mut self, text: &str) {
        let result = self.tracker.add_diet(text);
        self.handle_awards("Meal logged", result);
    }

    fn add_goal(&mut self, text: &str) {
        match self.tracker.add_goal(text) {
            Ok(()) => self.status = "Goal added".to_string(),
            Err(e) => log_rejected(e),
        }
    }

    fn handle_awards(&mut self, message: &str, result: Result<Vec<Badge>, TrackerError>) {
        match result {
            Ok(badges) => {
                self.status = message.to_string();
                self.celebrate(&badges);
            }
            Err(e) => log_rejected(e),
        }
    }

    fn celebrate(&mut self, badges: &[Badge]) {
        if let Some(last) = badges.last() {
            self.status = format!("Unlocked {}", last.label());
        }
        self.badge_toast.announce(badges);
    }

    /// Render the navigation bar.
    fn render_nav(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar")
            .frame(egui::Frame::new().fill(Brand::NAV_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("💪 FitnessTracker")
                            .size(22.0)
                            .strong()
                            .color(Color32::WHITE),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(self.theme.icon()).clicked() {
                            self.toggle_theme(ui.ctx());
                        }
                        ui.add_space(12.0);

                        // Right-to-left layout, so add in reverse navigation order
                        for screen in Screen::ALL.iter().rev() {
                            let color = if *screen == self.current_screen {
                                Color32::WHITE
                            } else {
                                Color32::from_gray(170)
                            };
                            let item = egui::Button::new(
                                RichText::new(screen.title()).size(15.0).color(color),
                            )
                            .frame(false);

                            if ui.add(item).clicked() {
                                self.navigate(*screen);
                            }
                            ui.add_space(8.0);
                        }
                    });
                });
            });
    }

    /// Render the status bar.
    fn render_status_bar(&self, ctx: &egui::Context) {
        let stats = self.tracker.stats();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(format!(
                    "{} workouts · {} meals · {}/{} goals · {} badges",
                    stats.workouts,
                    stats.meals,
                    stats.goals_done,
                    stats.goals_total,
                    self.tracker.badges().len()
                ));
                ui.separator();
                ui.label(&self.status);
            });
        });
    }

    /// Render the selected screen.
    fn render_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::central_panel(&ctx.style()).inner_margin(40.0),
            )
            .show(ctx, |ui| match self.current_screen {
                Screen::Home => {
                    if let Some(next) = HomeScreen::show(ui) {
                        self.navigate(next);
                    }
                }
                Screen::Dashboard => {
                    DashboardScreen::show(ui, &self.tracker, self.theme);
                }
                Screen::Workouts => {
                    if let Some(text) = self.workouts_screen.show(ui, self.tracker.workouts()) {
                        self.log_workout(&text);
                    }
                }
                Screen::Diet => {
                    if let Some(text) = self.diet_screen.show(ui, self.tracker.diet()) {
                        self.log_diet(&text);
                    }
                }
                Screen::Goals => match self.goals_screen.show(ui, self.tracker.goals()) {
                    Some(GoalsAction::Add(text)) => self.add_goal(&text),
                    Some(GoalsAction::Toggle(index)) => self.toggle_goal(index),
                    None => {}
                },
                Screen::Achievements => {
                    AchievementsScreen::show(ui, self.tracker.badges());
                }
            });
    }

    /// Render one frame.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Handle keyboard shortcuts
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.current_screen != Screen::Home
        {
            self.navigate(Screen::Home);
        }

        self.render_nav(ctx);
        self.render_status_bar(ctx);
        self.render_screen(ctx);
        self.badge_toast.show(ctx);
    }
}

fn log_rejected(error: TrackerError) {
    // Blank input is ignored without telling the user
    tracing::debug!("Submission ignored: {}", error);
}

impl eframe::App for FitTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}
