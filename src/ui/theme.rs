//! UI theme definitions.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the theme toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀",
        }
    }

    /// Background of stat cards.
    pub fn card_fill(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::CARD_BG,
            Theme::Light => LightTheme::CARD_BG,
        }
    }

    /// Outline of stat cards.
    pub fn card_border(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::BORDER,
            Theme::Light => LightTheme::BORDER,
        }
    }

    /// Text color on stat cards.
    pub fn card_text(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::TEXT_PRIMARY,
            Theme::Light => LightTheme::TEXT_PRIMARY,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Colors shared by both themes.
pub struct Brand;

impl Brand {
    /// Primary buttons and progress fill (indigo)
    pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
    /// Navigation bar background
    pub const NAV_BG: Color32 = Color32::from_rgb(17, 17, 17);
    /// Home hero background
    pub const HERO_BG: Color32 = Color32::from_rgb(24, 24, 24);
    /// Badge chip background
    pub const GOLD: Color32 = Color32::from_rgb(255, 215, 0);
    /// Badge chip text
    pub const ON_GOLD: Color32 = Color32::from_rgb(17, 17, 17);
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 24);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 28, 36);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 38, 48);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 70);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 17, 17);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 104);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(204, 204, 204);
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 50, 62);
    visuals.widgets.active.bg_fill = Brand::ACCENT;

    visuals.selection.bg_fill = Brand::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = Brand::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::BACKGROUND;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::PANEL_BG;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(240, 240, 244);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(230, 230, 235);
    visuals.widgets.active.bg_fill = Brand::ACCENT;

    visuals.selection.bg_fill = Brand::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = Brand::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}
