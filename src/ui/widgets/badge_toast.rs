//! Toast announcing newly awarded badges.

use std::time::{Duration, Instant};

use egui::{Align2, RichText};

use crate::tracker::Badge;
use crate::ui::theme::Brand;

/// How long a badge toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Badge toast widget state.
#[derive(Debug, Default)]
pub struct BadgeToast {
    /// Badges shown in the current toast
    badges: Vec<Badge>,
    /// When the toast was raised
    shown_at: Option<Instant>,
}

impl BadgeToast {
    /// Create a hidden toast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce newly awarded badges. An empty slice is ignored.
    pub fn announce(&mut self, badges: &[Badge]) {
        self.announce_at(badges, Instant::now());
    }

    fn announce_at(&mut self, badges: &[Badge], now: Instant) {
        if badges.is_empty() {
            return;
        }
        self.badges = badges.to_vec();
        self.shown_at = Some(now);
    }

    /// Check whether the toast is still visible at `now`.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.shown_at
            .map(|t| now.saturating_duration_since(t) < TOAST_DURATION)
            .unwrap_or(false)
    }

    /// Badges in the current toast.
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Show the toast in the bottom-right corner while it is active.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if !self.is_visible_at(now) {
            self.shown_at = None;
            return;
        }

        egui::Area::new(egui::Id::new("badge_toast"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -40.0])
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(Brand::GOLD)
                    .inner_margin(12.0)
                    .corner_radius(8.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new("Badge unlocked!").small().color(Brand::ON_GOLD));
                        for badge in &self.badges {
                            ui.label(
                                RichText::new(badge.label())
                                    .strong()
                                    .size(16.0)
                                    .color(Brand::ON_GOLD),
                            );
                        }
                    });
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
