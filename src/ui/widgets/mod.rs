//! UI widgets for reusable components.

pub mod badge_chip;
pub mod badge_toast;
pub mod entry_input;
pub mod progress_bar;
pub mod stat_card;

pub use badge_chip::show_badge_chip;
pub use badge_toast::BadgeToast;
pub use entry_input::EntryInput;
pub use progress_bar::{progress_fill, show_progress};
pub use stat_card::StatCard;
