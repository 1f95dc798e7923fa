//! Unit test modules.

mod badge_rules_test;
mod config_test;
