//! Integration test modules.

mod render_test;
