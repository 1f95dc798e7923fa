//! Headless rendering tests.
//!
//! Runs full egui frames for every screen to make sure layout code does not
//! panic and does not change tracker state on its own.

use fittrack::storage::config::AppConfig;
use fittrack::ui::Theme;
use fittrack::{FitTrackApp, Screen};

fn run_frame(ctx: &egui::Context, app: &mut FitTrackApp) {
    run_frame_with(ctx, app, Vec::new());
}

fn run_frame_with(ctx: &egui::Context, app: &mut FitTrackApp, events: Vec<egui::Event>) {
    let input = egui::RawInput {
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| app.render(ctx));
}

fn key_press(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }
}

fn populated_app() -> FitTrackApp {
    let mut app = FitTrackApp::with_config(AppConfig::default());

    for i in 0..6 {
        app.workouts_screen_mut()
            .input_mut()
            .set_buffer(format!("Squats - {} reps", 10 + i));
        app.submit_workout();
    }
    app.diet_screen_mut()
        .input_mut()
        .set_buffer("Chicken + Rice - 500 cal");
    app.submit_diet();
    app.goals_screen_mut().input_mut().set_buffer("Run 5km daily");
    app.submit_goal();
    app.toggle_goal(0);

    app
}

#[test]
fn test_every_screen_renders_empty() {
    let ctx = egui::Context::default();
    let mut app = FitTrackApp::with_config(AppConfig::default());

    for screen in Screen::ALL {
        app.navigate(screen);
        run_frame(&ctx, &mut app);
        assert_eq!(app.current_screen(), screen);
    }

    assert!(app.tracker().badges().is_empty());
}

#[test]
fn test_every_screen_renders_populated() {
    let ctx = egui::Context::default();
    let mut app = populated_app();
    let stats_before = app.tracker().stats();
    let badges_before = app.tracker().badges().len();

    for screen in Screen::ALL {
        app.navigate(screen);
        run_frame(&ctx, &mut app);
    }

    assert_eq!(app.tracker().stats(), stats_before);
    assert_eq!(app.tracker().badges().len(), badges_before);
}

#[test]
fn test_theme_toggle_without_config_path() {
    let ctx = egui::Context::default();
    let mut app = FitTrackApp::with_config(AppConfig::default());
    assert_eq!(app.theme(), Theme::Dark);

    app.toggle_theme(&ctx);
    assert_eq!(app.theme(), Theme::Light);

    run_frame(&ctx, &mut app);
    assert!(!ctx.style().visuals.dark_mode);
}

#[test]
fn test_escape_returns_home() {
    let ctx = egui::Context::default();
    let mut app = FitTrackApp::with_config(AppConfig::default());

    app.navigate(Screen::Dashboard);
    run_frame(&ctx, &mut app);
    assert_eq!(app.current_screen(), Screen::Dashboard);

    run_frame_with(&ctx, &mut app, vec![key_press(egui::Key::Escape)]);
    assert_eq!(app.current_screen(), Screen::Home);
}

#[test]
fn test_enter_submits_focused_input() {
    let ctx = egui::Context::default();
    let mut app = FitTrackApp::with_config(AppConfig::default());

    app.navigate(Screen::Workouts);
    app.workouts_screen_mut().input_mut().request_focus();
    run_frame(&ctx, &mut app);

    run_frame_with(
        &ctx,
        &mut app,
        vec![egui::Event::Text("Pushups - 20 reps".to_string())],
    );
    assert_eq!(app.workouts_screen_mut().input().buffer(), "Pushups - 20 reps");
    assert!(app.tracker().workouts().is_empty());

    run_frame_with(&ctx, &mut app, vec![key_press(egui::Key::Enter)]);
    assert_eq!(app.tracker().workouts().len(), 1);
    assert_eq!(app.tracker().workouts()[0].text, "Pushups - 20 reps");
    assert_eq!(app.workouts_screen_mut().input().buffer(), "");
    assert_eq!(app.current_screen(), Screen::Workouts);
}
