use super::*;
use crate::controller::{Action, Buttons, InputEvent};
use crate::persistence::Config;
use crate::settings::Settings;
use crate::types::vec2;
use std::path::Path;

/// Builds an app whose configuration lives in `dir`.
fn app_in(dir: &Path) -> StitchApp {
    let settings = Settings {
        config_path: dir.join("config.bin"),
        ..Settings::default()
    };
    StitchApp::new(settings)
}

fn raw_input(events: Vec<egui::Event>) -> egui::RawInput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;
    raw
}

/// Moves the pointer to the canvas origin so the candidate point is defined.
fn hover_origin(app: &mut StitchApp) {
    app.controller.handle_event(
        InputEvent::PointerMoved {
            pos: vec2(0.0, 0.0),
            delta: vec2(0.0, 0.0),
            buttons: Buttons::default(),
        },
        false,
    );
}

/// Runs one frame of the app on `ctx` with the given input events.
fn run_frame(ctx: &egui::Context, app: &mut StitchApp, events: Vec<egui::Event>) -> egui::FullOutput {
    ctx.run(raw_input(events), |ctx| {
        let canvas_rect = ctx.input(|i| i.content_rect());
        let flow = app.handle_canvas_input(ctx, canvas_rect);
        let painter = ctx.layer_painter(egui::LayerId::background());
        app.render_canvas(&painter, canvas_rect);
        app.draw_menu(ctx);
        if flow == Flow::Terminate {
            app.shutdown();
        }
    })
}

fn press(pos: egui::Pos2, button: egui::PointerButton) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button,
        pressed: true,
        modifiers: egui::Modifiers::NONE,
    }
}

fn release(pos: egui::Pos2, button: egui::PointerButton) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button,
        pressed: false,
        modifiers: egui::Modifiers::NONE,
    }
}

#[test]
fn startup_uses_defaults_without_config() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_in(dir.path());

    assert!(app.controller.path().is_empty());
    assert_eq!(app.controller.view().scale, 20.0);
    assert_eq!(app.controller.view().camera, vec2(0.0, 0.0));
    assert_eq!(app.controller.current_file_path(), "Untitled.txt");
    assert_eq!(app.menu.file_path_input, "Untitled.txt");
}

#[test]
fn startup_restores_config_and_path_file() {
    let dir = tempfile::tempdir().unwrap();
    let path_file = dir.path().join("heart.txt");
    std::fs::write(&path_file, "1 1\n2 0\n").unwrap();
    Config {
        current_file_path: path_file.display().to_string(),
        scale: 40.0,
        camera: vec2(-5.0, 5.0),
    }
    .save(&dir.path().join("config.bin"))
    .unwrap();

    let app = app_in(dir.path());

    assert_eq!(app.controller.view().scale, 40.0);
    assert_eq!(app.controller.view().camera, vec2(-5.0, 5.0));
    assert_eq!(app.controller.path().absolute(), &[vec2(1.0, 1.0), vec2(3.0, 1.0)]);
    assert_eq!(app.menu.file_path_input, path_file.display().to_string());
}

#[test]
fn startup_with_unreadable_path_file_resets_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path_file = dir.path().join("broken.txt");
    std::fs::write(&path_file, "oops\n").unwrap();
    Config {
        current_file_path: path_file.display().to_string(),
        ..Config::default()
    }
    .save(&dir.path().join("config.bin"))
    .unwrap();

    let app = app_in(dir.path());

    assert!(app.controller.path().is_empty());
    assert_eq!(app.controller.current_file_path(), "Untitled.txt");
}

#[test]
fn clicking_canvas_places_stitch() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let ctx = egui::Context::default();

    // First frame lays out the menu window
    let _ = run_frame(&ctx, &mut app, vec![]);

    let pos = egui::pos2(900.0, 600.0);
    let _ = run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(pos)]);
    let _ = run_frame(
        &ctx,
        &mut app,
        vec![
            press(pos, egui::PointerButton::Primary),
            release(pos, egui::PointerButton::Primary),
        ],
    );

    // scale 20, camera origin: (900, 600) -> (45, -30)
    assert_eq!(app.controller.path().absolute(), &[vec2(45.0, -30.0)]);
}

#[test]
fn resize_is_recorded_on_first_frame() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let ctx = egui::Context::default();

    let _ = run_frame(&ctx, &mut app, vec![]);

    assert_eq!(app.controller.view().viewport, vec2(1200.0, 800.0));

    // scale 20 over 1200x800: lines at 0, 20, ..., 1200 and 0, 20, ..., 800
    let (vertical, horizontal) = app.grid_lines();
    assert_eq!(vertical.len(), 61);
    assert_eq!(horizontal.len(), 41);
    assert_eq!(vertical.last(), Some(&1200.0));
}

#[test]
fn grid_follows_recorded_viewport() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());

    assert!(app.grid_lines().0.is_empty());

    app.controller.handle_event(
        InputEvent::Resize {
            width: 100.0,
            height: 40.0,
        },
        false,
    );
    let (vertical, horizontal) = app.grid_lines();
    assert_eq!(vertical, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(horizontal, vec![0.0, 20.0, 40.0]);
}

#[test]
fn escape_ends_session_and_saves_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let ctx = egui::Context::default();

    let _ = run_frame(&ctx, &mut app, vec![]);
    let _ = run_frame(
        &ctx,
        &mut app,
        vec![egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }],
    );

    assert!(app.shut_down);
    let saved = Config::load(&dir.path().join("config.bin")).unwrap();
    assert_eq!(saved, app.controller.config());
}

#[test]
fn shutdown_runs_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let config_path = dir.path().join("config.bin");

    app.shutdown();
    assert!(config_path.exists());
    std::fs::remove_file(&config_path).unwrap();

    app.shutdown();
    assert!(!config_path.exists());
}

#[test]
fn menu_save_and_load_update_status() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let file = dir.path().join("out.txt").display().to_string();

    hover_origin(&mut app);
    app.perform_action(Action::Place);
    app.perform_action(Action::Save(file.clone()));
    assert_eq!(app.menu.status.as_deref(), Some(format!("Saved {file}").as_str()));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "0 0\n");

    app.perform_action(Action::Undo);
    assert!(app.controller.path().is_empty());

    app.perform_action(Action::Load(file.clone()));
    assert_eq!(app.controller.path().len(), 1);
    assert_eq!(app.menu.status.as_deref(), Some(format!("Loaded {file}").as_str()));
}

#[test]
fn menu_load_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    let missing = dir.path().join("missing.txt").display().to_string();

    app.perform_action(Action::Load(missing));

    let status = app.menu.status.clone().unwrap_or_default();
    assert!(status.starts_with("Error: file not found"), "unexpected status {status:?}");
}

#[test]
fn menu_renders_headless() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    hover_origin(&mut app);
    app.perform_action(Action::Place);
    assert_eq!(app.controller.path().len(), 1);
    let ctx = egui::Context::default();

    let output = run_frame(&ctx, &mut app, vec![]);
    assert!(!output.shapes.is_empty());
}

#[test]
fn browsed_path_must_fit_config_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());

    let long = Path::new("/tmp").join("a".repeat(120));
    assert!(!app.accept_browsed_path(&long));
    assert_eq!(app.menu.file_path_input, "Untitled.txt");
    let status = app.menu.status.clone().unwrap_or_default();
    assert!(status.contains("longer than 99 bytes"), "unexpected status {status:?}");

    let short = Path::new("designs").join("heart.txt");
    assert!(app.accept_browsed_path(&short));
    assert_eq!(app.menu.file_path_input, short.display().to_string());
}
