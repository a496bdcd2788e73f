use bevy::prelude::*;

use gravity_drop::interaction::controls::DropControlsPlugin;
use gravity_drop::{DropEvent, DropSimulator, PlanetId};

fn controls_app() -> App {
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(DropSimulator::default());
    app.add_event::<DropEvent>();
    app.add_plugins(DropControlsPlugin);
    app
}

/// Press `key` for exactly one frame.
fn tap(app: &mut App, key: KeyCode) {
    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release_all();
        input.clear();
        input.press(key);
    }
    app.update();
}

/// Advance one frame with the current keys kept down. Without `InputPlugin` the
/// just-pressed state has to be cleared by hand, as `PreUpdate` would.
fn hold(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    app.update();
}

fn sim(app: &App) -> &DropSimulator {
    app.world().resource::<DropSimulator>()
}

#[test]
fn arrows_adjust_height_in_tenths() {
    let mut app = controls_app();
    tap(&mut app, KeyCode::ArrowUp);
    assert!((sim(&app).state().height_meters - 2.1).abs() < 1e-6);
    tap(&mut app, KeyCode::ArrowDown);
    tap(&mut app, KeyCode::ArrowDown);
    assert!((sim(&app).state().height_meters - 1.9).abs() < 1e-6);
    assert!((sim(&app).state().altitude - 1.9).abs() < 1e-6);
}

#[test]
fn height_clamps_at_ten_metres() {
    let mut app = controls_app();
    for _ in 0..120 {
        tap(&mut app, KeyCode::ArrowUp);
    }
    assert_eq!(sim(&app).state().height_meters, 10.0);
}

#[test]
fn holding_a_key_acts_once() {
    let mut app = controls_app();
    tap(&mut app, KeyCode::ArrowUp);
    // still held, no new press
    for _ in 0..2 {
        hold(&mut app);
    }
    assert!((sim(&app).state().height_meters - 2.1).abs() < 1e-6);
}

#[test]
fn left_right_cycle_planets_with_wrap() {
    let mut app = controls_app();
    tap(&mut app, KeyCode::ArrowLeft);
    assert_eq!(sim(&app).planet(), PlanetId::SUN);
    tap(&mut app, KeyCode::ArrowRight);
    tap(&mut app, KeyCode::ArrowRight);
    assert_eq!(sim(&app).planet(), PlanetId::MOON);
}

#[test]
fn space_releases_and_locks_height() {
    let mut app = controls_app();
    tap(&mut app, KeyCode::Space);
    {
        let events = app.world().resource::<Events<DropEvent>>();
        let mut cursor = events.get_cursor();
        let released: Vec<_> = cursor.read(events).copied().collect();
        assert_eq!(
            released,
            vec![DropEvent::Released {
                altitude: 2.0,
                planet: PlanetId::EARTH
            }]
        );
    }
    assert!(sim(&app).is_falling());
    tap(&mut app, KeyCode::ArrowUp);
    assert_eq!(sim(&app).state().height_meters, 2.0);
}
