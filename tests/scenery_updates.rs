use bevy::prelude::*;

use gravity_drop::physics::plugin::simulator_from_config;
use gravity_drop::rendering::layout::SceneLayout;
use gravity_drop::rendering::palette::palette::{ground_color, sky_color};
use gravity_drop::rendering::scenery::scenery::{CraterField, CraterMark, GroundBand, SceneryPlugin};
use gravity_drop::{DropSimulator, GameConfig, PlanetId, SimulationVariant};

fn scenery_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.insert_resource(simulator_from_config(&cfg));
    app.insert_resource(SceneLayout::from_config(&cfg));
    app.insert_resource(cfg);
    app.insert_resource(ClearColor(Color::BLACK));
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<ColorMaterial>>();
    app.add_plugins(SceneryPlugin);
    app.update();
    app
}

fn cycle(app: &mut App, step: isize) {
    app.world_mut()
        .resource_mut::<DropSimulator>()
        .cycle_planet(step);
    app.update();
}

fn crater_count(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<Entity, With<CraterMark>>();
    q.iter(app.world()).count()
}

fn ground(app: &mut App) -> Color {
    let mut q = app.world_mut().query_filtered::<&Sprite, With<GroundBand>>();
    q.single(app.world()).expect("one ground band").color
}

fn assert_styled_for(app: &mut App, variant: SimulationVariant, planet: PlanetId) {
    assert_eq!(app.world().resource::<ClearColor>().0, sky_color(planet), "{planet}");
    assert_eq!(ground(app), ground_color(variant, planet), "{planet}");
}

#[test]
fn craters_reroll_on_each_moon_visit() {
    let v = SimulationVariant::Extended;
    let mut app = scenery_app(GameConfig::default());
    assert_eq!(crater_count(&mut app), 0);
    assert_styled_for(&mut app, v, PlanetId::EARTH);

    cycle(&mut app, 1);
    assert_eq!(crater_count(&mut app), 6);
    assert_styled_for(&mut app, v, PlanetId::MOON);
    let first_visit = app.world().resource::<CraterField>().0.clone();
    assert_eq!(first_visit.len(), 6);

    cycle(&mut app, 1);
    assert_eq!(crater_count(&mut app), 0);
    assert!(app.world().resource::<CraterField>().0.is_empty());
    assert_styled_for(&mut app, v, PlanetId::MARS);

    cycle(&mut app, -1);
    assert_eq!(crater_count(&mut app), 6);
    assert_styled_for(&mut app, v, PlanetId::MOON);
    let second_visit = app.world().resource::<CraterField>().0.clone();
    assert_ne!(first_visit, second_visit);
}

#[test]
fn classic_moon_has_no_craters() {
    let mut cfg = GameConfig::default();
    cfg.simulation.variant = "classic".into();
    let mut app = scenery_app(cfg);
    cycle(&mut app, 1);
    assert_eq!(crater_count(&mut app), 0);
    assert_styled_for(&mut app, SimulationVariant::Classic, PlanetId::MOON);
}

#[test]
fn moon_start_waits_for_a_switch_before_craters() {
    let mut cfg = GameConfig::default();
    cfg.simulation.initial_planet = "Moon".into();
    let mut app = scenery_app(cfg);
    assert_eq!(crater_count(&mut app), 0);
    assert_styled_for(&mut app, SimulationVariant::Extended, PlanetId::MOON);

    cycle(&mut app, 1);
    cycle(&mut app, -1);
    assert_eq!(crater_count(&mut app), 6);
}
