use std::fs;

use gravity_drop::core::config::config::GameConfig;
use gravity_drop::{PlanetId, SimulationVariant};

#[test]
fn local_layer_overrides_base_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &base,
        r#"(
            window: (width: 800.0, height: 600.0, title: "Base", autoClose: 0.0),
            simulation: (variant: "classic", initial_planet: "Mars", initial_height: 3.0),
        )"#,
    )
    .expect("write base");
    fs::write(&local, r#"(window: (autoClose: 2.5), simulation: (initial_planet: "Jupiter"))"#)
        .expect("write local");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.title, "Base");
    assert_eq!(cfg.window.auto_close, 2.5);
    assert_eq!(cfg.simulation.variant(), SimulationVariant::Classic);
    assert_eq!(cfg.simulation.planet(), PlanetId::JUPITER);
    assert_eq!(cfg.simulation.initial_height, 3.0);
    // untouched sections keep their defaults
    assert_eq!(cfg.ball.sprite, "football.png");
}

#[test]
fn missing_local_layer_is_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("game.ron");
    fs::write(&base, r#"(scene: (font_size: 24.0))"#).expect("write base");
    let missing = dir.path().join("game.local.ron");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &missing]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("read error"));
    assert_eq!(cfg.scene.font_size, 24.0);
}

#[test]
fn malformed_layer_falls_back_to_remaining_layers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("game.ron");
    let broken = dir.path().join("broken.ron");
    fs::write(&base, r#"(simulation: (tick_hz: 120.0))"#).expect("write base");
    fs::write(&broken, "(simulation: (tick_hz: ").expect("write broken");

    let (cfg, _used, errors) = GameConfig::load_layered([&base, &broken]);
    assert!(errors.iter().any(|e| e.contains("parse error")), "{errors:?}");
    assert_eq!(cfg.simulation.tick_hz, 120.0);
}

#[test]
fn no_files_means_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (cfg, used, errors) = GameConfig::load_layered([dir.path().join("nope.ron")]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn shipped_config_is_valid() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("shipped config parses");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}
