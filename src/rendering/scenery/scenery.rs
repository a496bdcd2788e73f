use bevy::prelude::*;
use bevy::sprite::MeshMaterial2d;
use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::planet::PlanetId;
use crate::core::system::system_order::PresentationSet;
use crate::core::variant::SimulationVariant;
use crate::physics::drop::DropSimulator;
use crate::rendering::layout::SceneLayout;
use crate::rendering::palette::palette::{self, rgb, CLOUD, CRATER, SUN_DISC, SUN_RAY};

// Screen-space drawing constants (origin top-left, y down).
pub const SUN_CENTER: Vec2 = Vec2::new(80.0, 80.0);
pub const SUN_RADIUS: f32 = 50.0;
pub const RAY_COUNT: usize = 12;
pub const RAY_INNER: f32 = 60.0;
pub const RAY_OUTER: f32 = 70.0;
pub const RAY_WIDTH: f32 = 3.0;
pub const CLOUD_ORIGINS: [Vec2; 3] = [
    Vec2::new(120.0, 130.0),
    Vec2::new(250.0, 150.0),
    Vec2::new(500.0, 130.0),
];
/// (dx, dy, radius) of each puff relative to its cloud origin.
pub const CLOUD_PUFFS: [(f32, f32, f32); 4] = [
    (0.0, 0.0, 30.0),
    (30.0, 10.0, 40.0),
    (-30.0, 10.0, 40.0),
    (15.0, -20.0, 30.0),
];
pub const CRATER_COUNT: usize = 6;

const Z_SUN: f32 = -10.0;
const Z_RAYS: f32 = -9.0;
const Z_CLOUDS: f32 = -8.0;
const Z_GROUND: f32 = 0.0;
const Z_CRATERS: f32 = 1.0;

/// Decorations drawn for one (variant, planet) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneryFeatures {
    pub sun: bool,
    pub sun_rays: bool,
    pub clouds: bool,
    pub craters: bool,
}

impl SceneryFeatures {
    pub fn shows(&self, part: SceneryPart) -> bool {
        match part {
            SceneryPart::SunDisc => self.sun,
            SceneryPart::SunRay => self.sun_rays,
            SceneryPart::Cloud => self.clouds,
        }
    }
}

pub fn scenery_for(variant: SimulationVariant, planet: PlanetId) -> SceneryFeatures {
    match variant {
        SimulationVariant::Classic => SceneryFeatures {
            sun: planet != PlanetId::SUN,
            sun_rays: false,
            clouds: planet == PlanetId::EARTH,
            craters: false,
        },
        SimulationVariant::Extended => {
            let sunny = matches!(planet, PlanetId::EARTH | PlanetId::MARS | PlanetId::JUPITER);
            SceneryFeatures {
                sun: sunny,
                sun_rays: sunny,
                clouds: planet == PlanetId::EARTH,
                craters: planet == PlanetId::MOON,
            }
        }
    }
}

/// Start and end points of each sun ray, in screen space.
pub fn sun_rays() -> impl Iterator<Item = (Vec2, Vec2)> {
    (0..RAY_COUNT).map(|i| {
        let angle = (i as f32 * 30.0).to_radians();
        let dir = Vec2::new(angle.cos(), angle.sin());
        (SUN_CENTER + dir * RAY_INNER, SUN_CENTER + dir * RAY_OUTER)
    })
}

/// Centre and radius of every cloud puff, in screen space.
pub fn cloud_puffs() -> impl Iterator<Item = (Vec2, f32)> {
    CLOUD_ORIGINS.into_iter().flat_map(|origin| {
        CLOUD_PUFFS
            .into_iter()
            .map(move |(dx, dy, r)| (origin + Vec2::new(dx, dy), r))
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crater {
    /// Screen space.
    pub center: Vec2,
    pub radius: f32,
}

/// Crater positions for the current Moon visit. Re-rolled each time the Moon is entered.
#[derive(Resource, Debug, Clone, Default)]
pub struct CraterField(pub Vec<Crater>);

impl CraterField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, layout: &SceneLayout) -> Self {
        let max_x = (layout.size.x - 50.0).max(50.0) as i32;
        let top = layout.ground_top();
        Self(
            (0..CRATER_COUNT)
                .map(|_| Crater {
                    center: Vec2::new(
                        rng.gen_range(50..=max_x) as f32,
                        top + rng.gen_range(5..=20) as f32,
                    ),
                    radius: rng.gen_range(10..=20) as f32,
                })
                .collect(),
        )
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneryPart {
    SunDisc,
    SunRay,
    Cloud,
}

#[derive(Component)]
pub struct GroundBand;

#[derive(Component)]
pub struct CraterMark;

#[derive(Resource)]
struct SceneryMeshes {
    circle: Handle<Mesh>,
    crater: Handle<ColorMaterial>,
}

pub struct SceneryPlugin;

impl Plugin for SceneryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CraterField>()
            .add_systems(Startup, spawn_scenery)
            .add_systems(Update, apply_planet_scenery.in_set(PresentationSet));
    }
}

fn variant_of(cfg: Option<&GameConfig>) -> SimulationVariant {
    cfg.map(|c| c.simulation.variant()).unwrap_or_default()
}

fn spawn_scenery(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    layout: Res<SceneLayout>,
) {
    // Unit-diameter disc, scaled per use.
    let circle = meshes.add(Circle::new(0.5));
    let sun_mat = materials.add(rgb(SUN_DISC));
    let cloud_mat = materials.add(rgb(CLOUD));

    commands.spawn((
        Mesh2d(circle.clone()),
        MeshMaterial2d(sun_mat),
        Transform::from_translation(layout.to_world(SUN_CENTER).extend(Z_SUN))
            .with_scale(Vec3::splat(SUN_RADIUS * 2.0)),
        Visibility::Hidden,
        SceneryPart::SunDisc,
    ));
    for (i, (start, end)) in sun_rays().enumerate() {
        let mid = layout.to_world((start + end) / 2.0);
        // y flips between screen and world, so the angle does too.
        let angle = -(i as f32 * 30.0).to_radians();
        commands.spawn((
            Sprite::from_color(rgb(SUN_RAY), Vec2::new(RAY_OUTER - RAY_INNER, RAY_WIDTH)),
            Transform::from_translation(mid.extend(Z_RAYS)).with_rotation(Quat::from_rotation_z(angle)),
            Visibility::Hidden,
            SceneryPart::SunRay,
        ));
    }
    for (center, radius) in cloud_puffs() {
        commands.spawn((
            Mesh2d(circle.clone()),
            MeshMaterial2d(cloud_mat.clone()),
            Transform::from_translation(layout.to_world(center).extend(Z_CLOUDS))
                .with_scale(Vec3::splat(radius * 2.0)),
            Visibility::Hidden,
            SceneryPart::Cloud,
        ));
    }
    commands.spawn((
        Sprite::from_color(Color::BLACK, layout.ground_band_size()),
        Transform::from_translation(layout.ground_band_center_world().extend(Z_GROUND)),
        GroundBand,
    ));
    commands.insert_resource(SceneryMeshes {
        circle,
        crater: materials.add(rgb(CRATER)),
    });
    info!("Scenery spawned ({} ray segments, {} cloud puffs)", RAY_COUNT, CLOUD_ORIGINS.len() * CLOUD_PUFFS.len());
}

/// Restyles the scene when the selected planet changes (and once on the first frame).
#[allow(clippy::too_many_arguments)]
fn apply_planet_scenery(
    mut commands: Commands,
    mut last: Local<Option<PlanetId>>,
    sim: Res<DropSimulator>,
    cfg: Option<Res<GameConfig>>,
    layout: Res<SceneLayout>,
    meshes: Option<Res<SceneryMeshes>>,
    mut field: ResMut<CraterField>,
    mut clear: ResMut<ClearColor>,
    mut parts: Query<(&SceneryPart, &mut Visibility)>,
    mut ground: Query<&mut Sprite, With<GroundBand>>,
    craters: Query<Entity, With<CraterMark>>,
) {
    let planet = sim.planet();
    if *last == Some(planet) {
        return;
    }
    let first_frame = last.is_none();
    *last = Some(planet);

    let variant = variant_of(cfg.as_deref());
    let features = scenery_for(variant, planet);
    clear.0 = palette::sky_color(planet);
    for (part, mut vis) in &mut parts {
        *vis = if features.shows(*part) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
    for mut sprite in &mut ground {
        sprite.color = palette::ground_color(variant, planet);
    }

    for e in &craters {
        commands.entity(e).despawn();
    }
    // Craters are rolled on switching to the Moon, not for a Moon start.
    if !features.craters || first_frame {
        field.0.clear();
        return;
    }
    *field = CraterField::generate(&mut rand::thread_rng(), &layout);
    let Some(meshes) = meshes else {
        return;
    };
    for crater in &field.0 {
        commands.spawn((
            Mesh2d(meshes.circle.clone()),
            MeshMaterial2d(meshes.crater.clone()),
            Transform::from_translation(layout.to_world(crater.center).extend(Z_CRATERS))
                .with_scale(Vec3::splat(crater.radius * 2.0)),
            CraterMark,
        ));
    }
    debug!("Scenery: {} craters placed on {planet}", field.0.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn extended_scenery_per_planet() {
        let v = SimulationVariant::Extended;
        let earth = scenery_for(v, PlanetId::EARTH);
        assert!(earth.sun && earth.sun_rays && earth.clouds && !earth.craters);
        let moon = scenery_for(v, PlanetId::MOON);
        assert_eq!(
            moon,
            SceneryFeatures {
                craters: true,
                ..default()
            }
        );
        for p in [PlanetId::MARS, PlanetId::JUPITER] {
            let f = scenery_for(v, p);
            assert!(f.sun && f.sun_rays && !f.clouds && !f.craters);
        }
        assert_eq!(scenery_for(v, PlanetId::SUN), SceneryFeatures::default());
    }

    #[test]
    fn classic_draws_sun_everywhere_but_the_sun() {
        let v = SimulationVariant::Classic;
        for p in PlanetId::all() {
            let f = scenery_for(v, p);
            assert_eq!(f.sun, p != PlanetId::SUN, "{p}");
            assert!(!f.sun_rays && !f.craters);
            assert_eq!(f.clouds, p == PlanetId::EARTH);
        }
    }

    #[test]
    fn ray_geometry() {
        let rays: Vec<_> = sun_rays().collect();
        assert_eq!(rays.len(), 12);
        let (start, end) = rays[0];
        assert!((start - Vec2::new(140.0, 80.0)).length() < 1e-4);
        assert!((end - Vec2::new(150.0, 80.0)).length() < 1e-4);
        // 90 degrees points down the screen
        let (start, _) = rays[3];
        assert!((start - Vec2::new(80.0, 140.0)).length() < 1e-3);
        for (s, e) in rays {
            assert!(((e - s).length() - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn twelve_cloud_puffs() {
        let puffs: Vec<_> = cloud_puffs().collect();
        assert_eq!(puffs.len(), 12);
        assert_eq!(puffs[0], (Vec2::new(120.0, 130.0), 30.0));
        assert_eq!(puffs[1], (Vec2::new(150.0, 140.0), 40.0));
        assert_eq!(puffs[11], (Vec2::new(515.0, 110.0), 30.0));
    }

    #[test]
    fn craters_stay_on_the_ground_band() {
        let layout = SceneLayout::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let field = CraterField::generate(&mut rng, &layout);
            assert_eq!(field.0.len(), CRATER_COUNT);
            for c in &field.0 {
                assert!((50.0..=750.0).contains(&c.center.x));
                assert!((555.0..=570.0).contains(&c.center.y));
                assert!((10.0..=20.0).contains(&c.radius));
                assert_eq!(c.center.x.fract(), 0.0);
            }
        }
    }

    #[test]
    fn crater_fields_differ_between_visits() {
        let layout = SceneLayout::default();
        let mut rng = StdRng::seed_from_u64(42);
        let a = CraterField::generate(&mut rng, &layout);
        let b = CraterField::generate(&mut rng, &layout);
        assert_ne!(a.0, b.0);
    }
}
