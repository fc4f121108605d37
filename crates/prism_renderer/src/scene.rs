//! Procedural sphere scene and its default viewpoint.

use std::sync::Arc;

use crate::sampling::gen_f32;
use crate::{Camera, Color, HittableList, Material, Sphere};
use prism_math::Vec3;
use rand::RngCore;

/// Radius of the small grid spheres.
const SMALL_RADIUS: f32 = 0.2;

/// Radius of the three feature spheres.
const HERO_RADIUS: f32 = 0.7;

/// Grid spheres closer than this to `RESERVED_POINT` are skipped.
const RESERVED_CLEARANCE: f32 = 0.9;

const RESERVED_POINT: Vec3 = Vec3::new(4.0, SMALL_RADIUS, 0.0);

/// Index of refraction used for every glass sphere.
pub const GLASS_IOR: f32 = 1.5;

/// Layout parameters for [`random_scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    /// Grid cells span `-grid_extent..=grid_extent` on both axes
    pub grid_extent: i32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { grid_extent: 2 }
    }
}

/// Build the random sphere field.
///
/// The structure is fixed (ground, jittered grid, three feature spheres);
/// positions and materials of the grid spheres come from `rng`.
pub fn random_scene(config: &SceneConfig, rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();

    // Ground
    world.add(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5))),
    ));

    let glass = Arc::new(Material::dielectric(GLASS_IOR));

    for a in -config.grid_extent..=config.grid_extent {
        for b in -config.grid_extent..=config.grid_extent {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                SMALL_RADIUS,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - RESERVED_POINT).length() <= RESERVED_CLEARANCE {
                continue;
            }

            let material = if choose_mat < 0.8 {
                // Diffuse
                let albedo = Color::new(
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                );
                Arc::new(Material::lambertian(albedo))
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = Color::new(
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                );
                let fuzz = 0.5 * gen_f32(rng);
                Arc::new(Material::metal(albedo, fuzz))
            } else {
                // Glass
                glass.clone()
            };

            world.add(Sphere::new(center, SMALL_RADIUS, material));
        }
    }

    // Three feature spheres
    world.add(Sphere::new(Vec3::new(0.0, HERO_RADIUS, 0.0), HERO_RADIUS, glass));
    world.add(Sphere::new(
        Vec3::new(-3.0, HERO_RADIUS, 0.0),
        HERO_RADIUS,
        Arc::new(Material::lambertian(Color::new(0.4, 0.2, 0.1))),
    ));
    world.add(Sphere::new(
        Vec3::new(3.0, HERO_RADIUS, 0.0),
        HERO_RADIUS,
        Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0)),
    ));

    log::debug!("Built random scene with {} spheres", world.len());
    world
}

/// Camera framing [`random_scene`].
///
/// The up vector points down so that row 0 of the buffer is the top of the
/// image when written top-to-bottom.
pub fn default_camera(aspect: f32) -> Camera {
    Camera::new(
        Vec3::new(10.0, 1.5, -5.0),
        Vec3::ZERO,
        Vec3::new(0.0, -1.0, 0.0),
        15.0,
        aspect,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Interval, Ray, Shape};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spheres(world: &HittableList) -> Vec<&Sphere> {
        world
            .iter()
            .map(|shape| match shape {
                Shape::Sphere(sphere) => sphere,
            })
            .collect()
    }

    #[test]
    fn test_scene_structure() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = random_scene(&SceneConfig::default(), &mut rng);
        let all = spheres(&world);

        // Ground + at most 25 grid spheres + 3 feature spheres
        assert!(all.len() >= 4 && all.len() <= 29);
        assert_eq!(all[0].radius(), 1000.0);

        let heroes = &all[all.len() - 3..];
        assert!(matches!(heroes[0].material(), Material::Dielectric { .. }));
        assert_eq!(heroes[1].material(), &Material::lambertian(Color::new(0.4, 0.2, 0.1)));
        assert!(matches!(heroes[2].material(), Material::Metal { fuzz, .. } if *fuzz == 0.0));
    }

    #[test]
    fn test_grid_spheres_respect_reserved_point() {
        let mut rng = StdRng::seed_from_u64(9);
        let world = random_scene(&SceneConfig { grid_extent: 6 }, &mut rng);
        let all = spheres(&world);

        for sphere in &all[1..all.len() - 3] {
            assert_eq!(sphere.radius(), SMALL_RADIUS);
            assert!((sphere.center() - RESERVED_POINT).length() > RESERVED_CLEARANCE);
        }
    }

    #[test]
    fn test_grid_materials_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let world = random_scene(&SceneConfig { grid_extent: 8 }, &mut rng);
        let all = spheres(&world);

        for sphere in &all[1..all.len() - 3] {
            match sphere.material() {
                Material::Lambertian { albedo } => {
                    assert!(albedo.min_element() >= 0.0 && albedo.max_element() < 1.0);
                }
                Material::Metal { albedo, fuzz } => {
                    assert!(albedo.min_element() >= 0.5 && albedo.max_element() <= 1.0);
                    assert!((0.0..0.5).contains(fuzz));
                }
                Material::Dielectric { ior } => assert_eq!(*ior, GLASS_IOR),
            }
        }
    }

    #[test]
    fn test_scene_is_seeded() {
        let a = random_scene(&SceneConfig::default(), &mut StdRng::seed_from_u64(5));
        let b = random_scene(&SceneConfig::default(), &mut StdRng::seed_from_u64(5));
        let centers = |w: &HittableList| spheres(w).iter().map(|s| s.center()).collect::<Vec<_>>();
        assert_eq!(centers(&a), centers(&b));
    }

    #[test]
    fn test_default_camera_sees_feature_sphere() {
        let mut rng = StdRng::seed_from_u64(1);
        let world = random_scene(&SceneConfig::default(), &mut rng);
        let camera = default_camera(2.0);

        let ray: Ray = camera.get_ray(0.5, 0.5);
        let rec = world.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!(rec.t > 0.0);
    }
}
