//! Surface materials and their scattering behavior.

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_in_unit_sphere};
use prism_math::{reflect, refract, Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scatter event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Multiplicative color applied to light arriving along `scattered`
    pub attenuation: Color,
    /// The continuation ray, starting at the hit point
    pub scattered: Ray,
}

/// How light interacts with a surface.
///
/// Materials are immutable once built and are shared between spheres
/// through `Arc<Material>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Ideal diffuse reflector.
    Lambertian { albedo: Color },
    /// Mirror-like reflector; `fuzz` blurs the reflection (0 = perfect mirror).
    Metal { albedo: Color, fuzz: f32 },
    /// Clear refractive medium such as glass.
    Dielectric { ior: f32 },
}

impl Material {
    /// Create a Lambertian material with the given albedo color.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Create a Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        let clamped = fuzz.clamp(0.0, 1.0);
        if clamped != fuzz {
            log::warn!("Metal fuzz {} clamped to {}", fuzz, clamped);
        }
        Material::Metal {
            albedo,
            fuzz: clamped,
        }
    }

    /// Create a Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn dielectric(ior: f32) -> Self {
        Material::Dielectric { ior }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(&self, ray_in: &Ray, rec: &HitRecord<'_>, rng: &mut dyn RngCore) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => {
                let direction = rec.normal + random_in_unit_sphere(rng);
                Some(Scatter {
                    attenuation: albedo,
                    scattered: Ray::new(rec.p, direction),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(ray_in.direction().normalize_or_zero(), rec.normal);
                let direction = reflected + fuzz * random_in_unit_sphere(rng);

                // Reflections that point into the surface are absorbed
                if direction.dot(rec.normal) > 0.0 {
                    Some(Scatter {
                        attenuation: albedo,
                        scattered: Ray::new(rec.p, direction),
                    })
                } else {
                    None
                }
            }
            Material::Dielectric { ior } => Some(scatter_dielectric(ior, ray_in, rec, rng)),
        }
    }
}

fn scatter_dielectric(ior: f32, ray_in: &Ray, rec: &HitRecord<'_>, rng: &mut dyn RngCore) -> Scatter {
    let direction = ray_in.direction();
    let d_dot_n = direction.dot(rec.normal);

    // Outward normals: a positive dot product means the ray is leaving the medium
    let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
        (-rec.normal, ior, ior * d_dot_n / direction.length())
    } else {
        (rec.normal, 1.0 / ior, -d_dot_n / direction.length())
    };

    let reflected = reflect(direction, rec.normal);
    let scattered_dir = match refract(direction, outward_normal, ni_over_nt) {
        Some(refracted) if gen_f32(rng) >= schlick(cosine, ior) => refracted,
        _ => reflected,
    };

    Scatter {
        attenuation: Color::ONE,
        scattered: Ray::new(rec.p, scattered_dir),
    }
}

/// Schlick's approximation for reflectance
fn schlick(cosine: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
