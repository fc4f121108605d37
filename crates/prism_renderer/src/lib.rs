//! Prism - CPU path tracing for sphere scenes.
//!
//! A Monte Carlo path tracer over a flat list of spheres with diffuse,
//! metallic and dielectric materials. The renderer produces an RGBA8
//! buffer; writing it to disk is left to the caller.

mod bucket;
mod camera;
mod error;
mod hittable;
mod material;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList, Shape};
pub use material::{Color, Material, Scatter};
pub use renderer::{
    color_to_rgba, linear_to_gamma, ray_color, render, render_image, render_pixel, sky_gradient,
    ImageBuffer, RenderConfig, Rgba8, DEFAULT_MAX_DEPTH, HIT_EPSILON,
};
pub use sampling::{gen_f32, pixel_rng, random_in_unit_sphere};
pub use scene::{default_camera, random_scene, SceneConfig, GLASS_IOR};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Interval, Ray, Vec3};
