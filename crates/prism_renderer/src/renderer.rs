//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a hard depth ceiling
//! - Gamma correction
//! - Anti-aliasing via multi-sampling
//! - Bucket-parallel rendering with per-pixel random streams

use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::sampling::{gen_f32, pixel_rng};
use crate::scene::{default_camera, random_scene, SceneConfig};
use crate::{Camera, Color, Hittable, RenderError, RenderResult};
use bytemuck::{Pod, Zeroable};
use prism_math::{Interval, Ray};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Default maximum bounce depth.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Minimum hit distance; avoids shadow acne from self-intersection.
pub const HIT_EPSILON: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for every per-pixel random stream
    pub seed: u64,
    /// Edge length of the square render buckets
    pub bucket_size: u32,
    /// Worker threads; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 200,
            samples_per_pixel: 10,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
            threads: None,
        }
    }
}

impl RenderConfig {
    /// Image width / height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::ZeroSamples);
        }
        if self.bucket_size == 0 {
            return Err(RenderError::ZeroBucketSize);
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. `depth` counts bounces taken so
/// far; once it reaches `config.max_depth` any further hit is black.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(HIT_EPSILON, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    if depth < config.max_depth {
        if let Some(scatter) = rec.material.scatter(ray, &rec, rng) {
            return scatter.attenuation * ray_color(&scatter.scattered, world, depth + 1, config, rng);
        }
    }

    // Absorbed or out of bounces
    Color::ZERO
}

/// Compute sky gradient background.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize_or_zero();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// One RGBA8 pixel. Alpha is always opaque.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0);

    /// Create an opaque pixel.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Convert a linear color to an 8-bit pixel.
///
/// Channels are gamma corrected and clamped to [0, 1] before scaling, so
/// out-of-range radiance saturates instead of wrapping.
pub fn color_to_rgba(color: Color) -> Rgba8 {
    let to_byte = |c: f32| (255.0 * Interval::UNIT.clamp(linear_to_gamma(c))) as u8;
    Rgba8::new(to_byte(color.x), to_byte(color.y), to_byte(color.z))
}

/// Render a single pixel with multi-sampling.
///
/// The pixel draws from its own generator, so its value does not depend on
/// which thread renders it or in what order.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let mut rng = pixel_rng(config.seed, x, y);
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (x as f32 + gen_f32(&mut rng)) / config.width as f32;
        let t = (y as f32 + gen_f32(&mut rng)) / config.height as f32;
        let ray = camera.get_ray(s, t);
        pixel_color += ray_color(&ray, world, 0, config, &mut rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Row-major RGBA8 image, indexed `x + y * width`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::BLACK; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgba8) {
        let index = self.index(x, y);
        self.pixels[index] = pixel;
    }

    /// Copy a rendered bucket into its region of the image.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let i = i as u32;
            let x = bucket.x + i % bucket.width;
            let y = bucket.y + i / bucket.width;
            self.set(x, y, color_to_rgba(*color));
        }
    }

    /// Interleaved RGBA bytes (for display or saving).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are rendered in parallel; each pixel is written exactly once.
pub fn render(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    config.validate()?;

    let buckets = generate_buckets(config.width, config.height, config.bucket_size);
    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} buckets",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth,
        buckets.len()
    );
    let start = Instant::now();

    let render_all = || -> Vec<BucketResult> {
        buckets
            .into_par_iter()
            .map(|bucket| {
                let pixels = render_bucket(&bucket, camera, world, config);
                log::debug!("Bucket {} done ({} px)", bucket.index, pixels.len());
                BucketResult::new(bucket, pixels)
            })
            .collect()
    };

    let results = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(render_all),
        None => render_all(),
    };

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Build the default random scene and render it from the default viewpoint.
pub fn render_image(width: u32, height: u32, samples_per_pixel: u32, seed: u64) -> RenderResult<ImageBuffer> {
    let config = RenderConfig {
        width,
        height,
        samples_per_pixel,
        seed,
        ..Default::default()
    };
    config.validate()?;

    let mut scene_rng = StdRng::seed_from_u64(seed);
    let world = random_scene(&SceneConfig::default(), &mut scene_rng);
    let camera = default_camera(config.aspect_ratio());

    render(&camera, &world, &config)
}
