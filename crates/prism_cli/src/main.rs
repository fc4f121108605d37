use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::ColorType;
use prism_renderer::{random_scene, render, Camera, ImageBuffer, RenderConfig, SceneConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    log::info!("prism {}", env!("CARGO_PKG_VERSION"));

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples,
        max_depth: args.max_depth,
        seed: args.seed,
        bucket_size: args.bucket_size,
        threads: args.threads,
    };
    config.validate().context("Invalid render settings")?;

    // Build the scene
    let start = Instant::now();
    let mut scene_rng = StdRng::seed_from_u64(args.seed);
    let world = random_scene(
        &SceneConfig {
            grid_extent: args.grid_extent,
        },
        &mut scene_rng,
    );
    log::info!("Scene with {} spheres built in {:?}", world.len(), start.elapsed());

    let camera = Camera::new(
        args.look_from,
        args.look_at,
        args.vup,
        args.vfov,
        config.aspect_ratio(),
    );

    let image = render(&camera, &world, &config).context("Render failed")?;

    save_image(&image, &args.output)?;
    log::info!("Saved to {}", args.output.display());
    Ok(())
}

fn save_image(image: &ImageBuffer, path: &std::path::Path) -> Result<()> {
    image::save_buffer(path, image.as_bytes(), image.width, image.height, ColorType::Rgba8)
        .with_context(|| format!("Failed to write {}", path.display()))
}
