use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prism_math::Vec3;
use std::path::PathBuf;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render the random sphere scene to an image file
#[derive(Debug, Parser)]
#[command(name = "prism", version, about)]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 200)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 10)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = prism_renderer::DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Seed for the scene layout and every pixel's sample stream
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Worker threads (defaults to all cores)
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Edge length of render buckets in pixels
    #[arg(long, default_value_t = prism_renderer::DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 15.0)]
    pub vfov: f32,

    /// Eye position as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "10,1.5,-5")]
    pub look_from: Vec3,

    /// Point the camera faces as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,0,0")]
    pub look_at: Vec3,

    /// Camera up hint as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,-1,0")]
    pub vup: Vec3,

    /// Half-extent of the small sphere grid
    #[arg(long, default_value_t = 2)]
    pub grid_extent: i32,

    /// Output file; the format follows the extension (.png, .bmp, .tiff, ...)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Parse "x,y,z" into a vector.
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("invalid component '{}': {}", p, e)))
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected three comma-separated numbers, got {}", parts.len())),
    }
}
