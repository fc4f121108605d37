//! Render configuration errors.

use thiserror::Error;

/// Errors that can occur before or while dispatching a render.
///
/// The light transport itself has no failure modes; these cover
/// configurations that cannot produce an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    ZeroSamples,

    #[error("Bucket size must be at least 1 pixel")]
    ZeroBucketSize,

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
