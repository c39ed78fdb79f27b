//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into core
//! services as a value. Environment variables are read only in the binaries,
//! never during request handling.

use crate::error::{ReviewError, ReviewResult};
use crate::DEFAULT_REVIEWS_PATH;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    reviews_path: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(reviews_path: PathBuf) -> ReviewResult<Self> {
        if reviews_path.as_os_str().is_empty() {
            return Err(ReviewError::InvalidInput(
                "reviews path cannot be empty".into(),
            ));
        }
        Ok(Self { reviews_path })
    }

    pub fn reviews_path(&self) -> &Path {
        &self.reviews_path
    }
}

/// Resolve the review collection file without reading environment variables.
///
/// If `override_path` is provided it must point at an existing file.
/// Otherwise this looks for `data/reviews.json` relative to the current
/// working directory and then walks up from `CARGO_MANIFEST_DIR`.
pub fn resolve_reviews_path(override_path: Option<PathBuf>) -> ReviewResult<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(path);
        }
        return Err(ReviewError::InvalidInput(format!(
            "reviews path override is not a file: {}",
            path.display()
        )));
    }

    let cwd_relative = PathBuf::from(DEFAULT_REVIEWS_PATH);
    if cwd_relative.is_file() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DEFAULT_REVIEWS_PATH);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(ReviewError::InvalidInput(format!(
        "could not locate {DEFAULT_REVIEWS_PATH}"
    )))
}
