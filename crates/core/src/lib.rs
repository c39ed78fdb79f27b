//! # Praxis Core
//!
//! Core logic for the practitioner-site review service.
//!
//! This crate contains pure data operations and the static review catalog:
//! - Review text segmentation into named sections
//! - Loading the curated review collection from JSON
//! - Rendering review cards for display
//!
//! **No API concerns**: HTTP servers and request/response shapes belong in
//! `api-rest`; command-line handling belongs in `praxis-cli`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod markers;
pub mod pager;
pub mod render;
pub mod review;
pub mod segmenter;

pub use catalog::ReviewCatalog;
pub use config::CoreConfig;
pub use error::{ReviewError, ReviewResult};
pub use pager::Pager;
pub use render::CardRenderer;
pub use review::{ParsedReview, ReviewRecord};
pub use segmenter::segment;

/// Default location of the review collection, relative to the workspace root.
pub const DEFAULT_REVIEWS_PATH: &str = "data/reviews.json";
