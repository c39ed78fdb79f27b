//! # API REST
//!
//! REST API for the practitioner-site review service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Core logic lives in `praxis-core`; this crate only shapes it for HTTP.

#![warn(rust_2018_idioms)]

pub mod dto;
