//! HTTP REST API
//!
//! Thin dispatch to the booking core:
//! - `common`: response envelope and validated JSON extractor
//! - `middleware`: Basic-auth admin gating
//! - `modules`: per-resource handlers and DTOs
//! - `router`: API router with OpenAPI document

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use common::{ApiResponse, ValidatedJson};
pub use router::create_api_router;
