//! `gilded-rose-core` — domain building blocks shared by the inventory crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod quality;

pub use error::{DomainError, DomainResult};
pub use quality::{MAX_QUALITY, MIN_QUALITY, adjust_quality, clamp};
