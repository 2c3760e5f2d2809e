//! langid Core
//!
//! Shared types and utilities for the langid workspace.
//!
//! This crate provides:
//! - The workspace error type and result alias
//! - The language prediction type returned by every inference surface
//! - Helpers for fastText's `__label__` marker format

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{format_label, round_confidence, strip_label, LanguagePrediction, LABEL_PREFIX};
