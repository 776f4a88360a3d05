//! Test function implementations organized by category
//!
//! This module contains the catalog's functions organized into logical groups:
//! - `multimodal`: the classic many-local-minima functions
//! - `modern`: recent benchmark functions from the research literature

pub mod modern;
pub mod multimodal;

// Re-export all functions for easy access
pub use modern::*;
pub use multimodal::*;
