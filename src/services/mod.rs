//! Service layer for keyword matrix logic.
//!
//! This module contains the spiral layout generator and the data providers
//! the web layer reads from.

pub mod repository;
pub mod spiral;

// Re-export commonly used types and functions
pub use repository::{InMemoryKeywordRepository, KeywordRepository};
pub use spiral::{generate_keywords, spiral_point};
