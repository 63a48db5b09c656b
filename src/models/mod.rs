//! Data models for the keyword matrix.
//!
//! This module contains the static keyword catalog and the records served by the API.
//! Models are independent of the web layer.

pub mod category;
pub mod keyword;

// Re-export all model types
pub use category::{
    category_counts, find_subcategory, total_keyword_count, Category, Subcategory, CATEGORIES,
    SUBCATEGORIES,
};
pub use keyword::{CategorySummary, KeywordPoint, KeywordStats, MatrixSummary, Position};
