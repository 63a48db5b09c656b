//! Keyword point and summary records served by the API.

use serde::Serialize;
use std::collections::BTreeMap;

/// A point in 3D space, each axis rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// X coordinate
    pub x: f64,
    /// Y coordinate (vertical axis of the spiral)
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared distance from the origin.
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.x.mul_add(self.x, self.y.mul_add(self.y, self.z * self.z))
    }
}

/// A single keyword of the matrix, derived on every request.
///
/// Field names on the wire follow the frontend's expectations, hence the renames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordPoint {
    /// 1-based sequential id.
    pub id: u32,
    /// Label in the form `<display_name>_<NN>`.
    #[serde(rename = "keyword")]
    pub label: String,
    /// Code of the owning subcategory (e.g. "A-1").
    #[serde(rename = "subcategory_name")]
    pub subcategory_code: String,
    /// Cyclic weight in [5.0, 9.8].
    pub weight: f64,
    /// Always true.
    #[serde(rename = "is_active")]
    pub active: bool,
    /// Reserved; always empty.
    #[serde(rename = "dependencies")]
    pub dependency_ids: Vec<u32>,
    /// Position on the radius-3 sphere.
    pub position: Position,
    /// Hex color inherited from the subcategory.
    pub color: String,
}

/// Per-category entry in the matrix summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Category display name.
    pub name: String,
    /// Number of keywords in the category.
    pub count: u32,
}

/// Response of `GET /api/keywords/matrix`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixSummary {
    /// Total keyword count.
    pub total_keywords: u32,
    /// Active keyword count.
    pub active_keywords: u32,
    /// Reported connection count.
    pub total_connections: u32,
    /// Reported network density.
    pub network_density: f64,
    /// Category breakdown keyed by category code.
    pub categories: BTreeMap<String, CategorySummary>,
    /// Generation timestamp (local time, ISO-8601).
    pub last_updated: String,
    /// Where the data came from.
    pub data_source: String,
}

/// Response of `GET /api/keywords/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordStats {
    /// Total keyword count.
    pub total_keywords: u32,
    /// Active keyword count.
    pub active_keywords: u32,
    /// Reported dependency count.
    pub total_dependencies: u32,
    /// Keyword count per category code.
    pub category_distribution: BTreeMap<String, u32>,
    /// Reported cache status.
    pub cache_status: String,
}
