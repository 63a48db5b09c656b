//! Keyword data providers.
//!
//! Handlers talk to a [`KeywordRepository`] rather than building responses
//! themselves, so a real backing store can replace the in-memory catalog
//! without touching the web layer.

use anyhow::{ensure, Result};
use chrono::{Local, NaiveDateTime, Timelike};

use crate::constants::{
    CACHE_STATUS, DATA_SOURCE, NETWORK_DENSITY, TOTAL_CONNECTIONS, TOTAL_KEYWORDS,
};
use crate::models::{
    Category, CategorySummary, KeywordPoint, KeywordStats, MatrixSummary, Subcategory, CATEGORIES,
    SUBCATEGORIES,
};
use crate::services::spiral::generate_keywords;

/// Source of keyword matrix data.
pub trait KeywordRepository: Send + Sync {
    /// Returns the matrix summary (totals, category breakdown, timestamp).
    fn matrix_summary(&self) -> Result<MatrixSummary>;

    /// Returns keyword statistics.
    fn stats(&self) -> Result<KeywordStats>;

    /// Returns every keyword point in id order.
    fn all_keywords(&self) -> Result<Vec<KeywordPoint>>;
}

/// Repository backed by the static catalog and the spiral layout.
///
/// Holds no mutable state; every call rebuilds its answer.
#[derive(Debug, Clone, Copy)]
pub struct InMemoryKeywordRepository {
    subcategories: &'static [Subcategory],
    categories: &'static [Category],
}

impl InMemoryKeywordRepository {
    /// Creates a repository over the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subcategories: &SUBCATEGORIES,
            categories: &CATEGORIES,
        }
    }
}

impl Default for InMemoryKeywordRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Current local time in ISO-8601. See [`format_timestamp`].
pub fn local_timestamp() -> String {
    format_timestamp(Local::now().naive_local())
}

/// Formats `time` as ISO-8601 without an offset.
///
/// Microseconds are printed only when non-zero; a whole second ends at `SS`.
pub fn format_timestamp(time: NaiveDateTime) -> String {
    if time.nanosecond() / 1_000 == 0 {
        time.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

impl KeywordRepository for InMemoryKeywordRepository {
    fn matrix_summary(&self) -> Result<MatrixSummary> {
        let categories = self
            .categories
            .iter()
            .map(|category| {
                (
                    category.code.to_string(),
                    CategorySummary {
                        name: category.name.to_string(),
                        count: category.count,
                    },
                )
            })
            .collect();

        Ok(MatrixSummary {
            total_keywords: TOTAL_KEYWORDS,
            active_keywords: TOTAL_KEYWORDS,
            total_connections: TOTAL_CONNECTIONS,
            network_density: NETWORK_DENSITY,
            categories,
            last_updated: local_timestamp(),
            data_source: DATA_SOURCE.to_string(),
        })
    }

    fn stats(&self) -> Result<KeywordStats> {
        let category_distribution = self
            .categories
            .iter()
            .map(|category| (category.code.to_string(), category.count))
            .collect();

        Ok(KeywordStats {
            total_keywords: TOTAL_KEYWORDS,
            active_keywords: TOTAL_KEYWORDS,
            total_dependencies: TOTAL_CONNECTIONS,
            category_distribution,
            cache_status: CACHE_STATUS.to_string(),
        })
    }

    fn all_keywords(&self) -> Result<Vec<KeywordPoint>> {
        let points = generate_keywords(self.subcategories);
        ensure!(
            points.len() == TOTAL_KEYWORDS as usize,
            "Expected {} keywords, generated {}",
            TOTAL_KEYWORDS,
            points.len()
        );
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    #[test]
    fn test_matrix_summary() {
        let summary = InMemoryKeywordRepository::new().matrix_summary().unwrap();
        assert_eq!(summary.total_keywords, 442);
        assert_eq!(summary.active_keywords, 442);
        assert_eq!(summary.total_connections, 1247);
        assert_eq!(summary.categories["A"].count, 176);
        assert_eq!(summary.categories["B"].name, "신경과학적");
        assert_eq!(summary.data_source, "keywords_service_direct");
        assert!(chrono::NaiveDateTime::parse_from_str(
            &summary.last_updated,
            "%Y-%m-%dT%H:%M:%S%.f"
        )
        .is_ok());
    }

    #[test]
    fn test_format_timestamp_with_microseconds() {
        let time = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_micro_opt(9, 26, 53, 589_793)
            .unwrap();
        assert_eq!(format_timestamp(time), "2025-03-14T09:26:53.589793");

        let time = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_micro_opt(9, 26, 53, 7)
            .unwrap();
        assert_eq!(format_timestamp(time), "2025-03-14T09:26:53.000007");
    }

    #[test]
    fn test_format_timestamp_whole_second() {
        let time = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap();
        assert_eq!(format_timestamp(time), "2025-03-14T09:26:53");

        // Sub-microsecond remainders are truncated away
        let time = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_nano_opt(9, 26, 53, 999)
            .unwrap();
        assert_eq!(format_timestamp(time), "2025-03-14T09:26:53");
    }

    #[test]
    fn test_stats_distribution() {
        let stats = InMemoryKeywordRepository::new().stats().unwrap();
        let total: u32 = stats.category_distribution.values().sum();
        assert_eq!(total, stats.total_keywords);
        assert_eq!(stats.category_distribution["C"], 139);
        assert_eq!(stats.cache_status, "active");
    }

    #[test]
    fn test_all_keywords_ids_contiguous() {
        let points = InMemoryKeywordRepository::new().all_keywords().unwrap();
        let ids: BTreeSet<u32> = points.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 442);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&442));
    }
}
