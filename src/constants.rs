//! Application-wide constants.
//!
//! This module defines the service identity and the fixed figures reported by
//! the keyword matrix endpoints.

/// The display name of the service (reported by the health endpoint).
pub const SERVICE_NAME: &str = "HEAL7 Keywords Matrix";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "keyword-matrix";

/// Public domain the service is deployed behind.
pub const SERVICE_DOMAIN: &str = "keywords.heal7.com";

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8003;

/// Default number of runtime worker threads.
pub const DEFAULT_WORKERS: usize = 1;

/// Default location of the prebuilt frontend bundle, relative to the working directory.
pub const DEFAULT_STATIC_DIR: &str = "frontend/out";

/// Number of keywords in the matrix.
pub const TOTAL_KEYWORDS: u32 = 442;

/// Radius of the sphere the keywords are laid out on.
pub const SPHERE_RADIUS: f64 = 3.0;

/// Connection count reported by the summary endpoints.
pub const TOTAL_CONNECTIONS: u32 = 1247;

/// Network density reported by the matrix summary.
pub const NETWORK_DENSITY: f64 = 0.85;

/// Data source tag reported by the matrix summary.
pub const DATA_SOURCE: &str = "keywords_service_direct";

/// Cache status reported by the stats endpoint. No cache exists.
pub const CACHE_STATUS: &str = "active";
