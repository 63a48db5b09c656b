//! Keyword Matrix Library
//!
//! This library provides the keyword matrix catalog, the golden-angle spiral
//! layout that positions keywords on a sphere, and (with the `web` feature) the
//! REST API serving them to the 3D globe frontend.

// Module declarations
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
#[cfg(feature = "web")]
pub mod web;
