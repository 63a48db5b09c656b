//! Shared test fixtures for web API tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use anyhow::{bail, Result};
use keyword_matrix::config::Config;
use keyword_matrix::models::{KeywordPoint, KeywordStats, MatrixSummary};
use keyword_matrix::services::KeywordRepository;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a default config whose frontend bundle directory does not exist.
pub fn config_without_bundle(temp_dir: &TempDir) -> Config {
    let mut config = Config::new();
    config.frontend.static_dir = temp_dir.path().join("no-such-bundle");
    config
}

/// Creates a default config pointing at a minimal static export in `temp_dir`.
///
/// Layout:
/// - `index.html`
/// - `404.html`
/// - `globe/index.html`
/// - `about.html`
/// - `_next/static/chunks/main.js`
pub fn config_with_bundle(temp_dir: &TempDir) -> Config {
    let root = temp_dir.path().join("out");
    write_file(&root.join("index.html"), "<html>home</html>");
    write_file(&root.join("404.html"), "<html>missing</html>");
    write_file(&root.join("globe/index.html"), "<html>globe</html>");
    write_file(&root.join("about.html"), "<html>about</html>");
    write_file(&root.join("_next/static/chunks/main.js"), "console.log(1);");
    write_file(&temp_dir.path().join("secret.txt"), "top secret");

    let mut config = Config::new();
    config.frontend.static_dir = root;
    config
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}

/// Repository whose every call fails, standing in for an unreachable backing store.
pub struct FailingRepository;

impl KeywordRepository for FailingRepository {
    fn matrix_summary(&self) -> Result<MatrixSummary> {
        bail!("keyword store unavailable")
    }

    fn stats(&self) -> Result<KeywordStats> {
        bail!("keyword store unavailable")
    }

    fn all_keywords(&self) -> Result<Vec<KeywordPoint>> {
        bail!("keyword store unavailable")
    }
}
