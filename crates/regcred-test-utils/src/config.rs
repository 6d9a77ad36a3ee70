//! `config.json` fixtures.

use std::fs;
use std::path::{Path, PathBuf};

/// Write `content` as `config.json` inside `dir` and return the file path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join("config.json");
    fs::write(&path, content).unwrap();
    path
}
