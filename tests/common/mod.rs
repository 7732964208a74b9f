#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const ESC: char = '\u{1b}';
pub const DLE: char = '\u{10}';

pub const FONT_GUID: &str = "CAFE000000000000000000000000F00D";

/// Creates an `assert_cmd` Command for the pic-chart binary.
#[macro_export]
macro_rules! pic_chart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pic-chart"))
    };
}

/// Creates a temporary directory holding property, symbol and options files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes a file and returns its full path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `chart.props` from `name=value` pairs.
    pub fn create_properties(&self, pairs: &[(&str, &str)]) -> PathBuf {
        self.create_file("chart.props", &table(pairs))
    }

    /// Writes `chart.syms` from `name=value` pairs.
    pub fn create_symbols(&self, pairs: &[(&str, &str)]) -> PathBuf {
        self.create_file("chart.syms", &table(pairs))
    }

    /// Writes an options file picked up by discovery in this directory.
    pub fn create_options(&self, content: &str) -> PathBuf {
        self.create_file(".pic-chart.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

fn table(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}\n"))
        .collect()
}
