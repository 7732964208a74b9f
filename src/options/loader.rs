use std::path::{Path, PathBuf};

use crate::{PicError, Result};

use super::Options;
use super::validation::validate_options;

/// Trait for loading options from various sources.
pub trait OptionsLoader {
    /// Load options from the default locations.
    ///
    /// # Errors
    /// Returns an error if an options file exists but cannot be read or parsed.
    fn load(&self) -> Result<Options>;

    /// Load options from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Options>;
}

const LOCAL_OPTIONS_NAME: &str = ".pic-chart.toml";
const USER_OPTIONS_NAME: &str = "config.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory for pic-chart.
    ///
    /// - Windows: `%APPDATA%\pic-chart`
    /// - macOS: `~/Library/Application Support/pic-chart`
    /// - Linux: `~/.config/pic-chart` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pic-chart")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads options from the filesystem.
///
/// Search order:
/// 1. `.pic-chart.toml` in current directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. Returns `Options::default()` if no file is found
#[derive(Debug)]
pub struct FileOptionsLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileOptionsLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOptionsLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileOptionsLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_options_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_OPTIONS_NAME))
    }

    fn user_options_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_OPTIONS_NAME))
    }

    fn parse_options(content: &str) -> Result<Options> {
        let options: Options = toml::from_str(content)?;
        validate_options(&options)?;
        Ok(options)
    }
}

impl<F: FileSystem> OptionsLoader for FileOptionsLoader<F> {
    fn load(&self) -> Result<Options> {
        let candidates = [self.local_options_path(), self.user_options_path()];
        match candidates.into_iter().flatten().find(|p| self.fs.exists(p)) {
            Some(path) => self.load_from_path(&path),
            None => Ok(Options::default()),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Options> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| PicError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_options(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
