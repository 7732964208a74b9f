use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::*;
use crate::options::LogLevel;

struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/pic-chart")),
        }
    }

    fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_file_found() {
    let loader = FileOptionsLoader::with_fs(MockFileSystem::new());
    let options = loader.load().unwrap();
    assert_eq!(options, Options::default());
}

#[test]
fn returns_default_without_user_config_dir() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let options = FileOptionsLoader::with_fs(fs).load().unwrap();
    assert_eq!(options, Options::default());
}

#[test]
fn loads_local_file() {
    let fs = MockFileSystem::new().with_file("/project/.pic-chart.toml", "[log]\nlevel = \"info\"\n");
    let options = FileOptionsLoader::with_fs(fs).load().unwrap();
    assert_eq!(options.log.level, LogLevel::Info);
}

#[test]
fn loads_user_file_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/pic-chart/config.toml",
        "[resolver.number_format]\nthousands_separator = \" \"\n",
    );
    let options = FileOptionsLoader::with_fs(fs).load().unwrap();
    assert_eq!(options.resolver.number_format.thousands_separator, ' ');
}

#[test]
fn local_file_takes_priority() {
    let fs = MockFileSystem::new()
        .with_file("/project/.pic-chart.toml", "[log]\nlevel = \"info\"\n")
        .with_file(
            "/home/user/.config/pic-chart/config.toml",
            "[log]\nlevel = \"errors\"\n",
        );
    let options = FileOptionsLoader::with_fs(fs).load().unwrap();
    assert!(options.log_info());
}

#[test]
fn load_from_path_reports_missing_file() {
    let loader = FileOptionsLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();
    assert!(matches!(err, PicError::FileRead { .. }));
    assert_eq!(err.error_type(), "IO");
}

#[test]
fn load_from_path_reports_parse_error() {
    let fs = MockFileSystem::new().with_file("/bad.toml", "[log\n");
    let err = FileOptionsLoader::with_fs(fs)
        .load_from_path(Path::new("/bad.toml"))
        .unwrap_err();
    assert!(matches!(err, PicError::TomlParse(_)));
}

#[test]
fn load_from_path_runs_validation() {
    let content = "[resolver.number_format]\nthousands_separator = \".\"\ndecimal_point = \".\"\n";
    let fs = MockFileSystem::new().with_file("/same.toml", content);
    let err = FileOptionsLoader::with_fs(fs)
        .load_from_path(Path::new("/same.toml"))
        .unwrap_err();
    assert!(matches!(err, PicError::Config(_)));
}

#[test]
fn real_file_system_reads_temp_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("opts.toml");
    std::fs::write(&path, "[log]\nlevel = \"info\"\n").unwrap();

    let options = FileOptionsLoader::new().load_from_path(&path).unwrap();
    assert!(options.log_info());
}
