use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;

#[test]
fn no_config_skips_loading() {
    let cli = Cli::parse_from(["pic-chart", "--no-config", "decode", "x"]);
    assert_eq!(load_options(&cli).unwrap(), Options::default());
}

#[test]
fn explicit_config_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("opts.toml");
    fs::write(&path, "[log]\nlevel = \"info\"\n").unwrap();

    let cli = Cli::parse_from([
        "pic-chart".into(),
        "--config".into(),
        path.into_os_string(),
        "decode".into(),
        "x".into(),
    ]);
    assert!(load_options(&cli).unwrap().log_info());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let cli = Cli::parse_from(["pic-chart", "--config", "/no/such/opts.toml", "decode", "x"]);
    let err = load_options(&cli).unwrap_err();
    assert_eq!(err.error_type(), "IO");
}

#[test]
fn reads_properties_and_symbols() {
    let dir = TempDir::new().unwrap();
    let props = dir.path().join("chart.props");
    let syms = dir.path().join("chart.syms");
    fs::write(&props, "a=1\n").unwrap();
    fs::write(&syms, "s=2\n").unwrap();

    let (p, s) = read_tables(&props, Some(&syms)).unwrap();
    assert_eq!(p, "a=1\n");
    assert_eq!(s, "s=2\n");

    let (_, none) = read_tables(&props, None).unwrap();
    assert!(none.is_empty());
}

#[test]
fn missing_properties_file_names_the_path() {
    let err = read_tables(&PathBuf::from("/no/such/chart.props"), None).unwrap_err();
    assert!(matches!(err, PicError::FileRead { .. }));
    assert_eq!(err.message(), "/no/such/chart.props");
    assert!(err.detail().is_some());
}

#[test]
fn write_output_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    write_output("hello\n", Some(&path)).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
}
