use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;
use crate::ascii::ESC;

fn args(properties: PathBuf, format: OutputFormat) -> DecodeArgs {
    DecodeArgs {
        properties,
        symbols: None,
        format,
        output: None,
        resolve_fonts: false,
    }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn decodes_to_text() {
    let dir = TempDir::new().unwrap();
    let props = write(dir.path(), "c.props", "config=Bar\ndata.values=4,2,3,4|2,4,1,3\n");
    let out = run_decode_impl(
        &args(props, OutputFormat::Text),
        ColorMode::Never,
        &Options::default(),
    )
    .unwrap();
    assert!(out.contains("Chart: Bar"));
    assert!(out.contains("[1] 2, 4, 1, 3"));
}

#[test]
fn decodes_to_json_with_symbols() {
    let dir = TempDir::new().unwrap();
    let props = write(dir.path(), "c.props", "data.values=\u{10}list\n");
    let syms = write(dir.path(), "c.syms", "list=7,8,9\n");
    let mut a = args(props, OutputFormat::Json);
    a.symbols = Some(syms);

    let out = run_decode_impl(&a, ColorMode::Never, &Options::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["data"]["values"], serde_json::json!([["7", "8", "9"]]));
}

#[test]
fn resolves_fonts_from_options() {
    let dir = TempDir::new().unwrap();
    let props = write(
        dir.path(),
        "c.props",
        &format!("title.font={ESC}fCAFE000000000000000000000000F00D|1|true\n"),
    );
    let options: Options = toml::from_str(
        r#"
[[resolver.fonts]]
guid = "CAFE000000000000000000000000F00D"
typeface = "Arial"
bold = true
"#,
    )
    .unwrap();
    let mut a = args(props, OutputFormat::Text);
    a.resolve_fonts = true;

    let out = run_decode_impl(&a, ColorMode::Always, &options).unwrap();
    assert!(out.contains("title.font: Arial 10pt bold"));
    assert!(out.contains("underline"));
}

#[test]
fn output_file_disables_colors() {
    let dir = TempDir::new().unwrap();
    let props = write(dir.path(), "c.props", "config=Pie\n");
    let mut a = args(props, OutputFormat::Text);
    a.output = Some(dir.path().join("out.txt"));
    let out = run_decode_impl(&a, ColorMode::Always, &Options::default()).unwrap();
    assert!(!out.contains('\x1b'));
}

#[test]
fn missing_file_is_an_error() {
    let a = args(PathBuf::from("/no/such.props"), OutputFormat::Text);
    assert!(run_decode_impl(&a, ColorMode::Never, &Options::default()).is_err());
}
