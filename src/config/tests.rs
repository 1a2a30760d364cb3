//! Tests for the config module

use super::types::*;
use crate::domain::value_objects::{ExportLayout, SizeSelector};
use crate::error::ContentKitError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.rasterizer.command, "inkscape");
    assert!(config.rasterizer.args.is_empty());
    assert_eq!(config.git.command, "git");
    assert_eq!(config.git.branch, "master");
    assert!(config.icons.is_empty());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[rasterizer]
command = "inkscape.bat"
args = ["--without-gui"]

[git]
branch = "main"

[icons.desktop]
output_dir = "Build/Icons"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.rasterizer.command, "inkscape.bat");
    assert_eq!(config.rasterizer.args, ["--without-gui"]);
    assert_eq!(config.git.command, "git");
    assert_eq!(config.git.branch, "main");
    assert_eq!(
        config.icons["desktop"].output_dir.as_deref(),
        Some(Path::new("Build/Icons"))
    );
}

#[test]
fn test_builtin_profile_without_table() {
    let config = Config::default();
    let profile = config.profile("android").unwrap();
    assert_eq!(profile.output_dir(), Path::new("AppIcons"));
    assert_eq!(profile.resolutions().len(), 8);
}

#[test]
fn test_builtin_profile_override_keeps_untouched_fields() {
    let toml = r#"
[icons.android]
buckets = [
    { name = "drawable-mdpi", sizes = [18, 24, 36, 48] },
    { name = "drawable-xxhdpi", sizes = [54, 72, 108, 144] },
]
strip_suffix = "_32px"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    let profile = config.profile("android").unwrap();

    assert_eq!(profile.layout(), ExportLayout::DensitySuffixed);
    assert_eq!(profile.resolutions().len(), 2);
    assert_eq!(profile.passes().len(), 2);
    assert_eq!(profile.passes()[0].strip_suffix.as_deref(), Some("_32px"));
    assert_eq!(profile.passes()[0].output_suffix, "_24dp");
    assert_eq!(profile.passes()[1].source_dir, PathBuf::from("Icons"));
}

#[test]
fn test_custom_profile() {
    let toml = r#"
[icons.web]
output_dir = "public/icons"
layout = "density-suffixed"
buckets = [{ name = "1x", sizes = [16] }, { name = "2x", sizes = [32] }]

[[icons.web.passes]]
source_dir = "art"
extension = "SVG"
suffix = "_web"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    let profile = config.profile("web").unwrap();

    assert_eq!(profile.name(), "web");
    assert_eq!(profile.output_dir(), Path::new("public/icons"));
    assert_eq!(profile.passes()[0].extension, "SVG");
    assert_eq!(profile.passes()[0].sizes, SizeSelector::All);
    assert_eq!(profile.passes()[0].output_suffix, "_web");
    assert!(config.profile_names().contains(&"web".to_string()));
}

#[test]
fn test_custom_profile_from_shorthand_fields() {
    let toml = r#"
[icons.tray]
output_dir = "Tray"
source_dir = "TrayIcons"
buckets = [{ name = "tray", sizes = [16, 32] }]
"#;
    let config: Config = toml::from_str(toml).unwrap();
    let profile = config.profile("tray").unwrap();

    assert_eq!(profile.layout(), ExportLayout::Flat);
    assert_eq!(profile.passes().len(), 1);
    assert_eq!(profile.passes()[0].source_dir, PathBuf::from("TrayIcons"));
}

#[test]
fn test_custom_profile_requires_output_dir() {
    let toml = r#"
[icons.tray]
source_dir = "TrayIcons"
buckets = [{ name = "tray", sizes = [16] }]
"#;
    let config: Config = toml::from_str(toml).unwrap();
    let err = config.profile("tray").unwrap_err();
    assert!(matches!(err, ContentKitError::InvalidProfile { .. }));
}

#[test]
fn test_profile_with_zero_size_is_rejected() {
    let toml = r#"
[icons.desktop]
buckets = [{ name = "icons", sizes = [0] }]
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(matches!(
        config.profile("desktop"),
        Err(ContentKitError::InvalidProfile { .. })
    ));
}

#[test]
fn test_unknown_profile_lists_available() {
    let err = Config::default().profile("windows").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown icon profile 'windows' (available: android, desktop, ios)"
    );
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contentkit.toml");
    fs::write(&path, "[rasterizer]\ncomand = \"rsvg\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.rasterizer.command, "inkscape");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "comand");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("command"));
}

#[test]
fn test_load_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contentkit.toml");
    fs::write(&path, "[rasterizer\n").unwrap();

    let err = Config::load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, ContentKitError::InvalidConfig { .. }));
}

#[test]
fn test_discover_prefers_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("contentkit.toml"),
        "[git]\nbranch = \"develop\"\n",
    )
    .unwrap();

    let loaded = Config::discover(None, dir.path()).unwrap();

    assert_eq!(loaded.config.git.branch, "develop");
    assert_eq!(loaded.source, Some(dir.path().join("contentkit.toml")));
}

#[test]
fn test_discover_explicit_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = Config::discover(Some(&missing), dir.path()).unwrap_err();
    assert!(
        matches!(&err, ContentKitError::InvalidConfig { file, .. } if file == &missing),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains("nope.toml"));
}
