//! End-to-end tests for `navmenu palette`.

mod fixtures;
use fixtures::*;
use tempfile::TempDir;

#[test]
fn test_palette_json_theme_mode() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(
        &["palette", "--color", "#553DE9", "--mode", "theme", "--json"],
        config_dir.path(),
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(result["color"], "#553DE9");
    assert_eq!(result["mode"], "theme");
    assert_eq!(result["isLight"], false);

    let scheme = &result["scheme"];
    assert_eq!(scheme["containerBackground"], "#553DE9");
    for key in [
        "backgroundActive",
        "backgroundHover",
        "textColor",
        "textColorInactive",
        "appNameTextColor",
    ] {
        assert!(scheme[key].is_string(), "missing {key}");
    }
    assert!(scheme["signIn"]["background"].is_string());
    assert!(scheme["signIn"]["backgroundHover"].is_string());
    assert!(scheme["signIn"]["textColor"].is_string());
}

#[test]
fn test_palette_light_mode_container_is_white() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(
        &["palette", "-c", "#F5A623", "-m", "light", "--json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["isLight"], true);
    assert_eq!(result["scheme"]["containerBackground"], "#FFFFFF");
}

#[test]
fn test_palette_css_output() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(
        &["palette", "--color", "#553DE9", "--mode", "theme", "--prefix", "nav"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--nav-container-background: #553DE9;"));
    assert!(stdout.contains("--nav-sign-in-text-color:"));
}

#[test]
fn test_palette_defaults_from_config() {
    let config_dir = TempDir::new().unwrap();

    let set = run_isolated(
        &["config", "set", "--brand-color", "#123456", "--color-style", "theme"],
        config_dir.path(),
    );
    assert_eq!(set.status.code(), Some(0));

    let output = run_isolated(&["palette", "--json"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["color"], "#123456");
    assert_eq!(result["mode"], "theme");
    assert_eq!(result["scheme"]["containerBackground"], "#123456");
}

#[test]
fn test_palette_invalid_color() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(&["palette", "--color", "#XYZ"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid color"), "stderr: {stderr}");
}

#[test]
fn test_palette_invalid_mode() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(
        &["palette", "--color", "#553DE9", "--mode", "dark"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown color style"));
}
