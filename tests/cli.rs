use clap::Parser as _;
use tempfile::tempdir;
use theme_toggle::{CliArgs, Theme};

fn args(store: &std::path::Path, rest: &[&str]) -> CliArgs {
    let mut argv = vec!["theme-toggle", "--store", store.to_str().unwrap()];
    argv.extend_from_slice(rest);
    CliArgs::try_parse_from(argv).unwrap()
}

#[test]
fn show_follows_system_without_writing() {
    let tmp = tempdir().unwrap();
    let store = tmp.path().join("prefs.json");

    let report = theme_toggle::execute(&args(&store, &["--system", "dark", "show"])).unwrap();
    assert_eq!(report.theme, Theme::Dark);
    assert_eq!(report.stored, None);
    assert_eq!(report.changed, None);
    assert!(!store.exists());
}

#[test]
fn toggle_persists_between_page_loads() {
    let tmp = tempdir().unwrap();
    let store = tmp.path().join("prefs.json");

    let report = theme_toggle::execute(&args(&store, &["--system", "light", "toggle"])).unwrap();
    assert_eq!(report.theme, Theme::Dark);
    assert_eq!(report.stored, Some(Theme::Dark));
    assert_eq!(
        report.toggle.unwrap().inner_html,
        r#"<i class="fas fa-sun"></i>"#
    );

    // Next load: the override wins over the system, and system changes are ignored.
    let report = theme_toggle::execute(&args(
        &store,
        &["--system", "light", "system-change", "--prefers", "light"],
    ))
    .unwrap();
    assert_eq!(report.theme, Theme::Dark);
    assert_eq!(report.changed, None);
}

#[test]
fn system_change_applies_without_override() {
    let tmp = tempdir().unwrap();
    let store = tmp.path().join("prefs.json");

    let report = theme_toggle::execute(&args(
        &store,
        &["system-change", "--prefers", "dark"],
    ))
    .unwrap();
    assert_eq!(report.theme, Theme::Dark);
    assert_eq!(report.changed, Some(Theme::Dark));
    assert_eq!(report.stored, None);
}

#[test]
fn toggle_requires_control() {
    let tmp = tempdir().unwrap();
    let store = tmp.path().join("prefs.json");

    let report = theme_toggle::execute(&args(&store, &["--no-toggle", "show"])).unwrap();
    assert!(report.toggle.is_none());
    assert!(!report.listeners.toggle);

    let err = theme_toggle::execute(&args(&store, &["--no-toggle", "toggle"])).unwrap_err();
    assert!(err.to_string().contains("no toggle control"));
    assert!(!store.exists());
}

#[test]
fn config_file_renames_storage_key() {
    let tmp = tempdir().unwrap();
    let store = tmp.path().join("prefs.json");
    let config = tmp.path().join("theme.json");
    std::fs::write(&config, r#"{"storage_key": "site-theme"}"#).unwrap();

    theme_toggle::execute(&args(
        &store,
        &["--config", config.to_str().unwrap(), "toggle"],
    ))
    .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({ "site-theme": "dark" }));
}
