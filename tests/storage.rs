use tempfile::tempdir;
use theme_toggle::{Error, FileStore, PreferenceStore, ThemeConfig};

#[test]
fn file_store_missing_file_is_empty() {
    let tmp = tempdir().unwrap();
    let store = FileStore::open(tmp.path().join("nope.json")).unwrap();
    assert_eq!(store.get("theme").unwrap(), None);
    assert!(!store.path().exists());
}

#[test]
fn file_store_persists_across_opens() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("nested/dir/prefs.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set("theme", "dark").unwrap();
    assert!(path.exists());

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({ "theme": "dark" }));
}

#[test]
fn file_store_keeps_unrelated_keys() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("prefs.json");
    std::fs::write(&path, r#"{"font": "large"}"#).unwrap();

    let mut store = FileStore::open(&path).unwrap();
    store.set("theme", "light").unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("font").unwrap().as_deref(), Some("large"));
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn file_store_rejects_corrupt_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("prefs.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::ParseStore { path: p, .. } if p == path));
}

#[test]
fn config_defaults_match_page_contract() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.dark_class, "dark-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.media_query, "(prefers-color-scheme: dark)");
}

#[test]
fn config_partial_json_fills_defaults() {
    let config = ThemeConfig::from_json(r#"{"toggle_id": "mode-btn"}"#).unwrap();
    assert_eq!(config.toggle_id, "mode-btn");
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn config_rejects_unknown_fields() {
    let err = ThemeConfig::from_json(r#"{"storage": "x"}"#).unwrap_err();
    assert!(matches!(err, Error::ParseConfig(_)));
}

#[test]
fn config_load_reports_missing_file() {
    let tmp = tempdir().unwrap();
    let err = ThemeConfig::load(&tmp.path().join("theme.json")).unwrap_err();
    assert!(matches!(err, Error::ReadConfig { .. }));
}
