use std::fs;

use mirror_engine::{PreferenceStore, PREFERENCES_FILENAME};
use serde_json::{json, Value};
use tempfile::TempDir;

#[test]
fn load_without_prior_save_is_dark() {
    let temp = TempDir::new().unwrap();
    let store = PreferenceStore::in_dir(temp.path());
    assert!(store.load());
}

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let store = PreferenceStore::in_dir(temp.path());

    store.save(false).unwrap();
    assert!(!store.load());

    store.save(true).unwrap();
    assert!(store.load());
}

#[test]
fn value_survives_a_new_store_instance() {
    let temp = TempDir::new().unwrap();
    PreferenceStore::in_dir(temp.path()).save(false).unwrap();

    let reopened = PreferenceStore::in_dir(temp.path());
    assert!(!reopened.load());
}

#[test]
fn stored_as_json_literal_under_theme_key() {
    let temp = TempDir::new().unwrap();
    let store = PreferenceStore::in_dir(temp.path());
    store.save(false).unwrap();

    let raw = fs::read_to_string(temp.path().join(PREFERENCES_FILENAME)).unwrap();
    let parsed: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, json!({ "theme": false }));
}

#[test]
fn malformed_content_falls_back_to_dark() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(PREFERENCES_FILENAME);
    let store = PreferenceStore::new(&path);

    fs::write(&path, "{ not json").unwrap();
    assert!(store.load());

    fs::write(&path, r#"{ "theme": "false" }"#).unwrap();
    assert!(store.load());

    fs::write(&path, "false").unwrap();
    assert!(store.load());
}

#[test]
fn save_overwrites_malformed_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(PREFERENCES_FILENAME);
    fs::write(&path, "garbage").unwrap();

    let store = PreferenceStore::new(&path);
    store.save(false).unwrap();
    assert!(!store.load());
}

#[test]
fn save_keeps_unrelated_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(PREFERENCES_FILENAME);
    fs::write(&path, r#"{ "language": "en", "theme": true }"#).unwrap();

    PreferenceStore::new(&path).save(false).unwrap();

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, json!({ "language": "en", "theme": false }));
}
