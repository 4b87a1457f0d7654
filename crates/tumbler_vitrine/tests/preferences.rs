//! File-backed preference storage.

use std::fs;

use tumbler_vitrine::{
    JsonFilePreferences, PreferenceError, PreferenceStore, Theme, ThemeStore, THEME_KEY,
};

#[test]
fn theme_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("preferences.json");

    let mut themes = ThemeStore::load(JsonFilePreferences::new(&path));
    assert_eq!(themes.theme(), Theme::Light);
    themes.set(Theme::Gray).unwrap();

    let reloaded = ThemeStore::load(JsonFilePreferences::new(&path));
    assert_eq!(reloaded.theme(), Theme::Gray);

    insta::assert_snapshot!(fs::read_to_string(&path).unwrap(), @r#"
{
  "theme": "gray"
}
"#);
}

#[test]
fn other_keys_survive_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"sidebar":"open","theme":"dark"}"#).unwrap();

    let mut store = JsonFilePreferences::new(&path);
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    store.set(THEME_KEY, "light").unwrap();

    assert_eq!(store.get("sidebar").unwrap().as_deref(), Some("open"));
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "not json").unwrap();

    let store = JsonFilePreferences::new(&path);
    assert!(matches!(
        store.get(THEME_KEY),
        Err(PreferenceError::Json { .. })
    ));

    // The theme store degrades to the default instead.
    assert_eq!(ThemeStore::load(store).theme(), Theme::Light);
}
