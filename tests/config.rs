//! Configuration system tests
//!
//! Tests for config paths, panel config, session files and keymap loading.

use tempfile::TempDir;

use dockpanel::config::PanelConfig;
use dockpanel::config_paths;
use dockpanel::keymap::{load_keymap_file, merge_bindings, Command, KeyCode, Keymap, Keystroke};
use dockpanel::panel::{stable_id, Orientation, Panel, TabPosition, WidgetId};
use dockpanel::session::PanelSession;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("dockpanel"));
    }
}

#[test]
fn test_files_live_under_config_dir() {
    let Some(config) = config_paths::config_dir() else {
        return;
    };
    for path in [
        config_paths::config_file(),
        config_paths::keymap_file(),
        config_paths::session_file(),
        config_paths::logs_dir(),
    ]
    .into_iter()
    .flatten()
    {
        assert!(path.starts_with(&config), "{}", path.display());
    }
}

#[test]
fn test_file_names() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.ends_with("panel.yaml"));
    }
    if let Some(path) = config_paths::session_file() {
        assert!(path.ends_with("session.json"));
    }
}

// ========================================================================
// Panel Config Tests
// ========================================================================

#[test]
fn test_panel_config_defaults() {
    let config = PanelConfig::default();
    assert_eq!(config.empty_title, "Empty");
    assert_eq!(config.default_icon, "text-x-generic");
    assert_eq!(config.close_tooltip, "Hide panel");
}

#[test]
fn test_panel_config_save_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("panel.yaml");

    let config = PanelConfig {
        empty_title: "No tools".to_string(),
        ..PanelConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(PanelConfig::load_from(&path), config);
}

#[test]
fn test_panel_config_partial_yaml_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("panel.yaml");
    std::fs::write(&path, "close_tooltip: Close\n").unwrap();

    let config = PanelConfig::load_from(&path);
    assert_eq!(config.close_tooltip, "Close");
    assert_eq!(config.empty_title, "Empty");
    assert_eq!(config.tab_position, TabPosition::Bottom);
    assert!(config.scrollable_tabs);
    assert!(config.tab_menu);
}

#[test]
fn test_panel_config_notebook_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("panel.yaml");
    std::fs::write(
        &path,
        "tab_position: top\nscrollable_tabs: false\ntab_menu: false\n",
    )
    .unwrap();

    let config = PanelConfig::load_from(&path);
    assert_eq!(config.tab_position, TabPosition::Top);
    assert!(!config.scrollable_tabs);
    assert!(!config.tab_menu);

    let panel = Panel::with_config(Orientation::Horizontal, &config);
    assert_eq!(panel.notebook().tab_position, TabPosition::Top);
    assert!(!panel.notebook().scrollable);
    assert!(!panel.notebook().popup_enabled);
}

#[test]
fn test_panel_config_malformed_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("panel.yaml");
    std::fs::write(&path, "empty_title: [unclosed\n").unwrap();

    assert_eq!(PanelConfig::load_from(&path), PanelConfig::default());
}

#[test]
fn test_panel_config_missing_file() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        PanelConfig::load_from(&dir.path().join("absent.yaml")),
        PanelConfig::default()
    );
}

// ========================================================================
// Session Tests
// ========================================================================

#[test]
fn test_session_file_round_trip_restores_panels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let mut side = Panel::new(Orientation::Vertical);
    side.add_item(WidgetId(1), "files", "Files", None).unwrap();
    side.add_item(WidgetId(2), "symbols", "Symbols", None).unwrap();
    side.activate_item(WidgetId(2)).unwrap();
    side.show();

    let mut session = PanelSession::new();
    session.capture(&side);
    session.save_to(&path).unwrap();

    let loaded = PanelSession::load_from(&path);
    assert_eq!(loaded.side_panel_active, stable_id("symbols"));

    let mut fresh = Panel::new(Orientation::Vertical);
    fresh.add_item(WidgetId(10), "files", "Files", None).unwrap();
    fresh.add_item(WidgetId(11), "symbols", "Symbols", None).unwrap();
    loaded.restore(&mut fresh);

    assert_eq!(fresh.active_item(), Some(WidgetId(11)));
    assert!(fresh.is_visible());
}

#[test]
fn test_session_file_keeps_hidden_panel_hidden() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let mut side = Panel::new(Orientation::Vertical);
    side.add_item(WidgetId(1), "files", "Files", None).unwrap();
    side.show();
    side.close();

    let mut session = PanelSession::new();
    session.capture(&side);
    session.save_to(&path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"side_visible\": false"));

    // A second run captures what it restored, not a forced show
    let loaded = PanelSession::load_from(&path);
    let mut fresh = Panel::new(Orientation::Vertical);
    fresh.add_item(WidgetId(5), "files", "Files", None).unwrap();
    loaded.restore(&mut fresh);
    assert!(!fresh.is_visible());

    let mut resaved = loaded.clone();
    resaved.capture(&fresh);
    resaved.save_to(&path).unwrap();
    assert_eq!(
        PanelSession::load_from(&path).visibility(Orientation::Vertical),
        Some(false)
    );
}

// ========================================================================
// Keymap File Tests
// ========================================================================

#[test]
fn test_user_keymap_file_overrides_escape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(
        &path,
        "bindings:\n  - key: escape\n    command: Unbound\n  - key: f4\n    command: ClosePanel\n",
    )
    .unwrap();

    let user = load_keymap_file(&path).unwrap();
    let keymap = Keymap::with_bindings(merge_bindings(
        dockpanel::keymap::default_bindings(),
        user,
    ));

    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Escape)), None);
    assert_eq!(
        keymap.lookup(&Keystroke::key(KeyCode::F(4))),
        Some(Command::ClosePanel)
    );
}

#[test]
fn test_panel_uses_installed_keymap() {
    let mut panel = Panel::new(Orientation::Horizontal);
    panel.add_item(WidgetId(1), "a", "Alpha", None).unwrap();
    panel.show();
    panel.set_keymap(Keymap::new());

    panel.handle_key(Keystroke::key(KeyCode::Escape));
    assert!(panel.is_visible());
}
