//! Integration tests for the keymap system

use super::*;

#[test]
fn test_embedded_yaml_matches_hardcoded_defaults() {
    let bindings = parse_keymap_yaml(get_default_keymap_yaml())
        .expect("Embedded keymap.yaml should parse successfully");

    assert_eq!(bindings, default_bindings());
}

#[test]
fn test_keymap_lookup_defaults() {
    let keymap = Keymap::panel_defaults();

    assert_eq!(
        keymap.lookup(&Keystroke::key(KeyCode::Escape)),
        Some(Command::ClosePanel)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Enter, Modifiers::CTRL)),
        Some(Command::FocusDocument)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::PageDown, Modifiers::CTRL)),
        Some(Command::NextItem)
    );
}

#[test]
fn test_plain_enter_is_not_bound() {
    let keymap = Keymap::panel_defaults();
    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Enter)), None);
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Enter, Modifiers::CTRL | Modifiers::SHIFT)),
        None
    );
}

#[test]
fn test_keystroke_for_command() {
    let keymap = Keymap::panel_defaults();
    assert_eq!(
        keymap.keystroke_for(Command::ClosePanel),
        Some(Keystroke::key(KeyCode::Escape))
    );
    assert_eq!(keymap.keystroke_for(Command::Unbound), None);
}

#[test]
fn test_first_binding_for_keystroke_wins() {
    let escape = Keystroke::key(KeyCode::Escape);
    let keymap = Keymap::with_bindings(vec![
        Keybinding::new(escape, Command::ClosePanel),
        Keybinding::new(escape, Command::NextItem),
    ]);
    assert_eq!(keymap.lookup(&escape), Some(Command::ClosePanel));
    assert_eq!(keymap.len(), 2);
}

#[test]
fn test_parse_key_strings() {
    assert_eq!(
        parse_key_string("ctrl+enter").unwrap(),
        Keystroke::new(KeyCode::Enter, Modifiers::CTRL)
    );
    assert_eq!(
        parse_key_string("Ctrl + Shift + W").unwrap(),
        Keystroke::new(KeyCode::Char('w'), Modifiers::CTRL | Modifiers::SHIFT)
    );
    assert_eq!(parse_key_string("f9").unwrap(), Keystroke::key(KeyCode::F(9)));
    assert_eq!(parse_key_string("esc").unwrap(), Keystroke::key(KeyCode::Escape));
}

#[test]
fn test_parse_key_string_errors() {
    assert!(matches!(
        parse_key_string("ctrl+shift"),
        Err(KeymapError::InvalidKey(_))
    ));
    assert!(matches!(
        parse_key_string("a+b"),
        Err(KeymapError::InvalidKey(_))
    ));
    assert!(matches!(
        parse_key_string("hyper"),
        Err(KeymapError::InvalidKey(_))
    ));
    assert!(matches!(parse_key_string("f30"), Err(KeymapError::InvalidKey(_))));
}

#[test]
fn test_parse_yaml_rejects_unknown_command() {
    let yaml = "bindings:\n  - key: escape\n    command: SaveFile\n";
    assert!(matches!(
        parse_keymap_yaml(yaml),
        Err(KeymapError::InvalidCommand(c)) if c == "SaveFile"
    ));
}

#[test]
fn test_parse_yaml_skips_other_platforms() {
    let yaml = r#"
bindings:
  - key: ctrl+w
    command: ClosePanel
    platform: some-other-os
  - key: ctrl+q
    command: ClosePanel
"#;
    let bindings = parse_keymap_yaml(yaml).unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].keystroke.key, KeyCode::Char('q'));
}

#[test]
fn test_parse_yaml_malformed() {
    assert!(matches!(
        parse_keymap_yaml("bindings: [ {"),
        Err(KeymapError::ParseError(_))
    ));
}

#[test]
fn test_merge_replaces_and_unbinds() {
    let user = vec![
        // Escape no longer closes
        Keybinding::new(Keystroke::key(KeyCode::Escape), Command::Unbound),
        // Ctrl+Enter cycles instead
        Keybinding::new(
            Keystroke::new(KeyCode::Enter, Modifiers::CTRL),
            Command::NextItem,
        ),
        // New binding
        Keybinding::new(Keystroke::key(KeyCode::F(9)), Command::ClosePanel),
    ];

    let keymap = Keymap::with_bindings(merge_bindings(default_bindings(), user));

    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Escape)), None);
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Enter, Modifiers::CTRL)),
        Some(Command::NextItem)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::key(KeyCode::F(9))),
        Some(Command::ClosePanel)
    );
    assert_eq!(keymap.len(), 4);
}

#[test]
fn test_load_keymap_file_missing() {
    let result = load_keymap_file(std::path::Path::new("/nonexistent/keymap.yaml"));
    assert!(matches!(result, Err(KeymapError::IoError(_))));
}
