//! Adapter to convert winit key events to our Keystroke type

use winit::keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, NamedKey, PhysicalKey};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert winit modifier state to our Modifiers
pub fn modifiers_from_winit(state: ModifiersState) -> Modifiers {
    Modifiers::new(
        state.control_key(),
        state.shift_key(),
        state.alt_key(),
        state.super_key(),
    )
}

/// Convert winit key event data to our Keystroke type
///
/// Returns None if the key is not one the panel can bind.
pub fn keystroke_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    mods: Modifiers,
) -> Option<Keystroke> {
    let key_code = match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => Some(KeyCode::Enter),
            NamedKey::Escape => Some(KeyCode::Escape),
            NamedKey::Tab => Some(KeyCode::Tab),
            NamedKey::Space => Some(KeyCode::Space),

            NamedKey::ArrowUp => Some(KeyCode::Up),
            NamedKey::ArrowDown => Some(KeyCode::Down),
            NamedKey::ArrowLeft => Some(KeyCode::Left),
            NamedKey::ArrowRight => Some(KeyCode::Right),

            NamedKey::Home => Some(KeyCode::Home),
            NamedKey::End => Some(KeyCode::End),
            NamedKey::PageUp => Some(KeyCode::PageUp),
            NamedKey::PageDown => Some(KeyCode::PageDown),

            NamedKey::F1 => Some(KeyCode::F(1)),
            NamedKey::F2 => Some(KeyCode::F(2)),
            NamedKey::F3 => Some(KeyCode::F(3)),
            NamedKey::F4 => Some(KeyCode::F(4)),
            NamedKey::F5 => Some(KeyCode::F(5)),
            NamedKey::F6 => Some(KeyCode::F(6)),
            NamedKey::F7 => Some(KeyCode::F(7)),
            NamedKey::F8 => Some(KeyCode::F(8)),
            NamedKey::F9 => Some(KeyCode::F(9)),
            NamedKey::F10 => Some(KeyCode::F(10)),
            NamedKey::F11 => Some(KeyCode::F(11)),
            NamedKey::F12 => Some(KeyCode::F(12)),

            _ => None,
        },

        // Character keys - normalize to lowercase
        Key::Character(s) => s.chars().next().map(|c| KeyCode::Char(c.to_ascii_lowercase())),

        _ => None,
    };

    // Keypad Enter reports no usable logical key on some platforms
    let key_code = key_code.or(match physical_key {
        PhysicalKey::Code(WinitKeyCode::NumpadEnter) => Some(KeyCode::Enter),
        _ => None,
    });

    key_code.map(|key| Keystroke::new(key, mods))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::Escape),
            PhysicalKey::Code(WinitKeyCode::Escape),
            Modifiers::NONE,
        )
        .expect("should map");

        assert_eq!(stroke, Keystroke::key(KeyCode::Escape));
    }

    #[test]
    fn test_ctrl_enter() {
        let mods = modifiers_from_winit(ModifiersState::CONTROL);
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::Enter),
            PhysicalKey::Code(WinitKeyCode::Enter),
            mods,
        )
        .expect("should map");

        assert_eq!(stroke.key, KeyCode::Enter);
        assert!(stroke.mods.ctrl());
        assert!(!stroke.mods.shift());
    }

    #[test]
    fn test_uppercase_normalized() {
        let stroke = keystroke_from_winit(
            &Key::Character("W".into()),
            PhysicalKey::Code(WinitKeyCode::KeyW),
            Modifiers::SHIFT,
        )
        .expect("should map");

        assert_eq!(stroke.key, KeyCode::Char('w'));
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_unmapped_named_key() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::CapsLock),
            PhysicalKey::Code(WinitKeyCode::CapsLock),
            Modifiers::NONE,
        );
        assert!(stroke.is_none());
    }
}
