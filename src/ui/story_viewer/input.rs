// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts of the story viewer.
//!
//! | Key        | Action   |
//! |------------|----------|
//! | Left       | previous |
//! | Right      | next     |
//! | Space      | next     |
//! | Escape     | close    |

use super::Message;
use iced::keyboard::{self, key::Named, Key};

/// Maps a key press to a viewer command. Other keyboard events are ignored.
#[must_use]
pub fn key_command(event: &keyboard::Event) -> Option<Message> {
    let keyboard::Event::KeyPressed { key, .. } = event else {
        return None;
    };

    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        Key::Named(Named::ArrowRight | Named::Space) => Some(Message::Next),
        Key::Named(Named::Escape) => Some(Message::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key, Location, Modifiers};

    fn press(named: Named) -> keyboard::Event {
        keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: key::Physical::Code(key::Code::Space),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        }
    }

    #[test]
    fn arrows_and_space_navigate() {
        assert!(matches!(key_command(&press(Named::ArrowLeft)), Some(Message::Previous)));
        assert!(matches!(key_command(&press(Named::ArrowRight)), Some(Message::Next)));
        assert!(matches!(key_command(&press(Named::Space)), Some(Message::Next)));
    }

    #[test]
    fn escape_closes() {
        assert!(matches!(key_command(&press(Named::Escape)), Some(Message::Close)));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(key_command(&press(Named::Enter)).is_none());
        assert!(key_command(&keyboard::Event::ModifiersChanged(Modifiers::SHIFT)).is_none());
    }
}
