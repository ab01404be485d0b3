//! Keyboard mapping: terminal key events in, simulation intents out.
//!
//! The frame loop polls for events and latches them into an `InputFrame`;
//! the session only ever sees the frame, so the engine stays free of any
//! terminal dependency (and tests drive it with hand-built frames).

use crossterm::event::{KeyCode, KeyEvent};

/// Player intents gathered since the last simulated tick. Movement keys
/// are held-style (set every frame they repeat); jump and action are
/// edge-style and cleared by the frame loop once a tick has consumed them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub action: bool,
}

impl InputFrame {
    /// Latch a key event into the frame. Unknown keys are ignored.
    pub fn latch(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('a') => self.left = true,
            KeyCode::Right | KeyCode::Char('d') => self.right = true,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char(' ') => self.jump = true,
            KeyCode::Char('f') | KeyCode::Char('x') => self.action = true,
            _ => {}
        }
    }

    /// Drop the edge-style intents after a tick has consumed them; held
    /// movement re-latches next frame on key repeat.
    pub fn clear_edges(&mut self) {
        self.jump = false;
        self.action = false;
    }
}

/// Text-entry intents for the name capture screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInput {
    Char(char),
    Backspace,
    Confirm,
}

/// Map a key event to a text-entry intent, if it is one.
pub fn text_input(key: &KeyEvent) -> Option<TextInput> {
    match key.code {
        KeyCode::Char(c) => Some(TextInput::Char(c)),
        KeyCode::Backspace => Some(TextInput::Backspace),
        KeyCode::Enter => Some(TextInput::Confirm),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_latch_movement_and_jump() {
        let mut frame = InputFrame::default();
        frame.latch(&key(KeyCode::Left));
        frame.latch(&key(KeyCode::Char(' ')));
        assert!(frame.left);
        assert!(frame.jump);
        assert!(!frame.right);
        assert!(!frame.action);
    }

    #[test]
    fn test_wasd_aliases() {
        let mut frame = InputFrame::default();
        frame.latch(&key(KeyCode::Char('a')));
        frame.latch(&key(KeyCode::Char('d')));
        frame.latch(&key(KeyCode::Char('w')));
        frame.latch(&key(KeyCode::Char('f')));
        assert_eq!(
            frame,
            InputFrame {
                left: true,
                right: true,
                jump: true,
                action: true,
            }
        );
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut frame = InputFrame::default();
        frame.latch(&key(KeyCode::Tab));
        assert_eq!(frame, InputFrame::default());
    }

    #[test]
    fn test_clear_edges_keeps_held_movement() {
        let mut frame = InputFrame {
            left: true,
            right: false,
            jump: true,
            action: true,
        };
        frame.clear_edges();
        assert!(frame.left);
        assert!(!frame.jump);
        assert!(!frame.action);
    }

    #[test]
    fn test_text_input_mapping() {
        assert_eq!(
            text_input(&key(KeyCode::Char('B'))),
            Some(TextInput::Char('B'))
        );
        assert_eq!(text_input(&key(KeyCode::Backspace)), Some(TextInput::Backspace));
        assert_eq!(text_input(&key(KeyCode::Enter)), Some(TextInput::Confirm));
        assert_eq!(text_input(&key(KeyCode::Esc)), None);
    }
}
