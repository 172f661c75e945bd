//! Keyboard driver: turns terminal key events into board commands.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sweeper_core::Command;

/// Maps one key press to a command. Keys outside the map give `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    use Command::*;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(MoveUp),
        KeyCode::Down | KeyCode::Char('s') => Some(MoveDown),
        KeyCode::Left | KeyCode::Char('a') => Some(MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(MoveRight),
        KeyCode::Char(' ') => Some(Reveal),
        KeyCode::Char('f') => Some(ToggleFlag),
        KeyCode::Char('q') | KeyCode::Esc => Some(Quit),
        _ => None,
    }
}

/// Blocks for the next terminal event. Events that are not mapped keys
/// (resizes, focus changes, unmapped keys) come back as `None`.
pub fn next_command() -> io::Result<Option<Command>> {
    match event::read()? {
        Event::Key(key) => {
            let command = command_for_key(key);
            log::trace!("key {:?} -> {:?}", key.code, command);
            Ok(command)
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_move() {
        assert_eq!(command_for_key(press(KeyCode::Up)), Some(Command::MoveUp));
        assert_eq!(command_for_key(press(KeyCode::Char('w'))), Some(Command::MoveUp));
        assert_eq!(command_for_key(press(KeyCode::Down)), Some(Command::MoveDown));
        assert_eq!(command_for_key(press(KeyCode::Char('s'))), Some(Command::MoveDown));
        assert_eq!(command_for_key(press(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(command_for_key(press(KeyCode::Char('a'))), Some(Command::MoveLeft));
        assert_eq!(command_for_key(press(KeyCode::Right)), Some(Command::MoveRight));
        assert_eq!(command_for_key(press(KeyCode::Char('d'))), Some(Command::MoveRight));
    }

    #[test]
    fn actions_and_quit() {
        assert_eq!(command_for_key(press(KeyCode::Char(' '))), Some(Command::Reveal));
        assert_eq!(command_for_key(press(KeyCode::Char('f'))), Some(Command::ToggleFlag));
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(command_for_key(press(KeyCode::Char('x'))), None);
        assert_eq!(command_for_key(press(KeyCode::Char('c'))), None);
        assert_eq!(command_for_key(press(KeyCode::Enter)), None);
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(command_for_key(release), None);
    }
}
