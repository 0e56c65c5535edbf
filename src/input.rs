use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::geometry::Direction;

/// The discrete inputs the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Steer(Direction),
    Confirm,
    Cancel,
}

pub trait InputSource {
    /// Everything queued since the last call. Never blocks.
    fn drain(&mut self) -> io::Result<Vec<Input>>;
}

/// Reads key presses from the terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn drain(&mut self) -> io::Result<Vec<Input>> {
        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                inputs.extend(map_key(key));
            }
        }
        Ok(inputs)
    }
}

pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Input::Quit),
        KeyCode::Up | KeyCode::Char('w') => Some(Input::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Input::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Input::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Input::Steer(Direction::Right)),
        KeyCode::Enter => Some(Input::Confirm),
        KeyCode::Esc => Some(Input::Cancel),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use std::collections::VecDeque;

    /// Hands out one scripted batch of inputs per frame, then quits.
    #[derive(Debug, Default)]
    pub struct ScriptedInput {
        pub frames: VecDeque<Vec<Input>>,
    }

    impl ScriptedInput {
        pub fn new(frames: impl IntoIterator<Item = Vec<Input>>) -> Self {
            ScriptedInput {
                frames: frames.into_iter().collect(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn drain(&mut self) -> io::Result<Vec<Input>> {
            Ok(self
                .frames
                .pop_front()
                .unwrap_or_else(|| vec![Input::Quit]))
        }
    }

    #[test]
    fn test_arrow_keys() {
        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('d'), Direction::Right),
        ];
        for (code, dir) in cases {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Input::Steer(dir)));
        }
    }

    #[test]
    fn test_menu_keys() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(enter), Some(Input::Confirm));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(esc), Some(Input::Cancel));
    }

    #[test]
    fn test_quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(Input::Quit));

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(q), Some(Input::Quit));

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(plain_c), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
