use std::io;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use twenty48::Direction;

/// What the player asked for by pressing a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Key bindings as shown in the help panel.
pub const KEY_HELP: [(&str, char); 5] = [
    ("quit", 'q'),
    ("up", 'w'),
    ("left", 'a'),
    ("down", 's'),
    ("right", 'd'),
];

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        // Raw mode swallows the interrupt signal
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        _ => None,
    }
}

/// Block until the next terminal event.
///
/// Returns `None` for events that are not a command, e.g. a resize or an
/// unbound key.
pub fn read_command() -> io::Result<Option<Command>> {
    match event::read()? {
        Event::Key(key) => Ok(command_for_key(key)),
        _ => Ok(None),
    }
}

/// Block until any key is pressed.
pub fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
