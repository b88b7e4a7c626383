//! Keyboard bindings

use game_core::Side;
use piston_window::Key;

/// A key press translated to a game command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move one side's paddle by a lane offset
    Move(Side, i8),
    /// Trigger the serve
    Start,
}

/// Map a pressed key to its command. Unbound keys map to nothing.
pub fn map_key(key: Key) -> Option<Command> {
    match key {
        Key::W => Some(Command::Move(Side::Left, -1)),
        Key::S => Some(Command::Move(Side::Left, 1)),
        Key::Up => Some(Command::Move(Side::Right, -1)),
        Key::Down => Some(Command::Move(Side::Right, 1)),
        Key::Space => Some(Command::Start),
        _ => None,
    }
}
