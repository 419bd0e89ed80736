//! Text command parsing for the human player.

use super::*;

impl Command {
    /// Parses one input line, case-insensitively. Anything unrecognised
    /// becomes `Command::Unknown`, which still spends the turn.
    pub fn parse(line: &str) -> Self {
        let lowered = line.trim().to_lowercase();
        match lowered.as_str() {
            "hello" => Command::Hello,
            "gold" => Command::Gold,
            "pickup" => Command::Pickup,
            "look" => Command::Look,
            "quit" => Command::Quit,
            other => other
                .strip_prefix("move ")
                .and_then(single_char)
                .and_then(Direction::from_letter)
                .map_or(Command::Unknown, Command::Move),
        }
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
