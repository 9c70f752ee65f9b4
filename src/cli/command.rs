use crate::board::{Color, Move, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Move(Move),
    Show,
    Status,
    Turn,
    Captured(Color),
    Occupant(Square),
    Moves,
    SetOption { name: String, value: String },
    Quit,
    /// Recognised command with arguments that do not parse
    Malformed(String),
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let (&name, args) = parts.split_first()?;

    let malformed = || Command::Malformed(trimmed.to_string());

    let cmd = match name {
        "new" => Command::NewGame,
        "move" => match args.join(" ").parse::<Move>() {
            Ok(mv) => Command::Move(mv),
            Err(_) => malformed(),
        },
        "show" | "d" => Command::Show,
        "status" => Command::Status,
        "turn" => Command::Turn,
        "captured" => match args.first().and_then(|c| Color::from_name(c)) {
            Some(color) => Command::Captured(color),
            None => malformed(),
        },
        "occupant" => match args.first().and_then(|s| s.parse::<Square>().ok()) {
            Some(square) => Command::Occupant(square),
            None => malformed(),
        },
        "moves" => Command::Moves,
        "setoption" => match args {
            [option, value] => Command::SetOption {
                name: (*option).to_string(),
                value: (*value).to_string(),
            },
            _ => malformed(),
        },
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   \t"), None);
    }

    #[test]
    fn test_move_forms() {
        let expected = Command::Move(Move::new(sq("i5"), sq("e5")));
        assert_eq!(parse_command("move i5 e5"), Some(expected.clone()));
        assert_eq!(parse_command("move i5e5"), Some(expected.clone()));
        assert_eq!(parse_command("  move i5-e5  "), Some(expected));
    }

    #[test]
    fn test_malformed_arguments() {
        assert_eq!(
            parse_command("move i5 e10"),
            Some(Command::Malformed("move i5 e10".to_string()))
        );
        assert_eq!(
            parse_command("captured green"),
            Some(Command::Malformed("captured green".to_string()))
        );
        assert_eq!(
            parse_command("occupant"),
            Some(Command::Malformed("occupant".to_string()))
        );
    }

    #[test]
    fn test_queries() {
        assert_eq!(parse_command("captured RED"), Some(Command::Captured(Color::Red)));
        assert_eq!(parse_command("occupant a1"), Some(Command::Occupant(sq("a1"))));
        assert_eq!(parse_command("status"), Some(Command::Status));
        assert_eq!(parse_command("frobnicate"), Some(Command::Unknown("frobnicate".to_string())));
    }

    #[test]
    fn test_setoption() {
        assert_eq!(
            parse_command("setoption corner_capture false"),
            Some(Command::SetOption {
                name: "corner_capture".to_string(),
                value: "false".to_string()
            })
        );
    }
}
