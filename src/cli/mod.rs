//! Line-oriented text driver.
//!
//! Reads one command per line and answers with one line per command (the
//! board diagram for `show` spans several). Intended for humans at a
//! terminal and for scripted games piped through stdin.

use std::io::{self, BufRead, Write};

use crate::board::{Color, GameEngine, MoveOutcome, Rules};

pub mod command;

use command::{parse_command, Command};

/// One game plus the rules the next `new` game will use.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: GameEngine,
    rules: Rules,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute one command, writing the reply to `out`.
    ///
    /// Returns `Ok(false)` once the session should stop.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match cmd {
            Command::NewGame => {
                self.game = GameEngine::with_rules(self.rules);
                writeln!(out, "ok")?;
            }
            Command::Move(mv) => match self.game.play(mv.from, mv.to) {
                Ok(outcome) => writeln!(out, "{}", format_outcome(&outcome))?,
                Err(e) => writeln!(out, "illegal {e}")?,
            },
            Command::Show => write!(out, "{}", self.game)?,
            Command::Status => writeln!(out, "status {}", self.game.status())?,
            Command::Turn => writeln!(out, "turn {}", self.game.turn())?,
            Command::Captured(color) => writeln!(
                out,
                "captured {color} {}",
                self.game.captured_count(color)
            )?,
            Command::Occupant(square) => match self.game.occupant_at(square) {
                Some(color) => writeln!(out, "occupant {square} {color}")?,
                None => writeln!(out, "occupant {square} NONE")?,
            },
            Command::Moves => {
                let moves: Vec<String> = self
                    .game
                    .legal_moves()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "moves {}", moves.join(" "))?;
            }
            Command::SetOption { name, value } => match self.set_option(&name, &value) {
                Ok(()) => writeln!(out, "ok")?,
                Err(msg) => writeln!(out, "error {msg}")?,
            },
            Command::Quit => return Ok(false),
            Command::Malformed(line) => writeln!(out, "error malformed command '{line}'")?,
            Command::Unknown(line) => writeln!(out, "error unknown command '{line}'")?,
        }
        Ok(true)
    }

    /// Options take effect at the next `new`.
    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name {
            "corner_capture" => {
                self.rules.corner_capture = value
                    .parse()
                    .map_err(|_| format!("expected true or false, got '{value}'"))?;
            }
            "first_to_move" => {
                self.rules.first_to_move = Color::from_name(value)
                    .ok_or_else(|| format!("expected red or black, got '{value}'"))?;
            }
            _ => return Err(format!("unknown option '{name}'")),
        }
        Ok(())
    }
}

fn format_outcome(outcome: &MoveOutcome) -> String {
    let mut reply = if outcome.ended_game() {
        format!("gameover {}", outcome.status)
    } else {
        "ok".to_string()
    };
    if !outcome.captured.is_empty() {
        let squares: Vec<String> = outcome.captured.iter().map(ToString::to_string).collect();
        reply.push_str(" captured ");
        reply.push_str(&squares.join(" "));
    }
    reply
}

/// Drive a session from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        let keep_going = session.handle(cmd, out)?;
        out.flush()?;
        if !keep_going {
            break;
        }
    }
    Ok(())
}

pub fn run_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(script: &str) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_opening_moves() {
        let out = transcript("turn\nmove i5 e5\nturn\noccupant e5\noccupant i5\n");
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            ["turn BLACK", "ok", "turn RED", "occupant e5 BLACK", "occupant i5 NONE"]
        );
    }

    #[test]
    fn test_illegal_move_reply() {
        let out = transcript("move a1 a2\nmove e5 e6\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("illegal "));
        assert!(lines[1].contains("No piece on e5"));
    }

    #[test]
    fn test_capture_reply() {
        let out = transcript(
            "move i5 d5\nmove a5 c5\nmove i1 h1\nmove a1 e1\nmove h1 h2\nmove e1 e5\ncaptured black\n",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[5], "ok captured d5");
        assert_eq!(lines[6], "captured BLACK 1");
    }

    #[test]
    fn test_non_ascii_move_is_malformed() {
        let out = transcript("move €1 a5\nstatus\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("error malformed command"));
        assert_eq!(lines[1], "status IN_PROGRESS");
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = transcript("status\nquit\nstatus\n");
        assert_eq!(out, "status IN_PROGRESS\n");
    }

    #[test]
    fn test_options_apply_to_new_game() {
        let out = transcript("setoption first_to_move red\nturn\nnew\nturn\nsetoption speed fast\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ok");
        assert_eq!(lines[1], "turn BLACK");
        assert_eq!(lines[3], "turn RED");
        assert!(lines[4].starts_with("error unknown option"));
    }

    #[test]
    fn test_show_prints_diagram() {
        let out = transcript("show\n");
        assert_eq!(out.lines().count(), 10);
        assert!(out.contains("a R R R R R R R R R"));
    }
}
