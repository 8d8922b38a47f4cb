//! Pointer replay scripts.
//!
//! A script is plain text with one command per line:
//!
//! ```text
//! # zig-zag
//! down 10 10
//! move 40 60
//! move 70 10
//! up
//! clear
//! ```
//!
//! Blank lines and `#` comments are skipped. Coordinates are in surface
//! pixels and may be fractional.

use crate::widget::Chalkboard;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// A single replayable board operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Clear,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

impl Command {
    /// Parses one non-empty, non-comment line.
    pub fn parse(s: &str) -> Result<Self, String> {
        let mut parts = s.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err("Empty command".to_string());
        };
        let args: Vec<&str> = parts.collect();

        let command = match verb.to_lowercase().as_str() {
            "down" => {
                let (x, y) = parse_point(verb, &args)?;
                Command::Down { x, y }
            }
            "move" => {
                let (x, y) = parse_point(verb, &args)?;
                Command::Move { x, y }
            }
            "up" => {
                expect_no_args(verb, &args)?;
                Command::Up
            }
            "clear" => {
                expect_no_args(verb, &args)?;
                Command::Clear
            }
            other => return Err(format!("Unknown command '{other}'")),
        };
        Ok(command)
    }

    /// Applies the command to a mounted board.
    pub fn apply(self, board: &mut Chalkboard) {
        match self {
            Command::Down { x, y } => board.pointer_down(x, y),
            Command::Move { x, y } => board.pointer_move(x, y),
            Command::Up => board.pointer_up(),
            Command::Clear => board.clear(),
        }
    }
}

fn parse_point(verb: &str, args: &[&str]) -> Result<(f64, f64), String> {
    let [x, y] = args else {
        return Err(format!("'{verb}' takes two coordinates, got {}", args.len()));
    };
    let coord = |raw: &str| -> Result<f64, String> {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("Invalid coordinate '{raw}'"))
    };
    Ok((coord(*x)?, coord(*y)?))
}

fn expect_no_args(verb: &str, args: &[&str]) -> Result<(), String> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(format!("'{verb}' takes no arguments"))
    }
}

/// Parses a whole script, reporting the first bad line (1-based).
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let command = Command::parse(line).map_err(|message| ScriptError::Syntax {
            line: index + 1,
            message,
        })?;
        commands.push(command);
    }
    Ok(commands)
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<Command>, ScriptError> {
    let source = fs::read_to_string(path)?;
    parse_script(&source)
}

/// Replays `commands` in order onto `board`.
pub fn replay(board: &mut Chalkboard, commands: &[Command]) {
    for command in commands {
        command.apply(board);
    }
    log::debug!("Replayed {} commands", commands.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_verbs_and_skips_comments() {
        let script = "# header\n\ndown 1 2\nMOVE 3.5 4 # trailing\nup\nclear\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Down { x: 1.0, y: 2.0 },
                Command::Move { x: 3.5, y: 4.0 },
                Command::Up,
                Command::Clear,
            ]
        );
    }

    #[test]
    fn reports_line_number_of_bad_command() {
        let err = parse_script("down 1 1\n\njump 2 2\n").unwrap_err();
        match err {
            ScriptError::Syntax { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("jump"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_arity_and_bad_numbers() {
        assert!(Command::parse("down 1").is_err());
        assert!(Command::parse("move 1 2 3").is_err());
        assert!(Command::parse("move x 2").is_err());
        assert!(Command::parse("move NaN 2").is_err());
        assert!(Command::parse("up now").is_err());
    }
}
