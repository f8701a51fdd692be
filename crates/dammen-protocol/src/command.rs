//! Protocol command parsing.

use std::time::Duration;

use dammen_core::{Board, Color, MoveText};

use crate::error::ProtocolError;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` uses the configured options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth only.
    pub depth: Option<u8>,
    /// Search for at most this duration.
    pub movetime: Option<Duration>,
    /// Search at most this many nodes.
    pub nodes: Option<u64>,
}

/// An option set through `setoption`.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOption {
    Quiescence(bool),
    StaticExchange(bool),
    SeeMargin(f64),
    MoveTime(Duration),
    Nodes(u64),
    Depth(u8),
}

/// A position to set up.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSpec {
    pub board: Board,
    pub side: Color,
}

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `dammen` -- identify the engine.
    Hello,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `newgame` -- back to the starting position.
    NewGame,
    /// `position` -- set up a board and side to move.
    Position(PositionSpec),
    /// `play` -- apply a move for the side to move.
    Play(MoveText),
    /// `go` -- search the current position.
    Go(GoParams),
    /// `setoption` -- change a search option.
    SetOption(EngineOption),
    /// `print` -- show the board.
    Print,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "dammen" => Ok(Command::Hello),
        "isready" => Ok(Command::IsReady),
        "newgame" => Ok(Command::NewGame),
        "print" => Ok(Command::Print),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(rest),
        "play" => parse_play(rest),
        "go" => parse_go(rest),
        "setoption" => parse_setoption(rest),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position start [red|black]`
/// - `position <diagram> [red|black]`
fn parse_position(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let Some((&what, rest)) = tokens.split_first() else {
        return Err(ProtocolError::MalformedPosition);
    };

    let board = if what == "start" {
        Board::starting_position()
    } else {
        what.parse().map_err(|source| ProtocolError::InvalidDiagram {
            diagram: what.to_string(),
            source,
        })?
    };

    let side = match rest.first() {
        None => Color::Red,
        Some(name) => Color::from_name(name).ok_or_else(|| ProtocolError::InvalidSide {
            found: name.to_string(),
        })?,
    };

    Ok(Command::Position(PositionSpec { board, side }))
}

fn parse_play(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let text = tokens.first().ok_or_else(|| ProtocolError::MissingValue {
        param: "play".to_string(),
    })?;
    Ok(Command::Play(text.parse()?))
}

/// Parse the `go` command arguments.
///
/// Supports: depth, movetime, nodes. Unknown tokens are skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_value(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            "movetime" => {
                params.movetime = Some(parse_millis(tokens.get(i + 1), "movetime")?);
                i += 2;
            }
            "nodes" => {
                params.nodes = Some(parse_value(tokens.get(i + 1), "nodes")?);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let name_at = tokens.iter().position(|&t| t == "name");
    let value_at = tokens.iter().position(|&t| t == "value");
    let (Some(name_at), Some(value_at)) = (name_at, value_at) else {
        return Err(ProtocolError::MissingValue {
            param: "setoption".to_string(),
        });
    };
    let name = tokens.get(name_at + 1..value_at).map(|t| t.join(" ")).unwrap_or_default();
    let value = tokens.get(value_at + 1);

    let option = match name.to_ascii_lowercase().as_str() {
        "quiescence" => EngineOption::Quiescence(parse_value(value, &name)?),
        "see" => EngineOption::StaticExchange(parse_value(value, &name)?),
        "seemargin" => EngineOption::SeeMargin(parse_value(value, &name)?),
        "movetime" => EngineOption::MoveTime(parse_millis(value, &name)?),
        "nodes" => EngineOption::Nodes(parse_value(value, &name)?),
        "depth" => EngineOption::Depth(parse_value(value, &name)?),
        _ => return Err(ProtocolError::UnknownOption { name }),
    };
    Ok(Command::SetOption(option))
}

/// Parse a millisecond value from a token.
fn parse_millis(token: Option<&&str>, param: &str) -> Result<Duration, ProtocolError> {
    parse_value(token, param).map(Duration::from_millis)
}

/// Parse a value of any `FromStr` type from a token.
fn parse_value<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, ProtocolError> {
    let value = token.ok_or_else(|| ProtocolError::MissingValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| ProtocolError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}
