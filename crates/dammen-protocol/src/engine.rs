//! Synchronous line-protocol engine.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use dammen_core::{Board, Color, Move, MoveText, legal_moves};
use dammen_engine::{ClassicalEvaluator, SearchOptions, Searcher, StandardRules};

use crate::command::{Command, EngineOption, GoParams, PositionSpec, parse_command};
use crate::error::ProtocolError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Search options used by every `go`.
    pub search: SearchOptions,
    /// Depth searched when `go` names none.
    pub depth: u8,
}

impl EngineConfig {
    pub const DEFAULT_DEPTH: u8 = 6;
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchOptions::default(),
            depth: Self::DEFAULT_DEPTH,
        }
    }
}

/// The protocol engine, holding the current position and configuration.
///
/// Commands are handled one at a time; `go` blocks until the search ends.
#[derive(Debug)]
pub struct ProtocolEngine {
    board: Board,
    side: Color,
    config: EngineConfig,
    evaluator: ClassicalEvaluator,
}

impl ProtocolEngine {
    /// Create a new engine with the starting position, Red to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            side: Color::Red,
            config: EngineConfig::default(),
            evaluator: ClassicalEvaluator::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// responses to `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), ProtocolError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            if !self.handle_line(trimmed, out)? {
                break;
            }
            out.flush()?;
        }
        info!("dammen shutting down");
        Ok(())
    }

    /// Handle one input line. Returns `false` once the engine should exit.
    ///
    /// Command errors are reported on `out` as `info string error: ...`;
    /// only output failures are returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool, ProtocolError> {
        let result = parse_command(line).and_then(|cmd| self.dispatch(cmd, out));
        match result {
            Ok(keep_going) => Ok(keep_going),
            Err(ProtocolError::Io { source }) => Err(ProtocolError::Io { source }),
            Err(err) => {
                warn!(error = %err, "command failed");
                writeln!(out, "info string error: {err}")?;
                Ok(true)
            }
        }
    }

    fn dispatch<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<bool, ProtocolError> {
        match cmd {
            Command::Hello => self.handle_hello(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewGame => self.handle_newgame(),
            Command::Position(spec) => self.handle_position(spec),
            Command::Play(text) => self.handle_play(&text)?,
            Command::Go(params) => self.handle_go(&params, out)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Print => self.handle_print(out)?,
            Command::Quit => return Ok(false),
            Command::Unknown(cmd) => {
                if !cmd.is_empty() {
                    debug!(%cmd, "ignoring unknown command");
                }
            }
        }
        Ok(true)
    }

    fn handle_hello<W: Write>(&self, out: &mut W) -> Result<(), ProtocolError> {
        let search = &self.config.search;
        writeln!(out, "id name dammen")?;
        writeln!(out, "option name Quiescence type check default {}", search.quiescence)?;
        writeln!(out, "option name SEE type check default {}", search.static_exchange)?;
        writeln!(out, "option name SeeMargin type string default {}", search.see_margin)?;
        writeln!(
            out,
            "option name MoveTime type spin default {}",
            search.time_budget.as_millis()
        )?;
        writeln!(out, "option name Nodes type spin default {}", search.node_budget)?;
        writeln!(out, "option name Depth type spin default {} min 2", self.config.depth)?;
        writeln!(out, "dammenok")?;
        Ok(())
    }

    fn handle_newgame(&mut self) {
        self.board = Board::starting_position();
        self.side = Color::Red;
    }

    fn handle_position(&mut self, spec: PositionSpec) {
        self.board = spec.board;
        self.side = spec.side;
    }

    fn handle_play(&mut self, text: &MoveText) -> Result<(), ProtocolError> {
        let mv = find_move(legal_moves(&self.board, self.side), text)?;
        debug!(%mv, side = %self.side, "playing move");
        self.board = self.board.make_move(&mv);
        self.side = self.side.flip();
        Ok(())
    }

    fn handle_setoption(&mut self, option: EngineOption) {
        let search = &mut self.config.search;
        match option {
            EngineOption::Quiescence(on) => search.quiescence = on,
            EngineOption::StaticExchange(on) => search.static_exchange = on,
            EngineOption::SeeMargin(margin) => search.see_margin = margin,
            EngineOption::MoveTime(budget) => search.time_budget = budget,
            EngineOption::Nodes(budget) => search.node_budget = budget,
            EngineOption::Depth(depth) => self.config.depth = depth,
        }
    }

    fn handle_go<W: Write>(&mut self, params: &GoParams, out: &mut W) -> Result<(), ProtocolError> {
        let mut options = self.config.search.clone();
        if let Some(movetime) = params.movetime {
            options.time_budget = movetime;
        }
        if let Some(nodes) = params.nodes {
            options.node_budget = nodes;
        }
        let depth = params.depth.unwrap_or(self.config.depth);

        let searcher = Searcher::new(options);
        let mut written = Ok(());
        let result = searcher.search(
            &self.board,
            self.side,
            depth,
            &StandardRules,
            &self.evaluator,
            |d, score, nodes, _| {
                if written.is_ok() {
                    written = writeln!(out, "info depth {d} score {score:.3} nodes {nodes}");
                }
            },
        );
        written?;

        match result {
            Some(result) => {
                info!(
                    best = %result.best_move,
                    depth = result.depth,
                    score = result.score,
                    nodes = result.nodes,
                    "search finished"
                );
                writeln!(out, "bestmove {}", result.best_move)?;
            }
            None => writeln!(out, "bestmove none")?,
        }
        Ok(())
    }

    fn handle_print<W: Write>(&self, out: &mut W) -> Result<(), ProtocolError> {
        writeln!(out, "{}", self.board.pretty())?;
        writeln!(out, "side to move: {}", self.side)?;
        Ok(())
    }
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the single legal move named by `text`.
fn find_move(moves: Vec<Move>, text: &MoveText) -> Result<Move, ProtocolError> {
    let mut matching = moves.into_iter().filter(|mv| mv.matches(text));
    let Some(mv) = matching.next() else {
        return Err(ProtocolError::IllegalMove {
            text: format_text(text),
        });
    };
    let others = matching.count();
    if others > 0 {
        return Err(ProtocolError::AmbiguousMove {
            text: format_text(text),
            count: others + 1,
        });
    }
    Ok(mv)
}

/// Render parsed move text back in protocol notation.
fn format_text(text: &MoveText) -> String {
    let sep = if text.is_capture { "x" } else { "-" };
    text.squares
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
