//! Legal move collection through the [`Rules`] seam.

use dammen_core::{Board, CaptureRoute, Color, Move, Square};

use crate::rules::Rules;
use crate::search::apply::replay_capture;

/// Every capture and quiet move available to one side.
#[derive(Debug, Clone, Default)]
pub(crate) struct Generated {
    pub captures: Vec<Move>,
    pub quiet: Vec<Move>,
}

impl Generated {
    pub fn has_captures(&self) -> bool {
        !self.captures.is_empty()
    }

    /// The legal set: captures when any exist, quiet moves otherwise.
    pub fn into_legal(self) -> Vec<Move> {
        if self.captures.is_empty() { self.quiet } else { self.captures }
    }
}

/// Normalise a raw capture path reported for the piece on `origin`.
///
/// Prepends the origin when missing and collapses consecutive duplicates.
/// Returns `None` for paths that do not move the piece.
pub fn normalize_path(origin: Square, raw: &[Square]) -> Option<Vec<Square>> {
    if raw.is_empty() {
        return None;
    }
    let mut path = Vec::with_capacity(raw.len() + 1);
    if raw[0] != origin {
        path.push(origin);
    }
    for &sq in raw {
        if path.last() != Some(&sq) {
            path.push(sq);
        }
    }
    (path.len() >= 2).then_some(path)
}

/// Collect the moves of every piece `rules` classifies as `side`.
pub(crate) fn generate(board: &Board, side: Color, rules: &dyn Rules) -> Generated {
    let mut moves = Generated::default();
    for from in Square::all() {
        if rules.color_of(board.get(from)) != Some(side) {
            continue;
        }
        let out = rules.moves_from(board, from);
        for raw in &out.captures {
            let Some(path) = normalize_path(from, raw) else {
                continue;
            };
            let (_, victims) = replay_capture(board, &path, rules);
            let captured = victims.into_iter().map(|(sq, _)| sq).collect();
            moves.captures.push(Move::Capture(CaptureRoute::new(path, captured)));
        }
        moves
            .quiet
            .extend(out.quiet.into_iter().map(|to| Move::Quiet { from, to }));
    }
    moves
}
