//! Adapter for generators that report their moves as JSON.
//!
//! The accepted shape is an object with a capture list and a quiet list:
//!
//! ```text
//! { "captures": [ { "path": [[r, c], ...] }, ... ],
//!   "moves":    [ { "to": [r, c] }, ... ] }
//! ```
//!
//! Field names may use any known spelling (`captures`/`capturas`/`takes`,
//! `moves`/`movs`, `path`/`ruta`/`steps`), coordinates may be `[r, c]`
//! pairs or `{ "r": .., "c": .. }` objects, and a quiet entry may give its
//! destination as the last element of a `path` instead of `to`. Entries
//! that cannot be read are skipped.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use dammen_core::{Board, Square};

use crate::rules::{GeneratedMoves, Rules};

const CAPTURE_LISTS: [&str; 3] = ["captures", "capturas", "takes"];
const QUIET_LISTS: [&str; 2] = ["moves", "movs"];
const PATH_FIELDS: [&str; 3] = ["path", "ruta", "steps"];

/// A board coordinate as it appears in generator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum WireCoord {
    Pair(i64, i64),
    Object { r: i64, c: i64 },
}

impl WireCoord {
    fn square(self) -> Option<Square> {
        match self {
            WireCoord::Pair(r, c) | WireCoord::Object { r, c } => Square::from_coords(r, c),
        }
    }
}

/// Rules whose move generation is delegated to a JSON-producing function.
///
/// Move application and crowning use the standard behaviour.
pub struct ExternalRules<G> {
    generator: G,
}

impl<G> ExternalRules<G>
where
    G: Fn(&Board, Square) -> Value,
{
    /// Wrap a generator called once per square.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

impl<G> Rules for ExternalRules<G>
where
    G: Fn(&Board, Square) -> Value,
{
    fn moves_from(&self, board: &Board, from: Square) -> GeneratedMoves {
        parse_generated(&(self.generator)(board, from))
    }
}

impl<G> std::fmt::Debug for ExternalRules<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalRules").finish_non_exhaustive()
    }
}

/// Return the first non-null field of `value` under any of `names`.
fn first_field<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .find_map(|name| value.get(*name).filter(|field| !field.is_null()))
}

fn parse_coord(value: &Value) -> Option<Square> {
    WireCoord::deserialize(value).ok()?.square()
}

fn parse_path(value: &Value) -> Option<Vec<Square>> {
    value.as_array()?.iter().map(parse_coord).collect()
}

fn parse_capture(entry: &Value) -> Option<Vec<Square>> {
    let path = parse_path(first_field(entry, &PATH_FIELDS)?)?;
    if path.is_empty() { None } else { Some(path) }
}

fn parse_quiet(entry: &Value) -> Option<Square> {
    if let Some(to) = first_field(entry, &["to"]) {
        return parse_coord(to);
    }
    let path = first_field(entry, &["path"])?.as_array()?;
    parse_coord(path.last()?)
}

/// Decode one generator result, skipping malformed entries.
pub fn parse_generated(value: &Value) -> GeneratedMoves {
    let mut moves = GeneratedMoves::default();

    if let Some(list) = first_field(value, &CAPTURE_LISTS).and_then(Value::as_array) {
        for entry in list {
            match parse_capture(entry) {
                Some(path) => moves.captures.push(path),
                None => debug!(%entry, "skipping malformed capture entry"),
            }
        }
    }

    if let Some(list) = first_field(value, &QUIET_LISTS).and_then(Value::as_array) {
        for entry in list {
            match parse_quiet(entry) {
                Some(to) => moves.quiet.push(to),
                None => debug!(%entry, "skipping malformed quiet entry"),
            }
        }
    }

    moves
}
