//! Search and evaluation for dammen.

pub mod error;
pub mod eval;
pub mod external;
pub mod rules;
pub mod search;

pub use error::RulesError;
pub use eval::{ClassicalEvaluator, Evaluator};
pub use external::{ExternalRules, parse_generated};
pub use rules::{GeneratedMoves, Rules, StandardRules};
pub use search::control::SearchControl;
pub use search::tt::TranspositionTable;
pub use search::{SearchOptions, SearchResult, Searcher, choose_best_move};
