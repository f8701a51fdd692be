//! Static evaluation.
//!
//! The search treats evaluation as a black box behind [`Evaluator`]. Any
//! `Fn(&Board, Color, &dyn Rules) -> f64` closure is an evaluator;
//! [`ClassicalEvaluator`] is the built-in default.

pub mod material;
pub mod mobility;

use dammen_core::{Board, Color};

use crate::rules::Rules;

/// Scores a position from the point of view of `perspective`.
///
/// Positive values favour `perspective`. Implementations must be pure: the
/// same board, perspective and rules always give the same score.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, perspective: Color, rules: &dyn Rules) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Color, &dyn Rules) -> f64,
{
    fn evaluate(&self, board: &Board, perspective: Color, rules: &dyn Rules) -> f64 {
        self(board, perspective, rules)
    }
}

/// Material plus small advancement and mobility terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassicalEvaluator {
    /// Weight of one row of man advancement.
    pub advancement_weight: f64,
    /// Weight of one generated move of mobility difference.
    pub mobility_weight: f64,
}

impl ClassicalEvaluator {
    pub const DEFAULT_ADVANCEMENT: f64 = 0.02;
    pub const DEFAULT_MOBILITY: f64 = 0.01;
}

impl Default for ClassicalEvaluator {
    fn default() -> Self {
        Self {
            advancement_weight: Self::DEFAULT_ADVANCEMENT,
            mobility_weight: Self::DEFAULT_MOBILITY,
        }
    }
}

impl Evaluator for ClassicalEvaluator {
    fn evaluate(&self, board: &Board, perspective: Color, rules: &dyn Rules) -> f64 {
        material::material(board, perspective, rules)
            + self.advancement_weight * material::advancement(board, perspective, rules)
            + self.mobility_weight * mobility::mobility(board, perspective, rules)
    }
}
