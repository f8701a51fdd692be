//! Material balance and man advancement.
//!
//! Both terms are returned from `perspective`'s point of view (positive =
//! `perspective` ahead). Pieces are attributed to a side through
//! [`Rules::color_of`].

use dammen_core::{Board, Color, PieceKind};

use crate::rules::Rules;

/// Material balance: man = 1.0, king = 1.5.
pub fn material(board: &Board, perspective: Color, rules: &dyn Rules) -> f64 {
    board
        .pieces()
        .filter_map(|(sq, piece)| {
            let color = rules.color_of(board.get(sq))?;
            let value = piece.value();
            Some(if color == perspective { value } else { -value })
        })
        .sum()
}

/// Rows each man has advanced from its own back row, summed per side.
///
/// Kings do not count.
pub fn advancement(board: &Board, perspective: Color, rules: &dyn Rules) -> f64 {
    let mut total = 0i32;
    for (sq, piece) in board.pieces() {
        if piece.kind() != PieceKind::Man {
            continue;
        }
        let Some(color) = rules.color_of(board.get(sq)) else {
            continue;
        };
        let rows = rows_advanced(color, sq.row());
        total += if color == perspective { rows } else { -rows };
    }
    f64::from(total)
}

/// Number of rows a man of `color` on `row` has moved toward promotion.
#[inline]
pub fn rows_advanced(color: Color, row: u8) -> i32 {
    match color {
        Color::Red => 9 - i32::from(row),
        Color::Black => i32::from(row),
    }
}
