//! Transposition table: position hash to (depth, score, bound, best move).
//!
//! A fixed power-of-two array of slots indexed by the low bits of the hash.
//! Every store overwrites its slot; the full 64-bit key is kept so a probe
//! never returns another position's entry.

use dammen_core::Move;

/// Bound type stored in a TT entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored score is exact (inside the search window).
    Exact,
    /// The stored score is a lower bound (failed high / beta cutoff).
    Lower,
    /// The stored score is an upper bound (failed low).
    Upper,
}

/// One stored search result.
#[derive(Debug, Clone, PartialEq)]
pub struct TtEntry {
    /// Full position hash of the stored node.
    pub key: u64,
    /// Remaining depth the node was searched to.
    pub depth: u8,
    pub score: f64,
    pub bound: Bound,
    /// Best move found, if any move was searched.
    pub best_move: Option<Move>,
}

impl TtEntry {
    /// Return `true` if the stored score settles a search with window
    /// `(alpha, beta)`.
    pub fn cuts_off(&self, alpha: f64, beta: f64) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

/// Bounded transposition table owned by a single search.
pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    mask: usize,
    used: usize,
}

impl TranspositionTable {
    /// Default number of slots.
    pub const DEFAULT_ENTRIES: usize = 1 << 16;

    /// Create a table with `entries` slots, rounded up to a power of two.
    pub fn new(entries: usize) -> Self {
        let len = entries.max(1).next_power_of_two();
        Self {
            slots: vec![None; len],
            mask: len - 1,
            used: 0,
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Look up the entry for `key`.
    pub fn probe(&self, key: u64) -> Option<&TtEntry> {
        self.slots[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key)
    }

    /// Store a result for `key`, replacing whatever the slot held.
    pub fn store(&mut self, key: u64, depth: u8, score: f64, bound: Bound, best_move: Option<Move>) {
        let index = self.index(key);
        let slot = &mut self.slots[index];
        if slot.is_none() {
            self.used += 1;
        }
        *slot = Some(TtEntry {
            key,
            depth,
            score,
            bound,
            best_move,
        });
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("capacity", &self.capacity())
            .field("used", &self.used)
            .finish()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dammen_core::sq;

    fn quiet() -> Move {
        Move::Quiet {
            from: sq(6, 1),
            to: sq(5, 0),
        }
    }

    #[test]
    fn capacity_rounds_up() {
        assert_eq!(TranspositionTable::new(1000).capacity(), 1024);
        assert_eq!(TranspositionTable::new(0).capacity(), 1);
        assert_eq!(TranspositionTable::default().capacity(), 65_536);
    }

    #[test]
    fn store_and_probe() {
        let mut tt = TranspositionTable::new(64);
        assert!(tt.probe(0xDEAD_BEEF).is_none());
        tt.store(0xDEAD_BEEF, 3, 1.25, Bound::Exact, Some(quiet()));
        let entry = tt.probe(0xDEAD_BEEF).unwrap();
        assert_eq!(entry.depth, 3);
        assert_eq!(entry.score, 1.25);
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(entry.best_move, Some(quiet()));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn colliding_index_with_different_key_misses() {
        let mut tt = TranspositionTable::new(16);
        tt.store(5, 1, 0.0, Bound::Lower, None);
        assert!(tt.probe(5 + 16).is_none());
    }

    #[test]
    fn always_replace() {
        let mut tt = TranspositionTable::new(16);
        tt.store(5, 4, 1.0, Bound::Exact, None);
        tt.store(21, 1, -1.0, Bound::Upper, None);
        assert!(tt.probe(5).is_none());
        assert_eq!(tt.probe(21).map(|e| e.depth), Some(1));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn cutoff_rules() {
        let entry = |bound, score| TtEntry {
            key: 0,
            depth: 1,
            score,
            bound,
            best_move: None,
        };
        assert!(entry(Bound::Exact, 0.0).cuts_off(-1.0, 1.0));
        assert!(entry(Bound::Lower, 2.0).cuts_off(-1.0, 1.0));
        assert!(!entry(Bound::Lower, 0.5).cuts_off(-1.0, 1.0));
        assert!(entry(Bound::Upper, -2.0).cuts_off(-1.0, 1.0));
        assert!(!entry(Bound::Upper, 0.5).cuts_off(-1.0, 1.0));
    }
}
