//! Cursor over the ordered pair sequence.

use serde::Serialize;
use tracing::debug;

use super::{ComparisonError, ComparisonMatrix};

/// Outcome of a successful [`TraversalCursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The cursor moved to this pair.
    Moved(usize),
    /// The last pair was confirmed; the cursor stays put.
    ReadyToSubmit,
}

/// Tracks the current pair and gates forward motion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalCursor {
    position: usize,
    total: usize,
    at_end: bool,
}

impl TraversalCursor {
    pub fn new(total: usize) -> Self {
        Self {
            position: 0,
            total,
            at_end: false,
        }
    }

    pub fn for_matrix(matrix: &ComparisonMatrix) -> Self {
        Self::new(matrix.total_pairs())
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// True once `advance` has been called on the decided last pair.
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Moves forward one pair.
    ///
    /// On the last pair the cursor does not move and `ReadyToSubmit` is
    /// returned; submission still checks completeness on its own.
    ///
    /// # Errors
    ///
    /// `IncompleteJudgment` if the current pair has no judgment. The cursor
    /// is left where it was.
    pub fn advance(&mut self, matrix: &ComparisonMatrix) -> Result<Advance, ComparisonError> {
        if !matrix.is_decided(self.position) {
            return Err(ComparisonError::IncompleteJudgment(self.position));
        }
        if self.position + 1 >= self.total {
            self.at_end = true;
            debug!(position = self.position, "Reached last pair");
            return Ok(Advance::ReadyToSubmit);
        }
        self.position += 1;
        debug!(position = self.position, "Cursor advanced");
        Ok(Advance::Moved(self.position))
    }

    /// Moves back one pair, stopping at the first.
    pub fn retreat(&mut self) -> usize {
        self.position = self.position.saturating_sub(1);
        self.at_end = false;
        self.position
    }

    /// Moves directly to `index`.
    ///
    /// # Errors
    ///
    /// `CursorOutOfRange` if `index` is not a pair position.
    pub fn jump_to(&mut self, index: usize) -> Result<usize, ComparisonError> {
        if index >= self.total {
            return Err(ComparisonError::CursorOutOfRange {
                index,
                total: self.total,
            });
        }
        self.position = index;
        self.at_end = false;
        Ok(self.position)
    }

    /// Jumps to the next undecided pair, wrapping around.
    ///
    /// Returns `None` and stays put when every pair is decided.
    pub fn seek_next_undecided(&mut self, matrix: &ComparisonMatrix) -> Option<usize> {
        let next = matrix.next_undecided(self.position)?;
        self.position = next;
        self.at_end = false;
        Some(next)
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.at_end = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison::{ItemSet, JudgmentValue};

    fn matrix() -> ComparisonMatrix {
        ComparisonMatrix::new(ItemSet::from_labels(["A", "B", "C"]).unwrap())
    }

    fn decide(m: &mut ComparisonMatrix, index: usize) {
        let favored = m.pair(index).unwrap().item_a.id.clone();
        m.set_judgment(index, JudgmentValue::integer(3), &favored)
            .unwrap();
    }

    #[test]
    fn advance_requires_decided_pair() {
        let m = matrix();
        let mut cursor = TraversalCursor::for_matrix(&m);
        assert_eq!(
            cursor.advance(&m).unwrap_err(),
            ComparisonError::IncompleteJudgment(0)
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn advance_moves_by_one() {
        let mut m = matrix();
        let mut cursor = TraversalCursor::for_matrix(&m);
        decide(&mut m, 0);
        assert_eq!(cursor.advance(&m).unwrap(), Advance::Moved(1));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn advance_on_last_pair_is_ready_to_submit() {
        let mut m = matrix();
        let mut cursor = TraversalCursor::for_matrix(&m);
        decide(&mut m, 2);
        cursor.jump_to(2).unwrap();
        assert_eq!(cursor.advance(&m).unwrap(), Advance::ReadyToSubmit);
        assert_eq!(cursor.position(), 2);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn retreat_is_unconditional_and_saturates() {
        let m = matrix();
        let mut cursor = TraversalCursor::for_matrix(&m);
        cursor.jump_to(2).unwrap();
        assert_eq!(cursor.retreat(), 1);
        assert_eq!(cursor.retreat(), 0);
        assert_eq!(cursor.retreat(), 0);
    }

    #[test]
    fn jump_to_ignores_completion_but_checks_bounds() {
        let m = matrix();
        let mut cursor = TraversalCursor::for_matrix(&m);
        assert_eq!(cursor.jump_to(2).unwrap(), 2);
        assert_eq!(
            cursor.jump_to(3).unwrap_err(),
            ComparisonError::CursorOutOfRange { index: 3, total: 3 }
        );
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn seek_next_undecided_skips_decided_pairs() {
        let mut m = matrix();
        let mut cursor = TraversalCursor::for_matrix(&m);
        decide(&mut m, 0);
        decide(&mut m, 1);
        assert_eq!(cursor.seek_next_undecided(&m), Some(2));
        decide(&mut m, 2);
        assert_eq!(cursor.seek_next_undecided(&m), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn moving_back_clears_end_flag() {
        let mut m = matrix();
        let mut cursor = TraversalCursor::for_matrix(&m);
        decide(&mut m, 2);
        cursor.jump_to(2).unwrap();
        cursor.advance(&m).unwrap();
        cursor.retreat();
        assert!(!cursor.is_at_end());
    }
}
