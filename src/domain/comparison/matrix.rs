//! The comparison matrix: one canonical judgment slot per unordered pair.

use serde::Serialize;
use tracing::debug;

use super::{
    ComparisonError, ComparisonPair, ItemId, ItemSet, Judgment, JudgmentValue, PairGenerator,
    ValueError,
};
use crate::domain::foundation::Percentage;

/// Judgments over a fixed item set.
///
/// Each unordered pair stores at most one `(value, favored)` record; the
/// reverse direction is computed on read, so the two views never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    items: ItemSet,
    pairs: Vec<ComparisonPair>,
    judgments: Vec<Option<Judgment>>,
}

impl ComparisonMatrix {
    /// Creates an empty matrix with every pair undecided.
    pub fn new(items: ItemSet) -> Self {
        let pairs = PairGenerator::for_set(&items);
        let judgments = vec![None; pairs.len()];
        Self {
            items,
            pairs,
            judgments,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    pub fn pairs(&self) -> &[ComparisonPair] {
        &self.pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the pair at `index` in traversal order.
    ///
    /// # Errors
    ///
    /// `PairOutOfRange` if the index is past the last pair.
    pub fn pair(&self, index: usize) -> Result<&ComparisonPair, ComparisonError> {
        self.pairs.get(index).ok_or(ComparisonError::PairOutOfRange {
            index,
            total: self.pairs.len(),
        })
    }

    pub fn judgment(&self, index: usize) -> Option<&Judgment> {
        self.judgments.get(index).and_then(Option::as_ref)
    }

    /// Iterates pairs with their judgment, if any.
    pub fn entries(&self) -> impl Iterator<Item = (&ComparisonPair, Option<&Judgment>)> {
        self.pairs.iter().zip(self.judgments.iter().map(Option::as_ref))
    }

    pub fn is_decided(&self, index: usize) -> bool {
        self.judgment(index).is_some()
    }

    /// Finds the pair joining two items, in either order.
    ///
    /// # Errors
    ///
    /// - `DiagonalImmutable` if both ids are the same item
    /// - `UnknownItem` if either id is not in the set
    pub fn find_pair(&self, x: &ItemId, y: &ItemId) -> Result<&ComparisonPair, ComparisonError> {
        self.items.find(x)?;
        self.items.find(y)?;
        if x == y {
            return Err(ComparisonError::DiagonalImmutable);
        }
        self.pairs
            .iter()
            .find(|pair| pair.joins(x, y))
            .ok_or_else(|| ComparisonError::UnknownItem(y.to_string()))
    }

    // ───────────────────────────────────────────────────────────────
    // Mutation
    // ───────────────────────────────────────────────────────────────

    /// Records a judgment, replacing any earlier one for the pair.
    ///
    /// A neutral value is stored as favoring the pair's first item.
    /// Returns `true` when the pair had no judgment before.
    ///
    /// # Errors
    ///
    /// - `PairOutOfRange` for an unknown pair index
    /// - `FavoredNotInPair` if `favored` is not one of the two items
    /// - `Value(OutOfRange)` if the value is below 1 or not finite
    pub fn set_judgment(
        &mut self,
        index: usize,
        value: JudgmentValue,
        favored: &ItemId,
    ) -> Result<bool, ComparisonError> {
        let pair = self.pair(index)?;
        if !pair.contains(favored) {
            return Err(ComparisonError::FavoredNotInPair {
                item: favored.to_string(),
                pair_index: index,
            });
        }
        let magnitude = value.magnitude();
        if !magnitude.is_finite() || magnitude < 1.0 {
            return Err(ValueError::out_of_range(value.format(), magnitude).into());
        }

        let favored = if value.is_neutral() {
            pair.item_a.id.clone()
        } else {
            favored.clone()
        };
        debug!(
            pair = index,
            item_a = %pair.item_a.id,
            item_b = %pair.item_b.id,
            favored = %favored,
            value = %value,
            "Judgment recorded"
        );

        let slot = &mut self.judgments[index];
        let first_time = slot.is_none();
        *slot = Some(Judgment::new(value, favored));
        Ok(first_time)
    }

    /// Records a judgment for the pair joining `x` and `y`.
    pub fn set_between(
        &mut self,
        x: &ItemId,
        y: &ItemId,
        value: JudgmentValue,
        favored: &ItemId,
    ) -> Result<bool, ComparisonError> {
        let index = self.find_pair(x, y)?.index;
        self.set_judgment(index, value, favored)
    }

    /// Drops every judgment.
    pub fn clear(&mut self) {
        self.judgments.iter_mut().for_each(|slot| *slot = None);
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    /// Value of pair `index` seen from `item`.
    ///
    /// # Errors
    ///
    /// - `PairOutOfRange` for an unknown pair index
    /// - `FavoredNotInPair` if `item` is not in the pair
    /// - `NotYetJudged` if the pair is undecided
    pub fn value_from(&self, item: &ItemId, index: usize) -> Result<f64, ComparisonError> {
        let pair = self.pair(index)?;
        if !pair.contains(item) {
            return Err(ComparisonError::FavoredNotInPair {
                item: item.to_string(),
                pair_index: index,
            });
        }
        self.judgment(index)
            .map(|judgment| judgment.value_from(item))
            .ok_or(ComparisonError::NotYetJudged(index))
    }

    /// How much more important `row` is than `col`.
    ///
    /// The diagonal is always 1; undecided cells are `None`.
    pub fn cell(&self, row: &ItemId, col: &ItemId) -> Result<Option<f64>, ComparisonError> {
        if row == col {
            self.items.find(row)?;
            return Ok(Some(1.0));
        }
        let pair = self.find_pair(row, col)?;
        Ok(self.judgment(pair.index).map(|j| j.value_from(row)))
    }

    /// Full N×N view in item order.
    pub fn dense(&self) -> Vec<Vec<Option<f64>>> {
        let n = self.items.len();
        let mut grid = vec![vec![None; n]; n];
        for (i, row) in grid.iter_mut().enumerate() {
            row[i] = Some(1.0);
        }
        for (pair, judgment) in self.entries() {
            let (Some(i), Some(j)) = (
                self.items.position(&pair.item_a.id),
                self.items.position(&pair.item_b.id),
            ) else {
                continue;
            };
            if let Some(judgment) = judgment {
                grid[i][j] = Some(judgment.value_from(&pair.item_a.id));
                grid[j][i] = Some(judgment.value_from(&pair.item_b.id));
            }
        }
        grid
    }

    pub fn decided_count(&self) -> usize {
        self.judgments.iter().filter(|j| j.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.judgments.iter().all(Option::is_some)
    }

    /// Decided pairs over total pairs, in `[0, 1]`.
    pub fn completion_ratio(&self) -> f64 {
        if self.pairs.is_empty() {
            return 1.0;
        }
        self.decided_count() as f64 / self.pairs.len() as f64
    }

    pub fn progress(&self) -> Percentage {
        Percentage::of(self.decided_count(), self.pairs.len())
    }

    /// First undecided pair after `from`, wrapping around.
    ///
    /// `from` itself is checked last.
    pub fn next_undecided(&self, from: usize) -> Option<usize> {
        let total = self.pairs.len();
        (1..=total)
            .map(|offset| (from + offset) % total)
            .find(|&index| !self.is_decided(index))
    }
}
