//! Canonical pair generation over an ordered item set.

use serde::Serialize;

use super::{ComparisonError, Item, ItemId, ItemSet};

/// One unordered comparison, with `item_a` preceding `item_b` in session order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonPair {
    /// Position in the traversal sequence.
    pub index: usize,
    pub item_a: Item,
    pub item_b: Item,
}

impl ComparisonPair {
    pub fn contains(&self, id: &ItemId) -> bool {
        &self.item_a.id == id || &self.item_b.id == id
    }

    /// True if this pair joins `x` and `y`, in either order.
    pub fn joins(&self, x: &ItemId, y: &ItemId) -> bool {
        (&self.item_a.id == x && &self.item_b.id == y)
            || (&self.item_a.id == y && &self.item_b.id == x)
    }

    /// The member of the pair that is not `id`.
    pub fn other(&self, id: &ItemId) -> Option<&Item> {
        if &self.item_a.id == id {
            Some(&self.item_b)
        } else if &self.item_b.id == id {
            Some(&self.item_a)
        } else {
            None
        }
    }
}

/// Produces the upper-triangle pair list for an item set.
pub struct PairGenerator;

impl PairGenerator {
    /// Validates a raw item list and generates its pairs.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidItemSet` for fewer than 2 items, or
    /// `DuplicateItem`/`BlankItem` for malformed lists.
    pub fn generate(items: &[Item]) -> Result<Vec<ComparisonPair>, ComparisonError> {
        let set = ItemSet::new(items.to_vec())?;
        Ok(Self::for_set(&set))
    }

    /// Generates pairs for an already validated set.
    ///
    /// Iterates `i` outer and `j` inner, so the order is stable.
    pub fn for_set(items: &ItemSet) -> Vec<ComparisonPair> {
        let n = items.len();
        let mut pairs = Vec::with_capacity(Self::pair_count(n));
        for i in 0..n {
            for j in (i + 1)..n {
                pairs.push(ComparisonPair {
                    index: pairs.len(),
                    item_a: items.items()[i].clone(),
                    item_b: items.items()[j].clone(),
                });
            }
        }
        pairs
    }

    /// Number of pairs for `n` items: n(n-1)/2.
    pub fn pair_count(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }
}
