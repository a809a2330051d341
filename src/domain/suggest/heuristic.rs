//! Auto-suggest: fill a product matrix from measurable attributes.

use tracing::debug;

use super::quantize::{quantize, ScaleStep};
use super::{Dimension, PriceDamping, ProductSpecs, SuggestError};
use crate::domain::comparison::{ComparisonMatrix, ItemId, JudgmentValue};

/// Derives judgments for one dimension from product specs.
///
/// The result is only a suggestion: every cell it writes can be
/// overwritten afterwards, and re-running replaces the whole matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AutoSuggest {
    damping: PriceDamping,
}

impl AutoSuggest {
    pub fn new(damping: PriceDamping) -> Self {
        Self { damping }
    }

    /// Ratio of `a` over `b` before clamping.
    ///
    /// # Edge Cases
    ///
    /// - both scores zero: 1
    /// - only `b` zero: +inf, which clamps to 9
    /// - only `a` zero: 0, which clamps to 1/9
    pub fn raw_ratio(&self, dimension: Dimension, a: &ProductSpecs, b: &ProductSpecs) -> f64 {
        let score_a = dimension.score(a);
        let score_b = dimension.score(b);
        let ratio = match (score_a == 0.0, score_b == 0.0) {
            (true, true) => 1.0,
            (false, true) => f64::INFINITY,
            _ => score_a / score_b,
        };
        if dimension == Dimension::Price {
            self.damping.apply(ratio, a.price, b.price)
        } else {
            ratio
        }
    }

    /// Quantized judgment of `a` against `b`.
    pub fn suggest_pair(
        &self,
        dimension: Dimension,
        a: &ProductSpecs,
        b: &ProductSpecs,
    ) -> ScaleStep {
        quantize(self.raw_ratio(dimension, a, b))
    }

    /// Replaces every judgment in `matrix` with a suggestion.
    ///
    /// Items are matched to `products` by id.
    ///
    /// # Errors
    ///
    /// `MissingAttributes` if any item has no product entry. The matrix
    /// is not touched in that case.
    pub fn fill(
        &self,
        matrix: &mut ComparisonMatrix,
        dimension: Dimension,
        products: &[ProductSpecs],
    ) -> Result<(), SuggestError> {
        let lookup = |id: &ItemId| {
            products
                .iter()
                .find(|p| p.id == id.as_str())
                .ok_or_else(|| SuggestError::MissingAttributes {
                    item: id.to_string(),
                })
        };

        let mut steps = Vec::with_capacity(matrix.total_pairs());
        for pair in matrix.pairs() {
            let a = lookup(&pair.item_a.id)?;
            let b = lookup(&pair.item_b.id)?;
            let step = self.suggest_pair(dimension, a, b);
            debug!(
                dimension = %dimension,
                item_a = %pair.item_a.id,
                item_b = %pair.item_b.id,
                score_a = dimension.score(a),
                score_b = dimension.score(b),
                step = ?step,
                "Suggested judgment"
            );
            steps.push((pair.index, pair.item_a.id.clone(), pair.item_b.id.clone(), step));
        }

        for (index, item_a, item_b, step) in steps {
            let (value, favored) = match step {
                ScaleStep::Neutral => (JudgmentValue::neutral(), item_a),
                ScaleStep::FavorsFirst(n) => (JudgmentValue::integer(n), item_a),
                ScaleStep::FavorsSecond(n) => (JudgmentValue::integer(n), item_b),
            };
            matrix.set_judgment(index, value, &favored)?;
        }
        Ok(())
    }
}
