//! Items under comparison and the fixed, ordered set a session works on.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ComparisonError;

/// Opaque identifier of an item (criterion name or product id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An item together with the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            label: label.into(),
        }
    }

    /// An item whose identifier is its label, as criteria are.
    pub fn named(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: ItemId::new(label.clone()),
            label,
        }
    }
}

/// The ordered, immutable item list of one session.
///
/// Order is first-seen order and fixes the pair sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Validates and freezes an item list.
    ///
    /// # Errors
    ///
    /// - `BlankItem` if any identifier is empty or whitespace
    /// - `DuplicateItem` if an identifier repeats
    /// - `DuplicateLabel` if two items share a label; labels name items
    ///   on the wire and in the handoff
    /// - `InvalidItemSet` if fewer than 2 items remain
    pub fn new(items: Vec<Item>) -> Result<Self, ComparisonError> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut labels = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.as_str().trim().is_empty() {
                return Err(ComparisonError::BlankItem);
            }
            if !seen.insert(item.id.clone()) {
                return Err(ComparisonError::DuplicateItem(item.id.to_string()));
            }
            if !labels.insert(item.label.as_str()) {
                return Err(ComparisonError::DuplicateLabel(item.label.clone()));
            }
        }
        if items.len() < 2 {
            return Err(ComparisonError::InvalidItemSet { count: items.len() });
        }
        Ok(Self { items })
    }

    /// Builds a set of criteria from plain labels.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, ComparisonError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(labels.into_iter().map(Item::named).collect())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Position of an item in session order.
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Looks up an item by identifier.
    ///
    /// # Errors
    ///
    /// `UnknownItem` if the identifier is not in the set.
    pub fn find(&self, id: &ItemId) -> Result<&Item, ComparisonError> {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| ComparisonError::UnknownItem(id.to_string()))
    }
}
