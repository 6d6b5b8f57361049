//! Rating store and item catalog.
//!
//! These containers are built once per request by an upstream loader and
//! treated as read-only snapshots by every scorer. Ratings are stored
//! sparsely per user; the dense user-item matrix is derived on demand by
//! the collaborative scorer.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{RecomendarError, Result};
use crate::primitives::Vector;
use serde::{Deserialize, Serialize};

/// User identifier.
pub type UserId = u64;

/// Item identifier.
pub type ItemId = u64;

/// A single (user, item, rating) record.
///
/// # Examples
///
/// ```
/// use recomendar::data::Rating;
///
/// let r = Rating::new(1, 10, 4.5);
/// assert_eq!(r.user_id, 1);
/// assert_eq!(r.item_id, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// User who rated the item.
    pub user_id: UserId,
    /// Rated item.
    pub item_id: ItemId,
    /// Rating value (conventionally 1-5 stars).
    pub rating: f32,
}

impl Rating {
    /// Creates a new rating record.
    #[must_use]
    pub fn new(user_id: UserId, item_id: ItemId, rating: f32) -> Self {
        Self {
            user_id,
            item_id,
            rating,
        }
    }
}

/// An item with metadata and its precomputed description embedding.
///
/// Embeddings are produced upstream by an external embedding generator;
/// this crate only consumes the resulting vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier.
    pub item_id: ItemId,
    /// Display title.
    pub title: String,
    /// Description text the embedding was generated from.
    pub description: String,
    /// Fixed-length embedding of the description.
    pub embedding: Vector<f32>,
}

impl Item {
    /// Creates a new catalog item.
    #[must_use]
    pub fn new(
        item_id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        embedding: Vector<f32>,
    ) -> Self {
        Self {
            item_id,
            title: title.into(),
            description: description.into(),
            embedding,
        }
    }
}

/// Sparse in-memory table of user ratings.
///
/// Maps each user to their rated items. Absent entries are genuinely
/// absent here; the dense 0-for-unrated encoding only appears in the
/// derived user-item matrix.
///
/// # Examples
///
/// ```
/// use recomendar::data::{Rating, RatingStore};
///
/// let store = RatingStore::from_records([
///     Rating::new(1, 10, 5.0),
///     Rating::new(1, 20, 2.0),
/// ]);
/// assert_eq!(store.n_users(), 1);
/// assert_eq!(store.n_ratings(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingStore {
    by_user: BTreeMap<UserId, BTreeMap<ItemId, f32>>,
}

impl RatingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from rating records.
    ///
    /// Duplicate (user, item) pairs resolve last-write-wins, matching the
    /// upstream loader's deduplication.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = Rating>) -> Self {
        let mut store = Self::new();
        for r in records {
            store.insert(r);
        }
        store
    }

    /// Inserts a rating, replacing any previous rating for the same
    /// (user, item) pair.
    pub fn insert(&mut self, rating: Rating) {
        self.by_user
            .entry(rating.user_id)
            .or_default()
            .insert(rating.item_id, rating.rating);
    }

    /// Returns the ratings of one user, if present.
    #[must_use]
    pub fn user_ratings(&self, user_id: UserId) -> Option<&BTreeMap<ItemId, f32>> {
        self.by_user.get(&user_id)
    }

    /// Returns true if the user has at least one rating.
    #[must_use]
    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.by_user.contains_key(&user_id)
    }

    /// Iterates over user ids in ascending order.
    pub fn users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.by_user.keys().copied()
    }

    /// Every item id appearing in any rating, in ascending order.
    #[must_use]
    pub fn item_ids(&self) -> BTreeSet<ItemId> {
        self.by_user
            .values()
            .flat_map(|ratings| ratings.keys().copied())
            .collect()
    }

    /// Number of users with at least one rating.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.by_user.len()
    }

    /// Total number of ratings.
    #[must_use]
    pub fn n_ratings(&self) -> usize {
        self.by_user.values().map(BTreeMap::len).sum()
    }

    /// Returns true if the store has no ratings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }
}

/// In-memory item catalog with one embedding per item.
///
/// All embeddings share one dimensionality, fixed by the first inserted
/// item; the embedding model behind it is opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: BTreeMap<ItemId, Item>,
    embedding_dim: Option<usize>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from items.
    ///
    /// # Errors
    ///
    /// Returns an error if any item's embedding dimension disagrees with
    /// the first item's.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Inserts an item, replacing any previous item with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedding dimension disagrees with the
    /// catalog's established dimension.
    pub fn insert(&mut self, item: Item) -> Result<()> {
        match self.embedding_dim {
            None => self.embedding_dim = Some(item.embedding.len()),
            Some(dim) if dim != item.embedding.len() => {
                return Err(RecomendarError::dimension_mismatch(
                    dim,
                    item.embedding.len(),
                ));
            }
            Some(_) => {}
        }
        self.items.insert(item.item_id, item);
        Ok(())
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, item_id: ItemId) -> Option<&Item> {
        self.items.get(&item_id)
    }

    /// Looks up an item's embedding by id.
    #[must_use]
    pub fn embedding(&self, item_id: ItemId) -> Option<&Vector<f32>> {
        self.items.get(&item_id).map(|item| &item.embedding)
    }

    /// Iterates over (id, item) pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().map(|(&id, item)| (id, item))
    }

    /// Embedding dimensionality, None while the catalog is empty.
    #[must_use]
    pub fn embedding_dim(&self) -> Option<usize> {
        self.embedding_dim
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests;
