//! Content-based scoring over item embeddings.
//!
//! Scores every unrated catalog item by its embedding similarity to the
//! items the user previously liked.

use std::collections::BTreeMap;

use crate::data::{ItemCatalog, ItemId, RatingStore, UserId};
use crate::primitives::Vector;

/// Ratings strictly above this count as "liked".
///
/// Assumes a 1-5 star style rating scale; anything above the midpoint is
/// taken as positive signal. Hardcoded policy constant.
pub const LIKED_THRESHOLD: f32 = 3.0;

/// Content similarity scorer.
///
/// For each catalog item, computes the cosine similarity between its
/// embedding and each liked item's embedding, averaged across liked items.
/// Users with no liked items fall back to a flat score of 0.0 for every
/// item (cold start).
///
/// # Examples
///
/// ```
/// use recomendar::content::ContentScorer;
/// use recomendar::data::{Item, ItemCatalog, Rating, RatingStore};
/// use recomendar::primitives::Vector;
///
/// let store = RatingStore::from_records([Rating::new(1, 10, 5.0)]);
/// let catalog = ItemCatalog::from_items([
///     Item::new(10, "a", "", Vector::from_slice(&[1.0, 0.0])),
///     Item::new(30, "b", "", Vector::from_slice(&[1.0, 1.0])),
/// ]).unwrap();
///
/// let scores = ContentScorer::new().score_user(1, &store, &catalog);
/// // Item 10 is rated, so only item 30 is scored.
/// assert_eq!(scores.len(), 1);
/// assert!((scores[&30] - 1.0 / 2.0_f32.sqrt()).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentScorer;

impl ContentScorer {
    /// Creates a new scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Scores every catalog item the user has not rated.
    ///
    /// Lenient by design: a user absent from the store has an empty
    /// history and every catalog item scores 0.0; a liked item missing
    /// from the catalog is silently skipped rather than failing the
    /// request. Items the user rated are excluded from the output at any
    /// rating value, liked or not.
    #[must_use]
    pub fn score_user(
        &self,
        user_id: UserId,
        store: &RatingStore,
        catalog: &ItemCatalog,
    ) -> BTreeMap<ItemId, f32> {
        let empty = BTreeMap::new();
        let history = store.user_ratings(user_id).unwrap_or(&empty);

        let liked_embeddings: Vec<&Vector<f32>> = history
            .iter()
            .filter(|(_, &rating)| rating > LIKED_THRESHOLD)
            .filter_map(|(&item_id, _)| catalog.embedding(item_id))
            .collect();

        let mut scores = BTreeMap::new();
        for (item_id, item) in catalog.iter() {
            if history.contains_key(&item_id) {
                continue;
            }
            let score = Self::mean_similarity(&item.embedding, &liked_embeddings);
            scores.insert(item_id, score);
        }
        scores
    }

    /// Mean cosine similarity against the liked embeddings. The mean of an
    /// empty similarity vector is 0.0, which doubles as the cold-start
    /// fallback when the user has nothing usable to compare against.
    fn mean_similarity(embedding: &Vector<f32>, liked: &[&Vector<f32>]) -> f32 {
        let similarities: Vector<f32> = Vector::from_vec(
            liked
                .iter()
                .map(|other| embedding.cosine_similarity(other))
                .collect(),
        );
        similarities.mean()
    }
}
