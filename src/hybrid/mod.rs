//! Weighted hybrid combination of collaborative and content scores.

use std::cmp::Ordering;

use crate::collaborative::CollaborativeFilter;
use crate::content::ContentScorer;
use crate::data::{ItemCatalog, ItemId, RatingStore, UserId};
use crate::error::Result;
use crate::explain;
use serde::{Deserialize, Serialize};

/// Linear blend weights for the two signals.
///
/// Non-negative by convention and conventionally summing to 1, though
/// neither is enforced; only ordering and linear combination of the
/// resulting scores matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Weight of the collaborative filtering score.
    pub collaborative: f32,
    /// Weight of the content similarity score.
    pub content: f32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            collaborative: 0.5,
            content: 0.5,
        }
    }
}

impl Weights {
    /// Creates a new weight pair.
    #[must_use]
    pub fn new(collaborative: f32, content: f32) -> Self {
        Self {
            collaborative,
            content,
        }
    }

    /// The weighted combination of one item's two component scores.
    #[must_use]
    pub fn combine(&self, collaborative: f32, content: f32) -> f32 {
        self.collaborative * collaborative + self.content * content
    }
}

/// Per-item score decomposition returned by
/// [`HybridRecommender::score_components`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    /// Collaborative filtering score (0.0 if the item was not scored).
    pub collaborative: f32,
    /// Content similarity score (0.0 if the item was not scored).
    pub content: f32,
    /// Weighted combination of the two.
    pub combined: f32,
}

/// Hybrid recommender blending collaborative and content signals.
///
/// Stateless between calls: both component score maps are recomputed from
/// the store and catalog on every invocation, so results always reflect
/// the snapshot passed in. The recommender itself never mutates its
/// inputs.
///
/// # Examples
///
/// ```
/// use recomendar::prelude::*;
///
/// let store = RatingStore::from_records([
///     Rating::new(1, 10, 5.0),
///     Rating::new(2, 10, 4.0),
///     Rating::new(2, 30, 5.0),
/// ]);
/// let catalog = ItemCatalog::from_items([
///     Item::new(10, "a", "", Vector::from_slice(&[1.0, 0.0])),
///     Item::new(30, "b", "", Vector::from_slice(&[1.0, 1.0])),
/// ]).unwrap();
///
/// let recommender = HybridRecommender::new().with_top_n(5);
/// let items = recommender.recommend(1, &store, &catalog).unwrap();
/// assert_eq!(items, vec![30]);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HybridRecommender {
    weights: Weights,
    top_n: usize,
}

impl Default for HybridRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl HybridRecommender {
    /// Creates a recommender with equal weights (0.5, 0.5) and top_n 10.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: Weights::default(),
            top_n: 10,
        }
    }

    /// Sets the blend weights.
    #[must_use]
    pub fn with_weights(mut self, collaborative: f32, content: f32) -> Self {
        self.weights = Weights::new(collaborative, content);
        self
    }

    /// Sets the maximum number of recommendations returned.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// The configured blend weights.
    #[must_use]
    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// The configured result cap.
    #[must_use]
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Returns up to `top_n` item ids ranked by combined score, best first.
    ///
    /// Only items present in BOTH component score maps are ranked: an item
    /// missing from either signal is excluded outright, even with a strong
    /// score in the other. Rated items never appear, since neither scorer
    /// emits them. Exact score ties keep ascending item-id order (the sort
    /// is stable over the intersection walk).
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecomendarError::UnknownUser`] if the user has no
    /// ratings in the store.
    pub fn recommend(
        &self,
        user_id: UserId,
        store: &RatingStore,
        catalog: &ItemCatalog,
    ) -> Result<Vec<ItemId>> {
        let cf_scores = CollaborativeFilter::new().score_user(user_id, store)?;
        let content_scores = ContentScorer::new().score_user(user_id, store, catalog);

        let mut ranked: Vec<(ItemId, f32)> = cf_scores
            .iter()
            .filter_map(|(&item_id, &cf)| {
                content_scores
                    .get(&item_id)
                    .map(|&content| (item_id, self.weights.combine(cf, content)))
            })
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(self.top_n);

        Ok(ranked.into_iter().map(|(item_id, _)| item_id).collect())
    }

    /// Recomputes both component scores for one item and their weighted
    /// combination.
    ///
    /// An item absent from a component's score map (already rated, or
    /// outside the catalog) contributes 0.0 for that component rather
    /// than failing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecomendarError::UnknownUser`] if the user has no
    /// ratings in the store.
    pub fn score_components(
        &self,
        user_id: UserId,
        item_id: ItemId,
        store: &RatingStore,
        catalog: &ItemCatalog,
    ) -> Result<ScoreComponents> {
        let cf_scores = CollaborativeFilter::new().score_user(user_id, store)?;
        let content_scores = ContentScorer::new().score_user(user_id, store, catalog);

        let collaborative = cf_scores.get(&item_id).copied().unwrap_or(0.0);
        let content = content_scores.get(&item_id).copied().unwrap_or(0.0);
        Ok(ScoreComponents {
            collaborative,
            content,
            combined: self.weights.combine(collaborative, content),
        })
    }

    /// Renders a textual explanation attributing one item's combined score
    /// to each signal.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecomendarError::UnknownUser`] if the user has no
    /// ratings in the store.
    pub fn explain(
        &self,
        user_id: UserId,
        item_id: ItemId,
        store: &RatingStore,
        catalog: &ItemCatalog,
    ) -> Result<String> {
        let components = self.score_components(user_id, item_id, store, catalog)?;
        Ok(explain::render_explanation(
            item_id,
            self.weights,
            &components,
        ))
    }
}
