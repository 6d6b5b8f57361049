//! Item-based collaborative filtering.
//!
//! Predicts a user's affinity for unrated items from item-item cosine
//! similarity over the rating matrix, following the classic item-based
//! neighborhood formulation.

use std::collections::BTreeMap;

use crate::data::{ItemId, RatingStore, UserId};
use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;

/// Guards the similarity-weighted average against division by zero.
const EPSILON: f32 = 1e-8;

/// Item-based collaborative filtering scorer.
///
/// Stateless: every call rebuilds the dense user-item matrix and the
/// item-item similarity matrix from the current store, so scores always
/// reflect the snapshot passed in.
///
/// # Algorithm
///
/// 1. Build the dense user-item matrix (absent ratings become 0.0)
/// 2. Compute item-item cosine similarity over matrix columns
/// 3. For each item the user has not rated, predict
///    `score = Σ_j sim(i,j)·r(u,j) / (Σ_j |sim(i,j)| + ε)`
///
/// # Examples
///
/// ```
/// use recomendar::collaborative::CollaborativeFilter;
/// use recomendar::data::{Rating, RatingStore};
///
/// let store = RatingStore::from_records([
///     Rating::new(1, 10, 5.0),
///     Rating::new(2, 10, 4.0),
///     Rating::new(2, 30, 3.0),
/// ]);
///
/// let scores = CollaborativeFilter::new().score_user(1, &store).unwrap();
/// // User 1 has not rated item 30, so it gets a predicted score.
/// assert!(scores.contains_key(&30));
/// assert!(!scores.contains_key(&10));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CollaborativeFilter;

impl CollaborativeFilter {
    /// Creates a new scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Predicts a score for every item the user has not rated.
    ///
    /// The returned map covers exactly the items whose entry in the user's
    /// matrix row is 0.0. A genuine zero-valued rating is indistinguishable
    /// from an absent one at this point; the dense encoding conflates them
    /// and downstream consumers inherit that.
    ///
    /// A user whose row is all zeros still gets a score for every item:
    /// each works out to roughly 0/ε, which is uninformative but valid.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::UnknownUser`] if the user has no ratings
    /// in the store.
    pub fn score_user(
        &self,
        user_id: UserId,
        store: &RatingStore,
    ) -> Result<BTreeMap<ItemId, f32>> {
        if !store.contains_user(user_id) {
            return Err(RecomendarError::unknown_user(user_id));
        }

        let (matrix, users, items) = Self::user_item_matrix(store);
        let similarity = Self::item_similarity(&matrix);

        let user_row = users
            .iter()
            .position(|&u| u == user_id)
            .ok_or_else(|| RecomendarError::unknown_user(user_id))?;
        let ratings = matrix.row(user_row);

        let mut scores = BTreeMap::new();
        for (i, &item_id) in items.iter().enumerate() {
            if ratings[i] != 0.0 {
                continue;
            }
            let sims = similarity.row(i);
            let weighted: f32 = sims.iter().zip(ratings.iter()).map(|(&s, &r)| s * r).sum();
            let total_weight: f32 = sims.iter().map(|s| s.abs()).sum();
            scores.insert(item_id, weighted / (total_weight + EPSILON));
        }
        Ok(scores)
    }

    /// Builds the dense user-item matrix from the sparse store.
    ///
    /// Rows are users and columns are items, both in ascending id order,
    /// which makes the matrix independent of rating insertion order.
    /// Returns the matrix together with the row and column id labels.
    #[must_use]
    pub fn user_item_matrix(store: &RatingStore) -> (Matrix<f32>, Vec<UserId>, Vec<ItemId>) {
        let users: Vec<UserId> = store.users().collect();
        let items: Vec<ItemId> = store.item_ids().into_iter().collect();

        let mut matrix = Matrix::zeros(users.len(), items.len());
        for (row, &user_id) in users.iter().enumerate() {
            if let Some(ratings) = store.user_ratings(user_id) {
                for (col, &item_id) in items.iter().enumerate() {
                    if let Some(&value) = ratings.get(&item_id) {
                        matrix.set(row, col, value);
                    }
                }
            }
        }
        (matrix, users, items)
    }

    /// Computes the symmetric item-item cosine similarity matrix over the
    /// columns of a user-item matrix.
    ///
    /// Entries are in [-1, 1]. An item column with zero norm (no ratings)
    /// has similarity 0.0 with every item, including itself.
    #[must_use]
    pub fn item_similarity(matrix: &Matrix<f32>) -> Matrix<f32> {
        let n_items = matrix.n_cols();
        let columns: Vec<_> = (0..n_items).map(|j| matrix.column(j)).collect();

        let mut similarity = Matrix::zeros(n_items, n_items);
        for i in 0..n_items {
            for j in i..n_items {
                let sim = columns[i].cosine_similarity(&columns[j]);
                similarity.set(i, j, sim);
                similarity.set(j, i, sim);
            }
        }
        similarity
    }
}
