//! Ranking metrics for recommendation lists.
//!
//! Common offline-evaluation workflow: hold out part of a user's ratings,
//! recommend from the rest, and measure how highly the held-out items rank.

/// Hit@K: whether the target item appears in the top-K recommendations.
///
/// Returns 1.0 if the target is in the top K, 0.0 otherwise.
///
/// # Examples
///
/// ```
/// use recomendar::metrics::hit_at_k;
///
/// let recommended = vec![50, 30, 10, 40, 20];
///
/// assert_eq!(hit_at_k(&recommended, &30, 1), 0.0);
/// assert_eq!(hit_at_k(&recommended, &30, 2), 1.0);
/// ```
#[must_use]
pub fn hit_at_k<T: PartialEq>(recommended: &[T], target: &T, k: usize) -> f32 {
    if recommended.iter().take(k).any(|item| item == target) {
        1.0
    } else {
        0.0
    }
}

/// Reciprocal rank: 1/rank of the target item, 0.0 if absent.
///
/// # Examples
///
/// ```
/// use recomendar::metrics::reciprocal_rank;
///
/// let recommended = vec![50, 30, 10];
///
/// assert!((reciprocal_rank(&recommended, &50) - 1.0).abs() < 1e-6);
/// assert!((reciprocal_rank(&recommended, &30) - 0.5).abs() < 1e-6);
/// assert!((reciprocal_rank(&recommended, &99) - 0.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn reciprocal_rank<T: PartialEq>(recommended: &[T], target: &T) -> f32 {
    for (i, item) in recommended.iter().enumerate() {
        if item == target {
            return 1.0 / (i + 1) as f32;
        }
    }
    0.0
}

/// Mean Reciprocal Rank over multiple users.
///
/// Returns 0.0 when the inputs are empty or mismatched in length.
///
/// # Examples
///
/// ```
/// use recomendar::metrics::mrr;
///
/// let recommended = vec![
///     vec![10, 20, 30],  // target at rank 1
///     vec![20, 10, 30],  // target at rank 2
/// ];
/// let targets = vec![10, 10];
///
/// assert!((mrr(&recommended, &targets) - 0.75).abs() < 1e-6);
/// ```
#[must_use]
pub fn mrr<T: PartialEq>(recommended: &[Vec<T>], targets: &[T]) -> f32 {
    if recommended.is_empty() || recommended.len() != targets.len() {
        return 0.0;
    }
    let total: f32 = recommended
        .iter()
        .zip(targets.iter())
        .map(|(list, target)| reciprocal_rank(list, target))
        .sum();
    total / recommended.len() as f32
}

/// Precision@K: fraction of the top-K recommendations that are relevant.
///
/// Returns 0.0 when k is 0 or the recommendation list is empty.
///
/// # Examples
///
/// ```
/// use recomendar::metrics::precision_at_k;
///
/// let recommended = vec![10, 20, 30, 40];
/// let relevant = vec![10, 30];
///
/// assert!((precision_at_k(&recommended, &relevant, 2) - 0.5).abs() < 1e-6);
/// assert!((precision_at_k(&recommended, &relevant, 4) - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn precision_at_k<T: PartialEq>(recommended: &[T], relevant: &[T], k: usize) -> f32 {
    let considered = recommended.len().min(k);
    if considered == 0 {
        return 0.0;
    }
    let hits = recommended
        .iter()
        .take(k)
        .filter(|item| relevant.contains(*item))
        .count();
    hits as f32 / considered as f32
}
