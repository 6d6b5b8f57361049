//! Score attribution and textual explanations.
//!
//! The combined score is a 2-feature linear model
//! `f(cf, content) = w_cf·cf + w_content·content`. For a linear model with
//! a zero baseline, the exact additive attribution of each feature is its
//! own weighted term, and any general-purpose attribution method collapses
//! to the same closed form, so the decomposition is computed directly.

use crate::data::ItemId;
use crate::hybrid::{ScoreComponents, Weights};
use crate::primitives::Vector;

/// Additive decomposition of a linear prediction into per-feature
/// contributions relative to a zero baseline.
///
/// # Examples
///
/// ```
/// use recomendar::explain::ScoreBreakdown;
///
/// let breakdown = ScoreBreakdown::from_linear(&[0.5, 0.5], &[1.6, 0.8]);
/// assert!((breakdown.prediction - 1.2).abs() < 1e-6);
/// assert!(breakdown.verify_sum(1e-6));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Contribution of each feature to the prediction.
    pub contributions: Vector<f32>,
    /// Total prediction (sum of contributions; the baseline is zero).
    pub prediction: f32,
}

impl ScoreBreakdown {
    /// Computes the exact attribution for a linear model with zero
    /// baseline: each feature contributes `weight[i] * feature[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `weights` and `features` have different lengths.
    #[must_use]
    pub fn from_linear(weights: &[f32], features: &[f32]) -> Self {
        assert_eq!(
            weights.len(),
            features.len(),
            "Weights and features must have same length"
        );
        let contributions: Vec<f32> = weights
            .iter()
            .zip(features.iter())
            .map(|(&w, &x)| w * x)
            .collect();
        let prediction = contributions.iter().sum();
        Self {
            contributions: Vector::from_vec(contributions),
            prediction,
        }
    }

    /// Verifies that the contributions sum to the prediction.
    #[must_use]
    pub fn verify_sum(&self, tolerance: f32) -> bool {
        (self.contributions.sum() - self.prediction).abs() < tolerance
    }
}

/// Renders the human-readable explanation for one recommendation.
///
/// Scores and contributions are reported to 3 decimal places. Components
/// missing from a scorer's output arrive here already defaulted to 0.0,
/// so their contributions render as 0.000 rather than failing.
#[must_use]
pub fn render_explanation(
    item_id: ItemId,
    weights: Weights,
    components: &ScoreComponents,
) -> String {
    let breakdown = ScoreBreakdown::from_linear(
        &[weights.collaborative, weights.content],
        &[components.collaborative, components.content],
    );
    let cf_contrib = breakdown.contributions[0];
    let content_contrib = breakdown.contributions[1];

    format!(
        "Recommendation score for item {item_id}: {:.3}\n \
         - Collaborative filtering contribution: {cf_contrib:.3}\n \
         - Content similarity contribution: {content_contrib:.3}",
        components.combined
    )
}
