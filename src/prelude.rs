//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::collaborative::CollaborativeFilter;
pub use crate::content::ContentScorer;
pub use crate::data::{Item, ItemCatalog, ItemId, Rating, RatingStore, UserId};
pub use crate::error::{RecomendarError, Result};
pub use crate::explain::ScoreBreakdown;
pub use crate::hybrid::{HybridRecommender, ScoreComponents, Weights};
pub use crate::primitives::{Matrix, Vector};
