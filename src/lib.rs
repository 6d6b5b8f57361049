//! Recomendar: hybrid recommendation engine with explainable scoring.
//!
//! Recomendar blends two independent signals, item-based collaborative
//! filtering over historical ratings and content similarity over item
//! embeddings, into a single ranked recommendation list, and can decompose
//! any recommendation's score into the additive contribution of each signal.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
//!
//! // Ratings collected upstream (user, item, 1-5 stars).
//! let store = RatingStore::from_records([
//!     Rating::new(1, 10, 5.0),
//!     Rating::new(1, 20, 1.0),
//!     Rating::new(2, 10, 4.0),
//!     Rating::new(2, 20, 5.0),
//!     Rating::new(2, 30, 3.0),
//! ]);
//!
//! // Item metadata with precomputed description embeddings.
//! let catalog = ItemCatalog::from_items([
//!     Item::new(10, "Dune", "epic desert saga", Vector::from_slice(&[1.0, 0.0])),
//!     Item::new(20, "Heat", "crime thriller", Vector::from_slice(&[0.0, 1.0])),
//!     Item::new(30, "Arrival", "alien contact drama", Vector::from_slice(&[1.0, 1.0])),
//! ]).unwrap();
//!
//! let recommender = HybridRecommender::new().with_weights(0.5, 0.5).with_top_n(2);
//!
//! let items = recommender.recommend(1, &store, &catalog).unwrap();
//! assert_eq!(items, vec![30]);
//!
//! let explanation = recommender.explain(1, 30, &store, &catalog).unwrap();
//! assert!(explanation.contains("Recommendation score for item 30"));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: Rating store and item catalog
//! - [`collaborative`]: Item-based collaborative filtering scores
//! - [`content`]: Embedding-similarity content scores
//! - [`hybrid`]: Weighted hybrid combination and ranking
//! - [`explain`]: Score attribution and textual explanations
//! - [`metrics`]: Ranking metrics for offline evaluation

pub mod collaborative;
pub mod content;
pub mod data;
pub mod error;
pub mod explain;
pub mod hybrid;
pub mod metrics;
pub mod prelude;
pub mod primitives;

pub use error::{RecomendarError, Result};
pub use hybrid::{HybridRecommender, ScoreComponents, Weights};
pub use primitives::{Matrix, Vector};
