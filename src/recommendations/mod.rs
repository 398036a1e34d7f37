//! Recommendation engine for book discovery.
//!
//! Ranks a fixed catalog two independent ways: content-based (tag and
//! author affinity against a user profile) and rating-based (top-rated
//! within a genre).

pub mod engine;
pub mod types;

pub use engine::RecommendationEngine;
pub use types::PreferenceProfile;
