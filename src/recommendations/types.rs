//! Data types for the recommendation system.

use serde::{Deserialize, Serialize};

/// A user's stated ranking inputs.
///
/// All string matching against the catalog is case-insensitive. The
/// profile is supplied fresh per ranking request and never mutated by
/// the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// Authors whose books get a score bonus
    #[serde(default)]
    pub favorite_authors: Vec<String>,
    /// Tags that contribute to the similarity score
    #[serde(default)]
    pub favorite_tags: Vec<String>,
    /// Books rated below this are excluded from content-based results
    #[serde(default)]
    pub min_rating: f64,
}

impl PreferenceProfile {
    /// Whether this profile can match anything at all.
    ///
    /// With no favorite authors and no favorite tags every book scores
    /// zero, so content-based ranking returns nothing.
    pub fn is_empty(&self) -> bool {
        self.favorite_authors.is_empty() && self.favorite_tags.is_empty()
    }
}
