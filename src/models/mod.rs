use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Immutable once constructed; the catalog owns every `Book` for the
/// lifetime of the engine and ranking never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Genre label (e.g., "Dark Fantasy")
    pub genre: String,
    /// Average rating, expected range 0.0..=5.0
    pub rating: f64,
    /// Descriptive tags, matched case-insensitively
    #[serde(default)]
    pub tags: Vec<String>,
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' by {} (Rating: {:.1})",
            self.title, self.author, self.rating
        )
    }
}
