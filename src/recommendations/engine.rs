//! Recommendation engine implementation.
//!
//! Generates book recommendations by:
//! 1. Scoring every catalog entry against the user's profile
//! 2. Filtering on score and minimum rating
//! 3. Sorting descending (stable, so ties keep catalog order)
//!
//! Both ranking operations are pure functions of the catalog plus
//! their arguments; calling one twice with the same inputs yields the
//! same ordered result.

use crate::library::Catalog;
use crate::models::Book;
use crate::recommendations::types::PreferenceProfile;
use std::cmp::Ordering;

/// Points added per case-insensitive (book-tag, preference-tag) match.
const TAG_MATCH_POINTS: f64 = 1.0;

/// Points added per case-insensitive favorite-author match.
const AUTHOR_MATCH_POINTS: f64 = 3.0;

/// A catalog entry paired with its similarity score.
///
/// Lives only for the duration of one ranking call; the index keeps
/// catalog order available for stable tie-breaking.
struct ScoredBook {
    index: usize,
    score: f64,
}

/// Engine for ranking a fixed book catalog.
///
/// Holds the catalog read-only for its whole lifetime. Both ranking
/// operations take `&self` and allocate their own working set, so an
/// engine can be shared freely across calls.
pub struct RecommendationEngine {
    catalog: Catalog,
}

impl RecommendationEngine {
    /// Create an engine over the given catalog.
    ///
    /// Empty catalogs are accepted; every ranking call over one simply
    /// returns an empty list.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this engine ranks over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank the catalog against a user's preferences.
    ///
    /// Keeps books with a positive similarity score whose rating meets
    /// `profile.min_rating`, sorted by score descending. Ties keep
    /// catalog order. At most `limit` books are returned; a limit of
    /// zero yields an empty list.
    pub fn rank_by_preference(&self, profile: &PreferenceProfile, limit: usize) -> Vec<Book> {
        let books = self.catalog.books();

        let mut scored: Vec<ScoredBook> = Vec::new();
        for (index, book) in books.iter().enumerate() {
            let score = Self::similarity_score(book, profile);
            if score > 0.0 && book.rating >= profile.min_rating {
                scored.push(ScoredBook { index, score });
            }
        }

        // Vec::sort_by is stable, so equal scores keep catalog order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        log::debug!(
            "Content-based ranking: {} of {} books matched, returning up to {}",
            scored.len(),
            books.len(),
            limit
        );

        scored
            .into_iter()
            .take(limit)
            .map(|s| books[s.index].clone())
            .collect()
    }

    /// Rank a genre's books by rating.
    ///
    /// Filters on case-insensitive genre equality (no rating threshold
    /// applies), sorted by rating descending with catalog order kept on
    /// ties. An unknown genre yields an empty list.
    pub fn rank_by_genre(&self, genre: &str, limit: usize) -> Vec<Book> {
        let mut matched: Vec<&Book> = self
            .catalog
            .books()
            .iter()
            .filter(|book| book.genre.eq_ignore_ascii_case(genre))
            .collect();

        matched.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

        log::debug!(
            "Rating-based ranking: {} books in genre '{}', returning up to {}",
            matched.len(),
            genre,
            limit
        );

        matched.into_iter().take(limit).cloned().collect()
    }

    /// Similarity score between one book and one profile.
    ///
    /// Each case-insensitively matching (book-tag, preference-tag) pair
    /// adds one point; duplicates on either side each count, so the
    /// contribution is a pairwise count rather than an overlap capped
    /// at one. Each matching favorite-author entry adds three points.
    /// Comparison is exact ASCII-case-folded equality; no substring
    /// matching and no input mutation.
    pub fn similarity_score(book: &Book, profile: &PreferenceProfile) -> f64 {
        let mut score = 0.0;

        for preferred in &profile.favorite_tags {
            for tag in &book.tags {
                if tag.eq_ignore_ascii_case(preferred) {
                    score += TAG_MATCH_POINTS;
                }
            }
        }

        for preferred in &profile.favorite_authors {
            if book.author.eq_ignore_ascii_case(preferred) {
                score += AUTHOR_MATCH_POINTS;
            }
        }

        score
    }
}
