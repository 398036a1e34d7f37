//! Catalog loading and ownership.
//!
//! The engine never reads from disk itself; it is handed a [`Catalog`]
//! built here, either from an in-memory list, a JSON string, or a JSON
//! file. The catalog is fixed for the lifetime of the engine.

pub mod sample;

use crate::errors::AppError;
use crate::models::Book;
use std::path::Path;

/// The fixed, in-memory collection of books a
/// [`RecommendationEngine`](crate::recommendations::RecommendationEngine)
/// ranks over.
///
/// Insertion order is meaningful: ranking ties are resolved by catalog
/// order, and catalogs typically group an author's books together.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog from an already-constructed book list.
    ///
    /// Accepts an empty list; ranking over it yields empty results.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Parse a catalog from a JSON array of books.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let books: Vec<Book> = serde_json::from_str(json)?;
        Ok(Self { books })
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} books from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All books, in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
