//! Built-in sample catalog.
//!
//! Used by the CLI when no catalog file is supplied, and by tests that
//! want a realistic data set. Fifteen dark-fantasy and gothic titles,
//! grouped by author in catalog order.

use crate::library::Catalog;
use crate::models::Book;

fn book(title: &str, author: &str, genre: &str, rating: f64, tags: &[&str]) -> Book {
    Book {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        rating,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The built-in demo catalog.
pub fn sample_catalog() -> Catalog {
    Catalog::from_books(vec![
        // Rachel Gillig
        book(
            "One Dark Window",
            "Rachel Gillig",
            "Dark Fantasy",
            4.2,
            &["magic", "romance", "dark", "fae", "cards"],
        ),
        book(
            "Two Twisted Crowns",
            "Rachel Gillig",
            "Dark Fantasy",
            4.3,
            &["magic", "romance", "dark", "fae", "kingdom"],
        ),
        // Neil Gaiman
        book(
            "American Gods",
            "Neil Gaiman",
            "Dark Fantasy",
            4.1,
            &["mythology", "magic", "gods", "dark"],
        ),
        book(
            "The Ocean at the End of the Lane",
            "Neil Gaiman",
            "Dark Fantasy",
            4.0,
            &["magic", "childhood", "dark", "mysterious"],
        ),
        book(
            "Neverwhere",
            "Neil Gaiman",
            "Dark Fantasy",
            4.1,
            &["urban fantasy", "london", "dark", "adventure"],
        ),
        // Other dark fantasy
        book(
            "The Name of the Wind",
            "Patrick Rothfuss",
            "Dark Fantasy",
            4.5,
            &["magic", "adventure", "academy", "revenge"],
        ),
        book(
            "The Lies of Locke Lamora",
            "Scott Lynch",
            "Dark Fantasy",
            4.3,
            &["heist", "thieves", "dark", "witty"],
        ),
        book(
            "The Blade Itself",
            "Joe Abercrombie",
            "Dark Fantasy",
            4.2,
            &["gritty", "war", "dark", "complex"],
        ),
        book(
            "Jonathan Strange & Mr Norrell",
            "Susanna Clarke",
            "Dark Fantasy",
            4.0,
            &["magic", "historical", "england", "wizards"],
        ),
        book(
            "Piranesi",
            "Susanna Clarke",
            "Dark Fantasy",
            4.2,
            &["mysterious", "labyrinth", "surreal", "magic"],
        ),
        book(
            "The Library at Mount Char",
            "Scott Hawkins",
            "Dark Fantasy",
            4.0,
            &["dark", "mysterious", "gods", "brutal"],
        ),
        book(
            "The Poppy War",
            "R.F. Kuang",
            "Dark Fantasy",
            4.1,
            &["war", "dark", "magic", "military"],
        ),
        // Gothic fiction
        book(
            "The Vampire Chronicles",
            "Anne Rice",
            "Gothic Fiction",
            4.0,
            &["vampires", "dark", "immortality", "gothic"],
        ),
        book(
            "Dracula",
            "Bram Stoker",
            "Gothic Fiction",
            4.0,
            &["vampires", "gothic", "horror", "classic"],
        ),
        book(
            "Frankenstein",
            "Mary Shelley",
            "Gothic Fiction",
            3.8,
            &["gothic", "horror", "science", "classic"],
        ),
    ])
}
