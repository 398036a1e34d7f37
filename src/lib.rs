pub mod errors;
pub mod library;
pub mod models;
pub mod recommendations;

pub use errors::AppError;
pub use library::Catalog;
pub use models::Book;
pub use recommendations::{PreferenceProfile, RecommendationEngine};

/// How many books each ranked list shows by default.
const DEFAULT_LIMIT: usize = 5;

/// Genre used for the rating-based list when the profile's favorite
/// authors don't suggest one. Matches the built-in sample catalog.
const DEFAULT_GENRE: &str = "Dark Fantasy";

/// Run the CLI driver.
///
/// Usage: `shelfmate [CATALOG_JSON [PROFILE_JSON [LIMIT]]]`
///
/// Falls back to the built-in sample catalog and the demo profile when
/// no files are given. Negative limits are clamped to zero.
pub fn run() -> Result<(), AppError> {
    let args: Vec<String> = std::env::args().collect();

    let catalog = match args.get(1) {
        Some(path) => Catalog::load_from_file(path)?,
        None => {
            log::info!("No catalog file given, using the built-in sample catalog");
            library::sample::sample_catalog()
        }
    };

    let profile = match args.get(2) {
        Some(path) => load_profile(path)?,
        None => demo_profile(),
    };

    let limit = match args.get(3) {
        Some(raw) => parse_limit(raw)?,
        None => DEFAULT_LIMIT,
    };

    if profile.is_empty() {
        log::warn!("Profile has no favorite authors or tags; content-based results will be empty");
    }

    let engine = RecommendationEngine::new(catalog);

    println!("=== BOOK RECOMMENDATION SYSTEM ===\n");

    println!("1. CONTENT-BASED RECOMMENDATIONS");
    println!("   Based on your preferences:");
    println!("   - Favorite Authors: {}", profile.favorite_authors.join(", "));
    println!("   - Favorite Tags: {}", profile.favorite_tags.join(", "));
    println!("   - Minimum Rating: {:.1}\n", profile.min_rating);
    print_recommendations(&engine.rank_by_preference(&profile, limit));

    println!("\n2. TOP-RATED {} BOOKS", DEFAULT_GENRE.to_uppercase());
    println!("   Highest rated books in the {} genre:\n", DEFAULT_GENRE);
    print_recommendations(&engine.rank_by_genre(DEFAULT_GENRE, limit));

    println!("\n=== END OF RECOMMENDATIONS ===");

    Ok(())
}

/// Load a preference profile from a JSON file.
fn load_profile(path: &str) -> Result<PreferenceProfile, AppError> {
    let json = std::fs::read_to_string(path)?;
    let profile: PreferenceProfile = serde_json::from_str(&json)?;
    log::info!("Loaded preference profile from {}", path);
    Ok(profile)
}

/// The demo profile matching the sample catalog.
fn demo_profile() -> PreferenceProfile {
    PreferenceProfile {
        favorite_authors: vec!["Rachel Gillig".to_string(), "Neil Gaiman".to_string()],
        favorite_tags: vec![
            "magic".to_string(),
            "dark".to_string(),
            "romance".to_string(),
        ],
        min_rating: 4.0,
    }
}

/// Parse a user-supplied limit, clamping negatives to zero.
fn parse_limit(raw: &str) -> Result<usize, AppError> {
    let parsed: i64 = raw
        .parse()
        .map_err(|_| AppError::Config(format!("Invalid limit '{}'", raw)))?;
    Ok(parsed.max(0) as usize)
}

/// Print a ranked list the way the reference output does.
fn print_recommendations(books: &[Book]) {
    if books.is_empty() {
        println!("   No recommendations found.");
        return;
    }

    for (i, book) in books.iter().enumerate() {
        println!("   {}. {}", i + 1, book);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_clamps_negatives() {
        assert_eq!(parse_limit("5").unwrap(), 5);
        assert_eq!(parse_limit("0").unwrap(), 0);
        assert_eq!(parse_limit("-3").unwrap(), 0);
        assert!(matches!(parse_limit("five"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_demo_profile_is_usable() {
        let profile = demo_profile();
        assert!(!profile.is_empty());
        assert_eq!(profile.min_rating, 4.0);
    }
}
