//! Slug generation
//!
//! Cafes are addressed externally by slug, never by record id. The slug is
//! derived from the display name exactly once, at creation time; renaming a
//! cafe later does not touch it, so external references stay valid.

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::repository::{RepoError, RepoResult};

/// Normalize a display name into a URL-safe token.
///
/// Lowercases, keeps ASCII alphanumeric runs and joins them with single
/// hyphens; everything else (punctuation, whitespace, non-ASCII) acts as a
/// separator and is dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Derive a slug from `candidate` that is unique within `table`.
///
/// Checks the store for an existing record with the same slug; on collision
/// appends `-2`, `-3`, ... until the store confirms uniqueness. The returned
/// slug is final — callers persist it in the same operation.
pub async fn generate_unique_slug(
    db: &Surreal<Db>,
    table: &str,
    candidate: &str,
) -> RepoResult<String> {
    let base = slugify(candidate);
    if base.is_empty() {
        return Err(RepoError::Validation("Slug cannot be empty.".to_string()));
    }

    let mut slug = base.clone();
    let mut counter = 2u32;

    while slug_exists(db, table, &slug).await? {
        slug = format!("{base}-{counter}");
        counter += 1;
    }

    Ok(slug)
}

async fn slug_exists(db: &Surreal<Db>, table: &str, slug: &str) -> RepoResult<bool> {
    #[derive(Deserialize)]
    struct Found {
        #[allow(dead_code)]
        slug: String,
    }

    let found: Vec<Found> = db
        .query("SELECT slug FROM type::table($table) WHERE slug = $slug LIMIT 1")
        .bind(("table", table.to_string()))
        .bind(("slug", slug.to_string()))
        .await?
        .take(0)?;

    Ok(!found.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_joins_words_with_hyphens() {
        assert_eq!(slugify("Blue Bottle"), "blue-bottle");
        assert_eq!(slugify("The  Daily   Grind"), "the-daily-grind");
    }

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(slugify("Joe's Cafe, 5th Ave."), "joe-s-cafe-5th-ave");
        assert_eq!(slugify("!!Espresso!!"), "espresso");
    }

    #[test]
    fn slugify_lowercases() {
        assert_eq!(slugify("BLUE BOTTLE"), "blue-bottle");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        // Non-ASCII characters act as separators rather than being transliterated
        assert_eq!(slugify("Caf\u{e9} Ol\u{e9}"), "caf-ol");
    }

    #[test]
    fn slugify_is_deterministic() {
        assert_eq!(slugify("Blue Bottle"), slugify("Blue Bottle"));
    }

    #[test]
    fn slugify_empty_input_yields_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
