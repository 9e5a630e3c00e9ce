//! crates/bookbites_core/src/recommend.rs
//!
//! The recommendation engine. A single-pass, deterministic scoring over the
//! catalog, re-derived from the current saved-book state on every call —
//! saved books change far more often than the catalog, so nothing here is
//! cached.

use std::collections::HashSet;

use crate::domain::{Book, User};

const SCORE_CATEGORY: i32 = 5;
const SCORE_AUTHOR: i32 = 3;
const SCORE_POPULAR: i32 = 1;

/// How many popular books to surface for a user with no history.
const COLD_START_LIMIT: usize = 5;
/// How many scored books to return for a user with history.
const RANKED_LIMIT: usize = 6;

/// Ranks unseen books against the user's saved-item history.
///
/// With no signed-in user the result is empty. With no saved books the
/// fallback is the popular-but-not-featured slice of the catalog, in catalog
/// order. Otherwise every unsaved book is scored, zero scores are dropped,
/// and ties keep catalog order (the sort is stable).
pub fn recommended<'a>(
    user: Option<&User>,
    books: &'a [Book],
    saved_book_ids: &[String],
) -> Vec<&'a Book> {
    if user.is_none() {
        return Vec::new();
    }

    let saved: Vec<&Book> = books
        .iter()
        .filter(|b| saved_book_ids.contains(&b.id))
        .collect();

    if saved.is_empty() {
        return books
            .iter()
            .filter(|b| b.is_popular && !b.is_featured)
            .take(COLD_START_LIMIT)
            .collect();
    }

    let categories: HashSet<&str> = saved.iter().map(|b| b.category.as_str()).collect();
    let authors: HashSet<&str> = saved.iter().map(|b| b.author.as_str()).collect();

    let mut scored: Vec<(i32, &Book)> = books
        .iter()
        .filter(|b| !saved_book_ids.contains(&b.id))
        .map(|book| {
            let mut score = 0;
            if categories.contains(book.category.as_str()) {
                score += SCORE_CATEGORY;
            }
            if authors.contains(book.author.as_str()) {
                score += SCORE_AUTHOR;
            }
            if book.is_popular {
                score += SCORE_POPULAR;
            }
            (score, book)
        })
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .map(|(_, book)| book)
        .take(RANKED_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccessLevel, SubscriptionTier};
    use chrono::Utc;

    fn book(id: &str, category: &str, author: &str, popular: bool, featured: bool) -> Book {
        Book {
            id: id.to_string(),
            title: format!("Book {}", id),
            author: author.to_string(),
            category: category.to_string(),
            cover_url: String::new(),
            summary_text: String::new(),
            summary_audio_url: None,
            about: String::new(),
            duration_minutes: 15,
            created_at: Utc::now(),
            published: true,
            is_popular: popular,
            is_featured: featured,
            is_book_of_week: false,
            access_level: AccessLevel::Free,
            buy_button: None,
        }
    }

    fn reader() -> User {
        User {
            id: "u1".to_string(),
            token: None,
            name: None,
            email: None,
            phone: None,
            is_guest: false,
            provider_id: None,
            tier: SubscriptionTier::Free,
            tier_expiry: None,
            is_super_admin: false,
            is_store_manager: false,
            preferences: Default::default(),
        }
    }

    #[test]
    fn no_user_yields_nothing() {
        let books = vec![book("b1", "A", "X", true, false)];
        assert!(recommended(None, &books, &[]).is_empty());
    }

    #[test]
    fn cold_start_falls_back_to_popular_not_featured() {
        let books = vec![
            book("b1", "A", "X", true, false),
            book("b2", "A", "X", true, true),
            book("b3", "B", "Y", false, false),
            book("b4", "B", "Y", true, false),
        ];
        let user = reader();

        let out = recommended(Some(&user), &books, &[]);
        let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b4"]);
    }

    #[test]
    fn cold_start_is_capped_at_five() {
        let books: Vec<Book> = (0..8)
            .map(|i| book(&format!("b{}", i), "A", "X", true, false))
            .collect();
        let user = reader();

        assert_eq!(recommended(Some(&user), &books, &[]).len(), 5);
    }

    #[test]
    fn scoring_matches_category_author_and_popularity() {
        // Saved history covers categories {A, B} and author X.
        let books = vec![
            book("saved1", "A", "X", false, false),
            book("saved2", "B", "Z", false, false),
            // category A + author X -> 8
            book("hit", "A", "X", false, false),
            // outside A/B, different author, popular -> 1
            book("pop", "C", "Q", true, false),
            // nothing in common -> 0, excluded
            book("cold", "C", "Q", false, false),
        ];
        let saved = vec!["saved1".to_string(), "saved2".to_string()];
        let user = reader();

        let out = recommended(Some(&user), &books, &saved);
        let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["hit", "pop"]);
    }

    #[test]
    fn saved_books_are_never_recommended() {
        let books = vec![
            book("saved", "A", "X", true, false),
            book("other", "A", "X", false, false),
        ];
        let saved = vec!["saved".to_string()];
        let user = reader();

        let out = recommended(Some(&user), &books, &saved);
        assert!(out.iter().all(|b| b.id != "saved"));
    }

    #[test]
    fn ties_keep_catalog_order_and_result_caps_at_six() {
        let mut books = vec![book("saved", "A", "X", false, false)];
        for i in 0..9 {
            // All score 5 via the category match; order must be preserved.
            books.push(book(&format!("b{}", i), "A", "Y", false, false));
        }
        let saved = vec!["saved".to_string()];
        let user = reader();

        let out = recommended(Some(&user), &books, &saved);
        let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b0", "b1", "b2", "b3", "b4", "b5"]);
    }
}
