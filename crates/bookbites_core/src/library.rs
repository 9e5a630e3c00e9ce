//! crates/bookbites_core/src/library.rs
//!
//! Pure reducers over bookshelves and the global saved-book index. Shelves
//! hold book ids with set semantics; the saved index answers `is_saved`
//! without asking which shelf holds the book.

use crate::domain::Bookshelf;

/// Well-known id of the default shelf.
pub const FAVORITES_SHELF_ID: &str = "favorites";

/// Adds `book_id` to the shelf with `shelf_id`. Idempotent: an already
/// present id leaves the shelf unchanged. An unknown shelf id leaves the
/// whole snapshot unchanged.
pub fn save_to_shelf(shelves: Vec<Bookshelf>, shelf_id: &str, book_id: &str) -> Vec<Bookshelf> {
    shelves
        .into_iter()
        .map(|mut shelf| {
            if shelf.id == shelf_id && !shelf.book_ids.iter().any(|id| id == book_id) {
                shelf.book_ids.push(book_id.to_string());
            }
            shelf
        })
        .collect()
}

/// Removes `book_id` from every shelf in one pass.
pub fn remove_everywhere(shelves: Vec<Bookshelf>, book_id: &str) -> Vec<Bookshelf> {
    shelves
        .into_iter()
        .map(|mut shelf| {
            shelf.book_ids.retain(|id| id != book_id);
            shelf
        })
        .collect()
}

/// Ensures the saved index contains `book_id`.
pub fn ensure_saved(mut saved: Vec<String>, book_id: &str) -> Vec<String> {
    if !saved.iter().any(|id| id == book_id) {
        saved.push(book_id.to_string());
    }
    saved
}

pub fn remove_saved(mut saved: Vec<String>, book_id: &str) -> Vec<String> {
    saved.retain(|id| id != book_id);
    saved
}

/// The shelf `save_book` targets: "favorites" when present, else the first
/// shelf.
pub fn default_shelf_id(shelves: &[Bookshelf]) -> Option<&str> {
    shelves
        .iter()
        .find(|s| s.id == FAVORITES_SHELF_ID)
        .or_else(|| shelves.first())
        .map(|s| s.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf(id: &str, book_ids: &[&str]) -> Bookshelf {
        Bookshelf {
            id: id.to_string(),
            name: id.to_string(),
            book_ids: book_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn saving_twice_leaves_the_shelf_unchanged() {
        let shelves = vec![shelf("favorites", &[])];
        let shelves = save_to_shelf(shelves, "favorites", "b1");
        let shelves = save_to_shelf(shelves, "favorites", "b1");
        assert_eq!(shelves[0].book_ids, vec!["b1".to_string()]);
    }

    #[test]
    fn saving_to_unknown_shelf_changes_nothing() {
        let shelves = vec![shelf("favorites", &["b1"])];
        let shelves = save_to_shelf(shelves, "missing", "b2");
        assert_eq!(shelves[0].book_ids, vec!["b1".to_string()]);
    }

    #[test]
    fn remove_clears_the_book_from_every_shelf() {
        let shelves = vec![shelf("favorites", &["b1", "b2"]), shelf("to-read", &["b1"])];
        let shelves = remove_everywhere(shelves, "b1");
        assert_eq!(shelves[0].book_ids, vec!["b2".to_string()]);
        assert!(shelves[1].book_ids.is_empty());
    }

    #[test]
    fn saved_index_is_a_set() {
        let saved = ensure_saved(vec!["b1".to_string()], "b1");
        assert_eq!(saved.len(), 1);
        let saved = ensure_saved(saved, "b2");
        assert_eq!(saved, vec!["b1".to_string(), "b2".to_string()]);
        let saved = remove_saved(saved, "b1");
        assert_eq!(saved, vec!["b2".to_string()]);
    }

    #[test]
    fn default_shelf_prefers_favorites() {
        let shelves = vec![shelf("to-read", &[]), shelf("favorites", &[])];
        assert_eq!(default_shelf_id(&shelves), Some("favorites"));

        let shelves = vec![shelf("custom", &[])];
        assert_eq!(default_shelf_id(&shelves), Some("custom"));

        assert_eq!(default_shelf_id(&[]), None);
    }
}
