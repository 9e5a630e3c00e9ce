//! services/app/src/store/library.rs
//!
//! Bookshelf actions and the saved-book index, plus the recommendation
//! query that feeds off them.

use uuid::Uuid;

use bookbites_core::domain::{Book, Bookshelf};
use bookbites_core::{library, recommend};

use super::{encode, keys, AppStore};

impl AppStore {
    pub async fn create_bookshelf(&mut self, name: &str) {
        self.bookshelves.push(Bookshelf {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            book_ids: Vec::new(),
        });
        let encoded = encode(&self.bookshelves);
        self.write_through(keys::SHELVES, encoded).await;
    }

    /// Saves a book onto one shelf. Idempotent per (book, shelf); always
    /// ensures the global saved index knows the book. An unknown shelf id
    /// is a silent no-op.
    pub async fn save_to_shelf(&mut self, book_id: &str, shelf_id: &str) {
        if !self.bookshelves.iter().any(|s| s.id == shelf_id) {
            return;
        }
        self.bookshelves =
            library::save_to_shelf(std::mem::take(&mut self.bookshelves), shelf_id, book_id);
        self.saved_book_ids =
            library::ensure_saved(std::mem::take(&mut self.saved_book_ids), book_id);
        let encoded = encode(&self.bookshelves);
        self.write_through(keys::SHELVES, encoded).await;
        let encoded = encode(&self.saved_book_ids);
        self.write_through(keys::SAVED_BOOK_IDS, encoded).await;
    }

    /// Saves onto the default shelf: "favorites" when present, else the
    /// first shelf.
    pub async fn save_book(&mut self, book_id: &str) {
        let Some(shelf_id) = library::default_shelf_id(&self.bookshelves).map(String::from) else {
            return;
        };
        self.save_to_shelf(book_id, &shelf_id).await;
    }

    /// Removes the book from every shelf and from the saved index in one
    /// action.
    pub async fn remove_book(&mut self, book_id: &str) {
        self.bookshelves =
            library::remove_everywhere(std::mem::take(&mut self.bookshelves), book_id);
        self.saved_book_ids =
            library::remove_saved(std::mem::take(&mut self.saved_book_ids), book_id);
        let encoded = encode(&self.bookshelves);
        self.write_through(keys::SHELVES, encoded).await;
        let encoded = encode(&self.saved_book_ids);
        self.write_through(keys::SAVED_BOOK_IDS, encoded).await;
    }

    pub fn is_saved(&self, book_id: &str) -> bool {
        self.saved_book_ids.iter().any(|id| id == book_id)
    }

    /// Recommendations for the current user, re-derived from the live
    /// saved-book state on every call.
    pub fn recommended_books(&self) -> Vec<Book> {
        recommend::recommended(
            self.current_user.as_ref(),
            &self.books,
            &self.saved_book_ids,
        )
        .into_iter()
        .cloned()
        .collect()
    }
}
