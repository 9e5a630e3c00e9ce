//! crates/bookbites_core/src/catalog.rs
//!
//! Pure reducers shared by the three admin-managed catalogs (books,
//! masterclasses, store books) and their category taxonomies. All three
//! follow the same shape: newest-first insert, full-record replace by id,
//! remove by id.

use crate::domain::{Book, FaqItem, Masterclass, StoreBook};

/// Anything stored in an id-keyed catalog collection.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Book {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Masterclass {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for StoreBook {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for FaqItem {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Prepends, preserving the newest-first ordering of the collection.
pub fn insert_newest<T: Keyed>(mut items: Vec<T>, item: T) -> Vec<T> {
    items.insert(0, item);
    items
}

/// Full-record replace by id. An absent id leaves the snapshot unchanged.
pub fn replace<T: Keyed>(mut items: Vec<T>, replacement: T) -> Vec<T> {
    if let Some(slot) = items
        .iter_mut()
        .find(|existing| existing.key() == replacement.key())
    {
        *slot = replacement;
    }
    items
}

pub fn remove_by_id<T: Keyed>(items: Vec<T>, id: &str) -> Vec<T> {
    items.into_iter().filter(|item| item.key() != id).collect()
}

/// Adds a category label with set semantics: a duplicate is a no-op.
pub fn add_label(mut labels: Vec<String>, label: String) -> Vec<String> {
    if !labels.contains(&label) {
        labels.push(label);
    }
    labels
}

/// Removes the label only. Content carrying the label keeps its category
/// string; the link is soft on purpose.
pub fn remove_label(mut labels: Vec<String>, label: &str) -> Vec<String> {
    labels.retain(|existing| existing != label);
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccessLevel;
    use chrono::Utc;

    fn book(id: &str, title: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: "Author".to_string(),
            category: "Category".to_string(),
            cover_url: String::new(),
            summary_text: String::new(),
            summary_audio_url: None,
            about: String::new(),
            duration_minutes: 10,
            created_at: Utc::now(),
            published: true,
            is_popular: false,
            is_featured: false,
            is_book_of_week: false,
            access_level: AccessLevel::Free,
            buy_button: None,
        }
    }

    #[test]
    fn insert_keeps_newest_first() {
        let items = insert_newest(Vec::new(), book("b1", "first"));
        let items = insert_newest(items, book("b2", "second"));
        assert_eq!(items[0].id, "b2");
        assert_eq!(items[1].id, "b1");
    }

    #[test]
    fn replace_swaps_the_whole_record() {
        let items = vec![book("b1", "old title"), book("b2", "other")];
        let items = replace(items, book("b1", "new title"));
        assert_eq!(items[0].title, "new title");
        assert_eq!(items[1].title, "other");
    }

    #[test]
    fn replace_with_unknown_id_is_a_no_op() {
        let items = vec![book("b1", "title")];
        let items = replace(items, book("missing", "other"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "b1");
    }

    #[test]
    fn remove_filters_by_id() {
        let items = vec![book("b1", "a"), book("b2", "b")];
        let items = remove_by_id(items, "b1");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "b2");
    }

    #[test]
    fn labels_behave_as_a_set() {
        let labels = add_label(Vec::new(), "Business".to_string());
        let labels = add_label(labels, "Business".to_string());
        assert_eq!(labels, vec!["Business".to_string()]);

        let labels = remove_label(labels, "Business");
        assert!(labels.is_empty());
    }
}
