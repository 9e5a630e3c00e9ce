//! services/app/src/store/catalog.rs
//!
//! Admin mutations over the three content catalogs and their category
//! taxonomies. Every mutation validates, computes the next snapshot through
//! a pure reducer, and write-through persists the affected record.

use uuid::Uuid;

use bookbites_core::catalog;
use bookbites_core::domain::{Book, Masterclass, StoreBook};
use bookbites_core::ports::{PortError, PortResult};

use super::{encode, keys, AppStore};

fn ensure_id(id: &mut String) {
    if id.trim().is_empty() {
        *id = Uuid::new_v4().to_string();
    }
}

fn require(field: &str, value: &str) -> PortResult<()> {
    if value.trim().is_empty() {
        return Err(PortError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn validate_book(book: &Book) -> PortResult<()> {
    require("book title", &book.title)?;
    require("book author", &book.author)?;
    Ok(())
}

fn validate_masterclass(mc: &Masterclass) -> PortResult<()> {
    require("masterclass title", &mc.title)?;
    require("masterclass instructor", &mc.instructor)?;
    Ok(())
}

fn validate_store_book(book: &StoreBook) -> PortResult<()> {
    require("store book title", &book.title)?;
    require("store book author", &book.author)?;
    Ok(())
}

impl AppStore {
    //=====================================================================================
    // Books
    //=====================================================================================

    pub async fn add_book(&mut self, mut book: Book) -> PortResult<()> {
        validate_book(&book)?;
        ensure_id(&mut book.id);
        self.books = catalog::insert_newest(std::mem::take(&mut self.books), book);
        let encoded = encode(&self.books);
        self.write_through(keys::BOOKS, encoded).await;
        Ok(())
    }

    /// Full-record replace by id; an unknown id is a silent no-op.
    pub async fn update_book(&mut self, book: Book) -> PortResult<()> {
        validate_book(&book)?;
        self.books = catalog::replace(std::mem::take(&mut self.books), book);
        let encoded = encode(&self.books);
        self.write_through(keys::BOOKS, encoded).await;
        Ok(())
    }

    pub async fn delete_book(&mut self, book_id: &str) {
        self.books = catalog::remove_by_id(std::mem::take(&mut self.books), book_id);
        let encoded = encode(&self.books);
        self.write_through(keys::BOOKS, encoded).await;
    }

    pub async fn add_book_category(&mut self, category: String) {
        self.book_categories =
            catalog::add_label(std::mem::take(&mut self.book_categories), category);
        let encoded = encode(&self.book_categories);
        self.write_through(keys::BOOK_CATEGORIES, encoded).await;
    }

    /// Removes the label only; books keep their category string. The soft
    /// link is intentional.
    pub async fn delete_book_category(&mut self, category: &str) {
        self.book_categories =
            catalog::remove_label(std::mem::take(&mut self.book_categories), category);
        let encoded = encode(&self.book_categories);
        self.write_through(keys::BOOK_CATEGORIES, encoded).await;
    }

    //=====================================================================================
    // Masterclasses
    //=====================================================================================

    pub async fn add_masterclass(&mut self, mut mc: Masterclass) -> PortResult<()> {
        validate_masterclass(&mc)?;
        ensure_id(&mut mc.id);
        self.masterclasses = catalog::insert_newest(std::mem::take(&mut self.masterclasses), mc);
        let encoded = encode(&self.masterclasses);
        self.write_through(keys::MASTERCLASSES, encoded).await;
        Ok(())
    }

    pub async fn update_masterclass(&mut self, mc: Masterclass) -> PortResult<()> {
        validate_masterclass(&mc)?;
        self.masterclasses = catalog::replace(std::mem::take(&mut self.masterclasses), mc);
        let encoded = encode(&self.masterclasses);
        self.write_through(keys::MASTERCLASSES, encoded).await;
        Ok(())
    }

    pub async fn delete_masterclass(&mut self, id: &str) {
        self.masterclasses = catalog::remove_by_id(std::mem::take(&mut self.masterclasses), id);
        let encoded = encode(&self.masterclasses);
        self.write_through(keys::MASTERCLASSES, encoded).await;
    }

    pub async fn add_masterclass_category(&mut self, category: String) {
        self.masterclass_categories =
            catalog::add_label(std::mem::take(&mut self.masterclass_categories), category);
        let encoded = encode(&self.masterclass_categories);
        self.write_through(keys::MASTERCLASS_CATEGORIES, encoded).await;
    }

    pub async fn delete_masterclass_category(&mut self, category: &str) {
        self.masterclass_categories =
            catalog::remove_label(std::mem::take(&mut self.masterclass_categories), category);
        let encoded = encode(&self.masterclass_categories);
        self.write_through(keys::MASTERCLASS_CATEGORIES, encoded).await;
    }

    //=====================================================================================
    // Store Books
    //=====================================================================================

    pub async fn add_store_book(&mut self, mut book: StoreBook) -> PortResult<()> {
        validate_store_book(&book)?;
        ensure_id(&mut book.id);
        self.store_books = catalog::insert_newest(std::mem::take(&mut self.store_books), book);
        let encoded = encode(&self.store_books);
        self.write_through(keys::STORE_BOOKS, encoded).await;
        Ok(())
    }

    pub async fn update_store_book(&mut self, book: StoreBook) -> PortResult<()> {
        validate_store_book(&book)?;
        self.store_books = catalog::replace(std::mem::take(&mut self.store_books), book);
        let encoded = encode(&self.store_books);
        self.write_through(keys::STORE_BOOKS, encoded).await;
        Ok(())
    }

    pub async fn delete_store_book(&mut self, id: &str) {
        self.store_books = catalog::remove_by_id(std::mem::take(&mut self.store_books), id);
        let encoded = encode(&self.store_books);
        self.write_through(keys::STORE_BOOKS, encoded).await;
    }

    pub async fn add_store_category(&mut self, category: String) {
        self.store_categories =
            catalog::add_label(std::mem::take(&mut self.store_categories), category);
        let encoded = encode(&self.store_categories);
        self.write_through(keys::STORE_CATEGORIES, encoded).await;
    }

    pub async fn delete_store_category(&mut self, category: &str) {
        self.store_categories =
            catalog::remove_label(std::mem::take(&mut self.store_categories), category);
        let encoded = encode(&self.store_categories);
        self.write_through(keys::STORE_CATEGORIES, encoded).await;
    }
}
