//! services/app/src/store/cart.rs
//!
//! Bookstore cart and favorites actions.

use bookbites_core::cart;

use super::{encode, keys, AppStore};

impl AppStore {
    /// Adds a store book to the cart. A first add inserts quantity 1 and
    /// raises a transient notification; a repeat add increments through the
    /// quantity-update path.
    pub async fn add_to_cart(&mut self, book_id: &str) {
        let (next, inserted) = cart::add(std::mem::take(&mut self.cart), book_id);
        self.cart = next;
        if inserted {
            self.notify("Added to cart");
        }
        let encoded = encode(&self.cart);
        self.write_through(keys::CART, encoded).await;
    }

    pub async fn remove_from_cart(&mut self, book_id: &str) {
        self.cart = cart::remove(std::mem::take(&mut self.cart), book_id);
        let encoded = encode(&self.cart);
        self.write_through(keys::CART, encoded).await;
    }

    /// Applies a quantity delta, clamped at a floor of 1. Going to zero is
    /// only possible through [`AppStore::remove_from_cart`].
    pub async fn update_cart_quantity(&mut self, book_id: &str, delta: i64) {
        self.cart = cart::update_quantity(std::mem::take(&mut self.cart), book_id, delta);
        let encoded = encode(&self.cart);
        self.write_through(keys::CART, encoded).await;
    }

    pub async fn toggle_store_favorite(&mut self, book_id: &str) {
        self.store_favorites =
            cart::toggle_membership(std::mem::take(&mut self.store_favorites), book_id);
        let encoded = encode(&self.store_favorites);
        self.write_through(keys::STORE_FAVORITES, encoded).await;
    }
}
