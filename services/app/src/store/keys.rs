//! services/app/src/store/keys.rs
//!
//! The persistence layout: one independently-keyed record per collection.
//! Renaming a key orphans its stored record, so these are load-bearing.

pub const CONFIG: &str = "config";
pub const CURRENT_USER: &str = "user";
pub const ALL_USERS: &str = "all_users";
pub const BOOKS: &str = "books";
pub const MASTERCLASSES: &str = "masterclasses";
pub const SAVED_BOOK_IDS: &str = "saved";
pub const SHELVES: &str = "shelves";
pub const BOOK_CATEGORIES: &str = "categories";
pub const MASTERCLASS_CATEGORIES: &str = "masterclass_categories";
pub const STORE_CATEGORIES: &str = "store_categories";
pub const PLANS: &str = "plans";
pub const LANGUAGE: &str = "language";
pub const THEME: &str = "theme";
pub const CONTACT_INFO: &str = "contact_info";
pub const STORE_BOOKS: &str = "store_books";
pub const CART: &str = "cart";
pub const STORE_FAVORITES: &str = "store_favorites";
pub const MESSAGES: &str = "messages";
pub const FAQS: &str = "faqs";

/// Durable session token; absence means signed-out.
pub const SESSION_TOKEN: &str = "session_token";
/// Shorter-lived administrative session marker, independent of the token.
pub const ADMIN_SESSION: &str = "admin_session";
