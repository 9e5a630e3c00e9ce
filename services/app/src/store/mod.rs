//! services/app/src/store/mod.rs
//!
//! The `AppStore` facade: the single domain/state object every view reads
//! and mutates. It owns all collections in memory; each action computes the
//! next snapshot through a pure `bookbites_core` reducer, publishes it, and
//! unconditionally write-through persists the affected record. Once loaded,
//! the persisted copy is strictly a durability mirror, never a source of
//! truth.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use bookbites_core::domain::{
    AppConfig, Book, Bookshelf, CartItem, ContactInfo, FaqItem, Language, Masterclass, Message,
    StoreBook, SubscriptionPlan, Theme, User,
};
use bookbites_core::ports::{AmbientIdentityService, CredentialVerifier, StorageService};

use crate::seed;

pub mod keys;

mod admin;
mod cart;
mod catalog;
mod library;
mod messages;
mod session;
mod view;

pub use view::{NavPayload, ViewState};

//=========================================================================================
// AppStore (Owned by the Composition Root)
//=========================================================================================

/// The application state, created once at startup and handed by reference
/// to the presentation layer. Exactly one writer exists: the active
/// process.
pub struct AppStore {
    pub(crate) storage: Arc<dyn StorageService>,
    pub(crate) identity: Arc<dyn AmbientIdentityService>,
    pub(crate) verifier: Arc<dyn CredentialVerifier>,

    // Domain collections
    pub app_config: AppConfig,
    pub current_user: Option<User>,
    pub all_users: Vec<User>,
    pub books: Vec<Book>,
    pub masterclasses: Vec<Masterclass>,
    pub saved_book_ids: Vec<String>,
    pub bookshelves: Vec<Bookshelf>,
    pub book_categories: Vec<String>,
    pub masterclass_categories: Vec<String>,
    pub store_categories: Vec<String>,
    pub subscription_plans: Vec<SubscriptionPlan>,
    pub language: Language,
    pub theme: Theme,
    pub messages: Vec<Message>,
    pub contact_info: ContactInfo,
    pub faqs: Vec<FaqItem>,
    pub store_books: Vec<StoreBook>,
    pub cart: Vec<CartItem>,
    pub store_favorites: Vec<String>,

    // Session state
    pub is_admin_authenticated: bool,
    pub show_admin_login: bool,
    /// True until startup identity resolution completes, exactly once.
    pub loading_auth: bool,

    // View-facing surface
    pub current_view: ViewState,
    pub selected_book: Option<Book>,
    pub selected_masterclass: Option<Masterclass>,
    pub selected_store_book: Option<StoreBook>,
    pub notification: Option<String>,
    /// Last failed write-through, surfaced as a recoverable warning.
    pub storage_warning: Option<String>,
}

impl AppStore {
    /// Loads every collection from storage, falling back to its named
    /// default/seed value on a missing or malformed record. Identity is
    /// NOT resolved here; call [`AppStore::init_session`] next.
    pub async fn load(
        storage: Arc<dyn StorageService>,
        identity: Arc<dyn AmbientIdentityService>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        let store = storage.as_ref();

        let app_config = load_or(store, keys::CONFIG, seed::default_app_config).await;
        let current_user: Option<User> = load_or(store, keys::CURRENT_USER, || None).await;
        let all_users: Vec<User> = load_or(store, keys::ALL_USERS, Vec::new).await;
        let books = load_or(store, keys::BOOKS, seed::seed_books).await;
        let masterclasses = load_or(store, keys::MASTERCLASSES, seed::seed_masterclasses).await;
        let saved_book_ids = load_or(store, keys::SAVED_BOOK_IDS, Vec::new).await;

        // An explicitly emptied shelf list is respected; only a missing or
        // malformed record re-seeds the defaults.
        let bookshelves = load_or(store, keys::SHELVES, seed::default_shelves).await;

        let book_categories = load_or(store, keys::BOOK_CATEGORIES, || {
            seed::unique_categories(books.iter().map(|b| b.category.as_str()))
        })
        .await;
        let masterclass_categories = load_or(store, keys::MASTERCLASS_CATEGORIES, || {
            seed::unique_categories(masterclasses.iter().map(|m| m.category.as_str()))
        })
        .await;

        let store_books = load_or(store, keys::STORE_BOOKS, seed::seed_store_books).await;
        let store_categories = load_or(store, keys::STORE_CATEGORIES, || {
            seed::unique_categories(store_books.iter().map(|b| b.category.as_str()))
        })
        .await;

        let subscription_plans = load_or(store, keys::PLANS, seed::initial_plans).await;
        let language = load_or(store, keys::LANGUAGE, || Language::Uz).await;
        let theme = load_or(store, keys::THEME, || Theme::Light).await;
        let messages = load_or(store, keys::MESSAGES, Vec::new).await;
        let contact_info = load_or(store, keys::CONTACT_INFO, seed::initial_contact_info).await;
        let faqs = load_or(store, keys::FAQS, seed::seed_faqs).await;
        let cart = load_or(store, keys::CART, Vec::new).await;
        let store_favorites = load_or(store, keys::STORE_FAVORITES, Vec::new).await;

        Self {
            storage,
            identity,
            verifier,
            app_config,
            current_user,
            all_users,
            books,
            masterclasses,
            saved_book_ids,
            bookshelves,
            book_categories,
            masterclass_categories,
            store_categories,
            subscription_plans,
            language,
            theme,
            messages,
            contact_info,
            faqs,
            store_books,
            cart,
            store_favorites,
            is_admin_authenticated: false,
            show_admin_login: false,
            loading_auth: true,
            current_view: ViewState::Auth,
            selected_book: None,
            selected_masterclass: None,
            selected_store_book: None,
            notification: None,
            storage_warning: None,
        }
    }

    //=====================================================================================
    // Write-Through Persistence
    //=====================================================================================

    /// Commits one encoded record. A failed write is logged and surfaced as
    /// a recoverable warning; the in-memory state change stands either way.
    pub(crate) async fn write_through(
        &mut self,
        key: &str,
        encoded: Result<String, serde_json::Error>,
    ) {
        let raw = match encoded {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to encode record for persistence");
                self.storage_warning = Some(format!("Could not save {}: {}", key, e));
                return;
            }
        };
        if let Err(e) = self.storage.save_raw(key, &raw).await {
            warn!(key, error = %e, "write-through persistence failed");
            self.storage_warning = Some(format!("Could not save {}: {}", key, e));
        }
    }

    /// Removes one record, with the same recoverable-warning contract.
    pub(crate) async fn remove_record(&mut self, key: &str) {
        if let Err(e) = self.storage.remove(key).await {
            warn!(key, error = %e, "failed to remove stored record");
            self.storage_warning = Some(format!("Could not remove {}: {}", key, e));
        }
    }

    pub fn clear_storage_warning(&mut self) {
        self.storage_warning = None;
    }
}

/// JSON-encodes a snapshot for [`AppStore::write_through`].
pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Loads one record, falling back to `default` when the key is absent, the
/// stored JSON is malformed, or the storage itself fails.
async fn load_or<T, F>(storage: &dyn StorageService, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match storage.load_raw(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "stored record is malformed; using default");
                default()
            }
        },
        Ok(None) => default(),
        Err(e) => {
            warn!(key, error = %e, "failed to load stored record; using default");
            default()
        }
    }
}
