//! services/app/src/store/view.rs
//!
//! The view-facing surface: navigation, selections, transient
//! notifications, and presentation preferences. Views read these fields to
//! decide what to render; nothing here is domain data.

use bookbites_core::domain::{Book, Language, Masterclass, StoreBook, Theme};

use super::{encode, keys, AppStore};

/// Every screen the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Auth,
    Home,
    Search,
    MasterclassList,
    MasterclassDetail,
    Library,
    Settings,
    Admin,
    Subscription,
    Reader,
    Help,
    ContactInfo,
    Bookstore,
    Faq,
}

/// Optional payload carried by a navigation, selecting the item the target
/// view should show.
#[derive(Debug, Clone)]
pub enum NavPayload {
    Book(Book),
    Masterclass(Masterclass),
    StoreBook(StoreBook),
}

impl AppStore {
    /// Switches the current view. A payload selects the matching item; a
    /// payload-less navigation clears all selections unless it enters the
    /// reader, which keeps the open book.
    pub fn navigate(&mut self, view: ViewState, payload: Option<NavPayload>) {
        self.current_view = view;
        match payload {
            Some(NavPayload::Book(book)) => self.selected_book = Some(book),
            Some(NavPayload::Masterclass(mc)) => self.selected_masterclass = Some(mc),
            Some(NavPayload::StoreBook(book)) => self.selected_store_book = Some(book),
            None => {
                if view != ViewState::Reader {
                    self.selected_book = None;
                    self.selected_masterclass = None;
                    self.selected_store_book = None;
                }
            }
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
    }

    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    pub async fn set_language(&mut self, language: Language) {
        self.language = language;
        let encoded = encode(&self.language);
        self.write_through(keys::LANGUAGE, encoded).await;
    }

    pub async fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        let encoded = encode(&self.theme);
        self.write_through(keys::THEME, encoded).await;
    }

    /// Flips the signed-in user's notification preference. Signed-out is a
    /// no-op.
    pub async fn toggle_notifications(&mut self) {
        let Some(user) = self.current_user.as_mut() else {
            return;
        };
        user.preferences.notifications = !user.preferences.notifications;
        let updated = user.clone();
        self.all_users = bookbites_core::users::upsert(std::mem::take(&mut self.all_users), updated);
        self.persist_users().await;
    }
}
