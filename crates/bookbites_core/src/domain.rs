//! crates/bookbites_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage backend; serde derives only
//! pin the JSON shape every collection is persisted in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gating level carried by a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Free,
    Premium,
    Gold,
}

/// Subscription tier held by a user. One tier per user, always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Premium,
    Gold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
    Uz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Per-user presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::Uz,
            notifications: true,
        }
    }
}

// Represents a user - used throughout the app. Never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Opaque session token. Absence means this user has never signed in.
    pub token: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_guest: bool,
    /// Stable external id supplied by the embedding host, when known.
    pub provider_id: Option<String>,
    pub tier: SubscriptionTier,
    /// Only meaningful for premium/gold; evaluated lazily at access time.
    pub tier_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_super_admin: bool,
    #[serde(default)]
    pub is_store_manager: bool,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Admin targeting key: users are looked up by id or by phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    ById(String),
    ByPhone(String),
}

impl UserRef {
    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserRef::ById(id) => user.id == *id,
            UserRef::ByPhone(phone) => user.phone.as_deref() == Some(phone.as_str()),
        }
    }
}

/// Optional "buy this book" link shown on a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyButton {
    pub enabled: bool,
    pub label: String,
    pub url: String,
}

/// A summarized book in the main catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Free text, soft-linked to the live category list.
    pub category: String,
    pub cover_url: String,
    pub summary_text: String,
    pub summary_audio_url: Option<String>,
    pub about: String,
    pub duration_minutes: u32,
    pub created_at: DateTime<Utc>,
    pub published: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_book_of_week: bool,
    pub access_level: AccessLevel,
    pub buy_button: Option<BuyButton>,
}

/// A video masterclass, managed independently from books.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Masterclass {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub description: String,
    pub duration_minutes: u32,
    pub access_level: AccessLevel,
}

/// A physical book sold through the secondary marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    /// Display text, e.g. "45 000 so'm".
    pub price: String,
    pub about: String,
    pub buy_link: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub book_id: String,
    /// Never persisted below 1; removal is an explicit action.
    pub quantity: u32,
}

/// A named, ordered collection of book ids with set semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookshelf {
    pub id: String,
    pub name: String,
    pub book_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageReply {
    pub text: String,
    pub date: DateTime<Utc>,
    pub admin_name: String,
}

/// A support message from an end user. Text is immutable, replies append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    /// Id of the authoring user, or "anon".
    pub author_ref: String,
    pub phone: Option<String>,
    pub text: String,
    pub date: DateTime<Utc>,
    pub read: bool,
    #[serde(default)]
    pub replies: Vec<MessageReply>,
}

/// One plan per tier; the tier set is fixed, plans are only ever edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: SubscriptionTier,
    pub name: String,
    pub price: String,
    /// e.g. "/month" or "/year".
    pub period: String,
    pub features: Vec<String>,
    /// External payment link; checkout itself is out of scope.
    pub payment_link: String,
    pub active: bool,
}

/// Admin-edited branding record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_slogan: String,
    pub app_logo_url: String,
    pub only_me_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub website: String,
    /// External checkout link used by the bookstore cart.
    pub checkout_url: Option<String>,
    pub map_embed_url: Option<String>,
    pub host_channel_url: Option<String>,
    pub instagram_url: Option<String>,
    pub admin_contact_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}
