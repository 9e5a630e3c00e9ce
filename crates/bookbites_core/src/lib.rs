pub mod access;
pub mod cart;
pub mod catalog;
pub mod domain;
pub mod library;
pub mod messages;
pub mod ports;
pub mod recommend;
pub mod users;

pub use domain::{
    AccessLevel, AppConfig, Book, Bookshelf, BuyButton, CartItem, ContactInfo, FaqItem, Language,
    Masterclass, Message, MessageReply, Preferences, StoreBook, SubscriptionPlan, SubscriptionTier,
    Theme, User, UserRef,
};
pub use ports::{
    AmbientIdentityService, AmbientUser, CredentialVerifier, PortError, PortResult, StorageService,
};
