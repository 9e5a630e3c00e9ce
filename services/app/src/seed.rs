//! services/app/src/seed.rs
//!
//! Named default values and seed datasets. Every persisted collection falls
//! back to one of these when its stored record is missing or malformed, so
//! a fresh (or damaged) data directory always yields a working catalog.

use bookbites_core::domain::{
    AccessLevel, AppConfig, Book, Bookshelf, ContactInfo, FaqItem, Masterclass, StoreBook,
    SubscriptionPlan, SubscriptionTier,
};
use bookbites_core::library::FAVORITES_SHELF_ID;
use chrono::{TimeZone, Utc};

pub fn default_app_config() -> AppConfig {
    AppConfig {
        app_name: "BookBites".to_string(),
        app_slogan: "Big ideas in fifteen minutes".to_string(),
        app_logo_url: String::new(),
        only_me_mode: false,
    }
}

/// The two shelves every fresh library starts with.
pub fn default_shelves() -> Vec<Bookshelf> {
    vec![
        Bookshelf {
            id: FAVORITES_SHELF_ID.to_string(),
            name: "Favorites".to_string(),
            book_ids: Vec::new(),
        },
        Bookshelf {
            id: "to-read".to_string(),
            name: "To Read".to_string(),
            book_ids: Vec::new(),
        },
    ]
}

pub fn seed_books() -> Vec<Book> {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    vec![
        Book {
            id: "seed-atomic-habits".to_string(),
            title: "Atomic Habits".to_string(),
            author: "James Clear".to_string(),
            category: "Self-Development".to_string(),
            cover_url: String::new(),
            summary_text: "Small changes compound into remarkable results. Build systems, \
                           not goals, and let identity drive behavior."
                .to_string(),
            summary_audio_url: None,
            about: "A practical framework for building good habits and breaking bad ones."
                .to_string(),
            duration_minutes: 15,
            created_at,
            published: true,
            is_popular: true,
            is_featured: true,
            is_book_of_week: true,
            access_level: AccessLevel::Free,
            buy_button: None,
        },
        Book {
            id: "seed-deep-work".to_string(),
            title: "Deep Work".to_string(),
            author: "Cal Newport".to_string(),
            category: "Productivity".to_string(),
            cover_url: String::new(),
            summary_text: "Focused, distraction-free work is the superpower of the modern \
                           economy. Schedule depth, embrace boredom, quit shallow habits."
                .to_string(),
            summary_audio_url: None,
            about: "Rules for focused success in a distracted world.".to_string(),
            duration_minutes: 18,
            created_at,
            published: true,
            is_popular: true,
            is_featured: false,
            is_book_of_week: false,
            access_level: AccessLevel::Premium,
            buy_button: None,
        },
        Book {
            id: "seed-thinking-fast-and-slow".to_string(),
            title: "Thinking, Fast and Slow".to_string(),
            author: "Daniel Kahneman".to_string(),
            category: "Psychology".to_string(),
            cover_url: String::new(),
            summary_text: "Two systems drive the way we think: fast intuition and slow \
                           deliberation. Knowing when each one is speaking protects you \
                           from predictable mistakes."
                .to_string(),
            summary_audio_url: None,
            about: "A tour of the biases that shape human judgment.".to_string(),
            duration_minutes: 21,
            created_at,
            published: true,
            is_popular: false,
            is_featured: false,
            is_book_of_week: false,
            access_level: AccessLevel::Gold,
            buy_button: None,
        },
    ]
}

pub fn seed_masterclasses() -> Vec<Masterclass> {
    vec![
        Masterclass {
            id: "seed-habit-design".to_string(),
            title: "Designing Habits That Stick".to_string(),
            instructor: "Dilnoza Karimova".to_string(),
            category: "Self-Development".to_string(),
            thumbnail_url: String::new(),
            video_url: String::new(),
            description: "A working session on turning the habit loop into a weekly practice."
                .to_string(),
            duration_minutes: 45,
            access_level: AccessLevel::Premium,
        },
        Masterclass {
            id: "seed-reading-systems".to_string(),
            title: "Reading More Without Reading Faster".to_string(),
            instructor: "Bobur Alimov".to_string(),
            category: "Productivity".to_string(),
            thumbnail_url: String::new(),
            video_url: String::new(),
            description: "Choosing, skimming, and retaining — a system for heavy readers."
                .to_string(),
            duration_minutes: 35,
            access_level: AccessLevel::Free,
        },
    ]
}

pub fn seed_store_books() -> Vec<StoreBook> {
    vec![
        StoreBook {
            id: "store-atomic-habits".to_string(),
            title: "Atomic Habits (hardcover)".to_string(),
            author: "James Clear".to_string(),
            cover_url: String::new(),
            price: "120 000 so'm".to_string(),
            about: "Hardcover edition, Uzbek translation.".to_string(),
            buy_link: String::new(),
            category: "Self-Development".to_string(),
        },
        StoreBook {
            id: "store-deep-work".to_string(),
            title: "Deep Work (paperback)".to_string(),
            author: "Cal Newport".to_string(),
            cover_url: String::new(),
            price: "95 000 so'm".to_string(),
            about: "Paperback edition.".to_string(),
            buy_link: String::new(),
            category: "Productivity".to_string(),
        },
    ]
}

/// One plan per tier. The tier set is fixed; admins edit these in place.
pub fn initial_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            id: SubscriptionTier::Free,
            name: "Free".to_string(),
            price: "0".to_string(),
            period: "/month".to_string(),
            features: vec!["Free summaries".to_string(), "Bookshelves".to_string()],
            payment_link: String::new(),
            active: true,
        },
        SubscriptionPlan {
            id: SubscriptionTier::Premium,
            name: "Premium".to_string(),
            price: "29 000 so'm".to_string(),
            period: "/month".to_string(),
            features: vec![
                "Everything in Free".to_string(),
                "Premium summaries".to_string(),
                "Audio summaries".to_string(),
            ],
            payment_link: String::new(),
            active: true,
        },
        SubscriptionPlan {
            id: SubscriptionTier::Gold,
            name: "Gold".to_string(),
            price: "49 000 so'm".to_string(),
            period: "/month".to_string(),
            features: vec![
                "Everything in Premium".to_string(),
                "Gold summaries".to_string(),
                "All masterclasses".to_string(),
            ],
            payment_link: String::new(),
            active: true,
        },
    ]
}

pub fn initial_contact_info() -> ContactInfo {
    ContactInfo {
        phone: "+998 90 000 00 00".to_string(),
        email: "support@bookbites.uz".to_string(),
        address: "Tashkent".to_string(),
        website: "https://bookbites.uz".to_string(),
        checkout_url: None,
        map_embed_url: None,
        host_channel_url: None,
        instagram_url: None,
        admin_contact_url: None,
    }
}

pub fn seed_faqs() -> Vec<FaqItem> {
    vec![
        FaqItem {
            id: "faq-what-is".to_string(),
            question: "What is BookBites?".to_string(),
            answer: "Fifteen-minute summaries of the best non-fiction books, with audio."
                .to_string(),
        },
        FaqItem {
            id: "faq-premium".to_string(),
            question: "What do I get with Premium?".to_string(),
            answer: "Every premium summary and audio version, on top of the free catalog."
                .to_string(),
        },
    ]
}

/// First-seen-order unique category labels, used to seed a taxonomy from
/// its catalog.
pub fn unique_categories<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        if !out.iter().any(|existing| existing == label) {
            out.push(label.to_string());
        }
    }
    out
}
