//! services/app/src/adapters/mod.rs
//!
//! Concrete implementations of the `bookbites_core` ports.

pub mod credentials;
pub mod file_store;
pub mod host;
