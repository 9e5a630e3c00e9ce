//! services/app/src/bin/app.rs
//!
//! Composition root: wires the adapters to the `AppStore` facade, runs the
//! startup identity resolution, and reports the outcome. A presentation
//! shell would own the resulting store from here on.

use app_lib::{
    adapters::{
        credentials::StaticCredentialVerifier, file_store::FileStore, host::HostIdentityAdapter,
    },
    config::Config,
    error::AppError,
    store::{AppStore, ViewState},
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting BookBites...");

    // --- 2. Prepare the Storage Adapter ---
    let file_store = FileStore::new(config.data_dir.clone());
    file_store.ensure_root().await?;
    info!(data_dir = %file_store.root().display(), "Data directory ready.");

    // --- 3. Build the Remaining Adapters ---
    let storage = Arc::new(file_store);
    let identity = Arc::new(HostIdentityAdapter::from_config(&config));
    let verifier = Arc::new(StaticCredentialVerifier::from_config(&config));

    // --- 4. Load State & Resolve the Session ---
    let mut store = AppStore::load(storage, identity, verifier).await;
    store.init_session().await;

    match &store.current_user {
        Some(user) => info!(
            user_id = %user.id,
            tier = ?user.tier,
            guest = user.is_guest,
            "Signed in."
        ),
        None => info!("No session; sign-in screen would be shown."),
    }
    info!(
        view = ?store.current_view,
        books = store.books.len(),
        masterclasses = store.masterclasses.len(),
        store_books = store.store_books.len(),
        "Store ready."
    );

    if store.current_view == ViewState::Home {
        let recommended = store.recommended_books();
        info!(count = recommended.len(), "Recommendations computed.");
    }

    Ok(())
}
