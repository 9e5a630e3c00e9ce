//! services/app/src/store/session.rs
//!
//! Identity resolution and session management: the startup sign-in
//! sequence, profile completion, guest sign-up, logout, and the separate
//! administrative session.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use bookbites_core::access;
use bookbites_core::domain::{AccessLevel, Preferences, SubscriptionTier, User};
use bookbites_core::users;

use super::{encode, keys, AppStore, ViewState};

/// How long a restored administrative session stays valid. The marker is
/// deliberately shorter-lived than the user session token.
const ADMIN_SESSION_TTL_HOURS: i64 = 12;

/// Timestamped marker backing the administrative session.
#[derive(Debug, Serialize, Deserialize)]
struct AdminSessionMarker {
    created_at: DateTime<Utc>,
}

fn mint_token() -> String {
    Uuid::new_v4().to_string()
}

impl AppStore {
    //=====================================================================================
    // Startup Resolution
    //=====================================================================================

    /// Resolves the current user, in priority order: durable token match,
    /// then ambient host identity, then the sign-in screen. Sets
    /// `loading_auth = false` exactly once, when resolution completes.
    pub async fn init_session(&mut self) {
        // 1. Durable token match.
        let stored_token = match self.storage.load_raw(keys::SESSION_TOKEN).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored session token");
                None
            }
        };
        if let Some(token) = stored_token {
            if let Some(found) = users::find_by_token(&self.all_users, &token).cloned() {
                info!(user_id = %found.id, "restored session from stored token");
                self.current_user = Some(found);
                self.persist_users().await;
                self.current_view = ViewState::Home;
                self.restore_admin_session().await;
                self.loading_auth = false;
                return;
            }
        }

        // 2. Ambient-identity match: a returning user the host recognizes.
        if let Some(ambient) = self.identity.current_user() {
            if let Some(existing) =
                users::find_by_provider(&self.all_users, &ambient.external_id).cloned()
            {
                let mut updated = existing;
                let token = updated.token.clone().unwrap_or_else(mint_token);
                updated.token = Some(token.clone());

                info!(user_id = %updated.id, "recognized ambient host identity");
                self.all_users =
                    users::upsert(std::mem::take(&mut self.all_users), updated.clone());
                self.current_user = Some(updated);
                self.persist_users().await;
                self.write_through(keys::SESSION_TOKEN, Ok(token)).await;
                self.current_view = ViewState::Home;
                self.restore_admin_session().await;
                self.loading_auth = false;
                return;
            }
        }

        // 3. No match: present the sign-up/sign-in screen.
        self.current_view = ViewState::Auth;
        self.restore_admin_session().await;
        self.loading_auth = false;
    }

    /// Restores the administrative flag from its marker, honoring the
    /// shorter TTL. An expired marker is removed.
    async fn restore_admin_session(&mut self) {
        let raw = match self.storage.load_raw(keys::ADMIN_SESSION).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read admin session marker");
                return;
            }
        };
        match serde_json::from_str::<AdminSessionMarker>(&raw) {
            Ok(marker)
                if Utc::now() - marker.created_at < Duration::hours(ADMIN_SESSION_TTL_HOURS) =>
            {
                self.is_admin_authenticated = true;
            }
            _ => {
                self.remove_record(keys::ADMIN_SESSION).await;
            }
        }
    }

    //=====================================================================================
    // Sign-Up / Sign-In / Logout
    //=====================================================================================

    /// Completes a profile for the ambient identity (or a synthesized one).
    /// Idempotent per external-identity key: a user already linked to the
    /// key is updated in place, never duplicated.
    pub async fn complete_profile(&mut self, name: &str, phone: &str) {
        let ambient = self.identity.current_user();
        let provider_id = ambient
            .map(|u| u.external_id)
            .unwrap_or_else(|| format!("web_{}", Uuid::new_v4()));
        let token = mint_token();

        let user = match users::find_by_provider(&self.all_users, &provider_id).cloned() {
            Some(mut existing) => {
                existing.name = Some(name.to_string());
                existing.phone = Some(phone.to_string());
                existing.token = Some(token.clone());
                existing
            }
            None => User {
                id: provider_id.clone(),
                token: Some(token.clone()),
                name: Some(name.to_string()),
                email: None,
                phone: Some(phone.to_string()),
                is_guest: false,
                provider_id: Some(provider_id),
                tier: SubscriptionTier::Free,
                tier_expiry: None,
                is_super_admin: false,
                is_store_manager: false,
                preferences: Preferences {
                    theme: self.theme,
                    language: self.language,
                    notifications: true,
                },
            },
        };

        self.all_users = users::upsert(std::mem::take(&mut self.all_users), user.clone());
        self.current_user = Some(user);
        self.persist_users().await;
        self.write_through(keys::SESSION_TOKEN, Ok(token)).await;
        self.current_view = ViewState::Home;
    }

    /// Creates a guest user with a synthesized id and token, not linked to
    /// any external identity.
    pub async fn guest_signup(&mut self, name: &str, phone: &str) {
        let display_name = if name.trim().is_empty() { "Guest" } else { name };
        let token = mint_token();
        let guest = User {
            id: format!("guest_{}", Uuid::new_v4()),
            token: Some(token.clone()),
            name: Some(display_name.to_string()),
            email: None,
            phone: Some(phone.to_string()),
            is_guest: true,
            provider_id: None,
            tier: SubscriptionTier::Free,
            tier_expiry: None,
            is_super_admin: false,
            is_store_manager: false,
            preferences: Preferences {
                theme: self.theme,
                language: self.language,
                notifications: true,
            },
        };

        self.all_users = users::upsert(std::mem::take(&mut self.all_users), guest.clone());
        self.current_user = Some(guest);
        self.persist_users().await;
        self.write_through(keys::SESSION_TOKEN, Ok(token)).await;
        self.current_view = ViewState::Home;
    }

    /// Manual sign-in via the ambient host identity only. Returns whether a
    /// linked account was found; failure has no side effects, so the caller
    /// can offer sign-up instead.
    pub async fn sign_in_with_host(&mut self) -> bool {
        let Some(ambient) = self.identity.current_user() else {
            return false;
        };
        let Some(existing) =
            users::find_by_provider(&self.all_users, &ambient.external_id).cloned()
        else {
            return false;
        };

        if let Some(token) = existing.token.clone() {
            self.write_through(keys::SESSION_TOKEN, Ok(token)).await;
        }
        self.current_user = Some(existing);
        self.persist_users().await;
        self.current_view = ViewState::Home;
        true
    }

    /// Ends the session without deleting the user record.
    pub async fn logout(&mut self) {
        self.current_user = None;
        self.is_admin_authenticated = false;
        self.remove_record(keys::SESSION_TOKEN).await;
        self.remove_record(keys::ADMIN_SESSION).await;
        let encoded = encode(&self.current_user);
        self.write_through(keys::CURRENT_USER, encoded).await;
        self.current_view = ViewState::Auth;
    }

    //=====================================================================================
    // Administrative Session
    //=====================================================================================

    pub fn trigger_admin_login(&mut self) {
        self.show_admin_login = true;
        self.navigate(ViewState::Admin, None);
    }

    pub fn cancel_admin_login(&mut self) {
        self.show_admin_login = false;
        if self.current_user.is_some() {
            self.navigate(ViewState::Home, None);
        } else {
            self.navigate(ViewState::Auth, None);
        }
    }

    /// Checks the injected credential verifier. Success grants the
    /// override and writes the marker; failure reports denial and changes
    /// nothing.
    pub async fn authenticate_admin(&mut self, login: &str, password: &str) -> bool {
        if !self.verifier.verify(login, password) {
            return false;
        }
        self.is_admin_authenticated = true;
        self.show_admin_login = false;
        let marker = AdminSessionMarker {
            created_at: Utc::now(),
        };
        let encoded = encode(&marker);
        self.write_through(keys::ADMIN_SESSION, encoded).await;
        self.navigate(ViewState::Admin, None);
        true
    }

    pub fn exit_admin_panel(&mut self) {
        self.navigate(ViewState::Home, None);
    }

    //=====================================================================================
    // Access Control
    //=====================================================================================

    /// Access decision for the current user. Deferred (denied) while the
    /// startup resolution is still in flight.
    pub fn can_access(&self, level: AccessLevel) -> bool {
        if self.loading_auth {
            return false;
        }
        access::can_access(
            level,
            self.current_user.as_ref(),
            self.is_admin_authenticated,
            Utc::now(),
        )
    }

    //=====================================================================================
    // Shared Persistence Helpers
    //=====================================================================================

    /// Persists the user list and the current-user snapshot together; they
    /// change together in every session mutation.
    pub(crate) async fn persist_users(&mut self) {
        let encoded = encode(&self.all_users);
        self.write_through(keys::ALL_USERS, encoded).await;
        let encoded = encode(&self.current_user);
        self.write_through(keys::CURRENT_USER, encoded).await;
    }
}
