//! services/app/src/adapters/host.rs
//!
//! Adapter for the embedding host's ambient identity. The host exposes, at
//! load time, a read-only external user id and a display name hint; this
//! layer only ever reads them.

use bookbites_core::ports::{AmbientIdentityService, AmbientUser};

use crate::config::Config;

/// An identity adapter fed from the startup configuration snapshot.
#[derive(Clone)]
pub struct HostIdentityAdapter {
    user: Option<AmbientUser>,
}

impl HostIdentityAdapter {
    pub fn from_config(config: &Config) -> Self {
        let user = config.host_user_id.as_ref().map(|id| AmbientUser {
            external_id: id.clone(),
            display_name: config.host_user_name.clone(),
        });
        Self { user }
    }

    /// An adapter for contexts with no embedding host.
    pub fn absent() -> Self {
        Self { user: None }
    }
}

impl AmbientIdentityService for HostIdentityAdapter {
    fn current_user(&self) -> Option<AmbientUser> {
        self.user.clone()
    }
}
