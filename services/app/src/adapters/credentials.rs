//! services/app/src/adapters/credentials.rs
//!
//! Concrete implementation of the `CredentialVerifier` port. The credential
//! pair comes from configuration; the domain layer only ever sees the
//! verification capability.

use bookbites_core::ports::CredentialVerifier;

use crate::config::Config;

pub struct StaticCredentialVerifier {
    login: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.admin_login.clone(), config.admin_password.clone())
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, login: &str, password: &str) -> bool {
        login == self.login && password == self.password
    }
}
