//! Operator authentication
//!
//! The booking core never handles credentials; it only consumes the
//! boolean verdict produced here. The gate is an interface so the
//! mechanism can be replaced without touching the core's contracts.

pub mod password;

use std::collections::HashMap;

use tracing::warn;

use crate::config::AdminAccount;
use password::{hash_password, verify_password};

/// Opaque credential check: (username, password) → verdict.
pub trait CredentialGate: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Credential gate over the operator accounts from configuration.
///
/// Passwords are bcrypt-hashed when the gate is built; no plaintext is
/// retained afterwards.
pub struct AdminGate {
    hashes: HashMap<String, String>,
}

impl AdminGate {
    pub fn from_accounts(accounts: &[AdminAccount]) -> Result<Self, bcrypt::BcryptError> {
        let mut hashes = HashMap::new();
        for account in accounts {
            hashes.insert(account.username.clone(), hash_password(&account.password)?);
        }
        Ok(Self { hashes })
    }
}

impl CredentialGate for AdminGate {
    fn verify(&self, username: &str, password: &str) -> bool {
        let Some(hash) = self.hashes.get(username.trim()) else {
            return false;
        };
        match verify_password(password.trim(), hash) {
            Ok(ok) => ok,
            Err(e) => {
                warn!(username, "Credential verification failed: {}", e);
                false
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::from_accounts(&[AdminAccount {
            username: "admin".into(),
            password: "admin123".into(),
        }])
        .unwrap()
    }

    #[test]
    fn accepts_configured_credentials() {
        assert!(gate().verify("admin", "admin123"));
    }

    #[test]
    fn rejects_wrong_password_and_unknown_user() {
        let g = gate();
        assert!(!g.verify("admin", "letmein"));
        assert!(!g.verify("root", "admin123"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(gate().verify(" admin ", " admin123 "));
    }
}
