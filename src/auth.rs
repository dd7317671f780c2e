use thiserror::Error;
use tracing::{debug, warn};

const KEYRING_SERVICE: &str = "pokesave";
const TOKEN_ENTRY: &str = "id_token";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Login state as seen by pages that gate actions on it
pub trait Auth: Send + Sync {
    fn logged_in(&self) -> bool;
    fn get_token(&self) -> Option<String>;
}

/// Reads the session token the login flow stored in the system keychain
pub struct KeyringAuth {
    entry: keyring::Entry,
}

impl KeyringAuth {
    pub fn new() -> Result<Self, AuthError> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, TOKEN_ENTRY)?;
        Ok(Self { entry })
    }

    fn read_token(&self) -> Result<Option<String>, AuthError> {
        match self.entry.get_password() {
            Ok(token) if token.trim().is_empty() => Ok(None),
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AuthError::Keyring(e)),
        }
    }
}

impl Auth for KeyringAuth {
    fn logged_in(&self) -> bool {
        self.get_token().is_some()
    }

    fn get_token(&self) -> Option<String> {
        match self.read_token() {
            Ok(Some(token)) => Some(token),
            Ok(None) => {
                debug!("No session token in keyring");
                None
            }
            Err(e) => {
                warn!("Failed to read session token: {}", e);
                None
            }
        }
    }
}
