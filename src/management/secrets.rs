use std::fmt;

use keyring::Entry;

pub const SECRET_COLLECTION: &str = "tidalPlayer";

#[derive(Debug)]
pub enum SecretError {
    /// The secure collection cannot be opened, so nothing can be stored in it.
    StorageUnavailable(String),
    BackendError(String),
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretError::StorageUnavailable(reason) => {
                write!(f, "secure storage unavailable: {}", reason)
            }
            SecretError::BackendError(reason) => write!(f, "secure storage error: {}", reason),
        }
    }
}

impl std::error::Error for SecretError {}

impl From<keyring::Error> for SecretError {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::NoStorageAccess(_) | keyring::Error::PlatformFailure(_) => {
                SecretError::StorageUnavailable(err.to_string())
            }
            other => SecretError::BackendError(other.to_string()),
        }
    }
}

pub trait SecretStore {
    fn get(&self, key: &str) -> Result<Option<String>, SecretError>;
    fn set(&self, key: &str, secret: &str) -> Result<(), SecretError>;
    fn unset(&self, key: &str) -> Result<(), SecretError>;
}

/// Secret store backed by the OS keyring. The collection name is used as
/// keyring service, the key as user.
pub struct KeyringStore {
    collection: String,
}

impl KeyringStore {
    pub fn new() -> Self {
        Self::with_collection(SECRET_COLLECTION)
    }

    pub fn with_collection(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, SecretError> {
        Entry::new(&self.collection, key)
            .map_err(|e| SecretError::StorageUnavailable(e.to_string()))
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        match self.entry(key)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, secret: &str) -> Result<(), SecretError> {
        self.entry(key)?.set_password(secret).map_err(SecretError::from)
    }

    fn unset(&self, key: &str) -> Result<(), SecretError> {
        match self.entry(key)?.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
