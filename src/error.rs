use crate::storage_keys::StoreKey;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum VitroLabError {
    /// Record rejected at the store boundary (empty identifier etc.).
    Validation(String),
    /// `update` addressed an identifier the store does not hold.
    NotFound { store: StoreKey, id: String },
    /// `add` addressed an identifier the store already holds.
    DuplicateKey { store: StoreKey, id: String },
    /// The storage facility is missing or disabled. Logged, never fatal.
    StorageUnavailable(String),
    /// A persisted slot could not be parsed. Logged, resolved by reseeding.
    StorageCorrupt { key: &'static str, message: String },
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Error for VitroLabError {}

impl fmt::Display for VitroLabError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "Invalid record: {message}"),
            Self::NotFound { store, id } => {
                write!(f, "No record '{id}' in {}", store.label())
            }
            Self::DuplicateKey { store, id } => {
                write!(f, "Record '{id}' already exists in {}", store.label())
            }
            Self::StorageUnavailable(message) => {
                write!(f, "Storage unavailable: {message}")
            }
            Self::StorageCorrupt { key, message } => {
                write!(f, "Slot '{key}' is unreadable: {message}")
            }
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for VitroLabError {
    fn from(err: std::io::Error) -> Self {
        VitroLabError::Io(err)
    }
}

impl From<serde_json::Error> for VitroLabError {
    fn from(err: serde_json::Error) -> Self {
        VitroLabError::Serde(err)
    }
}
