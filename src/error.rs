use std::fmt;

/// Errors that can occur when using a Collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection was destroyed and can no longer be used
    Destroyed,
    /// The given value can't be used as a key
    InvalidKey(String),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CollectionError::Destroyed => write!(f, "Collection has been destroyed"),
            CollectionError::InvalidKey(key) => write!(f, "Invalid key type: {}", key),
        }
    }
}

impl std::error::Error for CollectionError {}
