//! Key checks shared by the storage backends.

use crate::traits::{StorageError, StorageResult};
use object_store::path::Path;

/// Reject keys that cannot name an object: empty, a leading `/`, or a trailing
/// `/` (an empty filename under the upload folder).
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("key is empty".to_string()));
    }
    if key.starts_with('/') {
        return Err(StorageError::InvalidKey(format!(
            "key must not start with '/': {}",
            key
        )));
    }
    if key.ends_with('/') {
        return Err(StorageError::InvalidKey(format!(
            "key has an empty filename: {}",
            key
        )));
    }
    Ok(())
}

/// Object location for `key`, taken verbatim.
///
/// `Path::from` would percent-encode characters such as `[`, `~` or `%`, so
/// the stored object would no longer match the key in the returned URL.
pub fn object_location(key: &str) -> StorageResult<Path> {
    validate_key(key)?;
    Path::parse(key).map_err(|e| StorageError::InvalidKey(format!("{}: {}", key, e)))
}
