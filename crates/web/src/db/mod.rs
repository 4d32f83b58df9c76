//! Persistence for the stylist's JSON collections.
//!
//! # Layout
//!
//! Two collections live under the configured data directory, both plain JSON
//! objects keyed by username:
//!
//! - `accounts.json` - `{username: password_hash}`
//! - `designs.json` - `{username: [SavedDesign, ...]}`
//!
//! Every store operation is a full-collection read-modify-write. Writers
//! serialize to a temporary file in the same directory and rename it over the
//! collection, so a crash mid-write never leaves a partially written file.
//! An async mutex per store serializes in-process writers; without it two
//! concurrent saves could each load the same snapshot and the second write
//! would drop the first (the classic lost update).

pub mod accounts;
pub mod designs;

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use accounts::AccountStore;
pub use designs::DesignStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// File I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data on disk is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., duplicate username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Load a JSON collection keyed by username.
///
/// A missing file is an empty collection, not an error.
///
/// # Errors
///
/// Returns `RepositoryError::Io` if the file cannot be read and
/// `RepositoryError::DataCorruption` if it does not parse.
pub(crate) async fn load_collection<T>(path: &Path) -> Result<HashMap<String, T>, RepositoryError>
where
    T: DeserializeOwned,
{
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_slice(&bytes).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid collection {}: {e}", path.display()))
    })
}

/// Write a JSON collection atomically.
///
/// Serializes into `<path>.tmp` in the same directory and renames it over
/// the collection, so readers only ever observe a complete file.
///
/// # Errors
///
/// Returns `RepositoryError::Io` if the write or rename fails.
pub(crate) async fn store_collection<T>(
    path: &Path,
    collection: &HashMap<String, T>,
) -> Result<(), RepositoryError>
where
    T: Serialize,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_vec_pretty(collection).map_err(|e| {
        RepositoryError::DataCorruption(format!("failed to serialize collection: {e}"))
    })?;

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, path).await?;

    Ok(())
}
