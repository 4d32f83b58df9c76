//! Design store: the persisted username → saved-designs collection.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use stylist_core::{SavedDesign, Username};

use super::RepositoryError;

/// Store for saved outfit designs.
///
/// Append-only: designs are never edited or deleted, and each user's list
/// preserves insertion order. Cheaply cloneable; clones share the same write
/// lock.
#[derive(Clone)]
pub struct DesignStore {
    inner: Arc<DesignStoreInner>,
}

struct DesignStoreInner {
    path: PathBuf,
    // Serializes read-modify-write cycles so concurrent saves cannot drop
    // each other's appends.
    lock: Mutex<()>,
}

impl DesignStore {
    /// Create a store backed by the given collection file.
    ///
    /// The file does not need to exist yet; it is created on first append.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            inner: Arc::new(DesignStoreInner {
                path,
                lock: Mutex::new(()),
            }),
        }
    }

    /// Append a design to the user's list, creating the list if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be read or
    /// written. I/O errors are fatal for the triggering request and are
    /// never swallowed.
    pub async fn append(
        &self,
        username: &Username,
        design: SavedDesign,
    ) -> Result<(), RepositoryError> {
        let _guard = self.inner.lock.lock().await;

        let mut designs = super::load_collection::<Vec<SavedDesign>>(&self.inner.path).await?;
        designs
            .entry(username.as_str().to_owned())
            .or_default()
            .push(design);

        super::store_collection(&self.inner.path, &designs).await
    }

    /// All designs saved by a user, oldest first.
    ///
    /// Returns an empty vec (not an error) for users with no saved designs.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be read.
    pub async fn list(&self, username: &Username) -> Result<Vec<SavedDesign>, RepositoryError> {
        let _guard = self.inner.lock.lock().await;

        let designs = super::load_collection::<Vec<SavedDesign>>(&self.inner.path).await?;
        Ok(designs.get(username.as_str()).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn username(s: &str) -> Username {
        Username::parse(s).unwrap()
    }

    fn design(outfit: &str) -> SavedDesign {
        SavedDesign::new("Female", "Minimal", "Office", outfit)
    }

    #[tokio::test]
    async fn test_list_unknown_user_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path().join("designs.json"));

        let designs = store.list(&username("nobody")).await.unwrap();
        assert!(designs.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path().join("designs.json"));
        let alice = username("alice");

        for i in 0..5 {
            store.append(&alice, design(&format!("outfit {i}"))).await.unwrap();
        }

        let designs = store.list(&alice).await.unwrap();
        assert_eq!(designs.len(), 5);
        for (i, d) in designs.iter().enumerate() {
            assert_eq!(d.outfit, format!("outfit {i}"));
        }
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path().join("designs.json"));

        store.append(&username("alice"), design("a")).await.unwrap();
        store.append(&username("bob"), design("b")).await.unwrap();

        let alice = store.list(&username("alice")).await.unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice.first().unwrap().outfit, "a");
    }

    #[tokio::test]
    async fn test_concurrent_appends_both_survive() {
        // Without the per-store mutex two racing saves would each load the
        // same snapshot and the later write would drop the earlier one.
        let dir = tempfile::tempdir().unwrap();
        let store = DesignStore::new(dir.path().join("designs.json"));
        let alice = username("alice");

        let a = store.clone();
        let b = store.clone();
        let alice_a = alice.clone();
        let alice_b = alice.clone();
        let (ra, rb) = tokio::join!(
            tokio::spawn(async move { a.append(&alice_a, design("first")).await }),
            tokio::spawn(async move { b.append(&alice_b, design("second")).await }),
        );
        ra.unwrap().unwrap();
        rb.unwrap().unwrap();

        let designs = store.list(&alice).await.unwrap();
        assert_eq!(designs.len(), 2);
    }

    #[tokio::test]
    async fn test_reads_legacy_collection_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("designs.json");
        tokio::fs::write(
            &path,
            br#"{"alice": [{"gender": "Female", "style": "Chic", "occasion": "Date",
                 "outfit": "Top: blouse", "image": null}]}"#,
        )
        .await
        .unwrap();

        let store = DesignStore::new(path);
        let designs = store.list(&username("alice")).await.unwrap();
        assert_eq!(designs.len(), 1);
        assert_eq!(designs.first().unwrap().style, "Chic");
        assert_eq!(designs.first().unwrap().saved_at, None);
    }
}
