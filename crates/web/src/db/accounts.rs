//! Account store: the persisted username → password-hash collection.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use stylist_core::Username;

use super::RepositoryError;

/// Store for registered accounts.
///
/// Passwords are never stored raw; callers hand in an Argon2 PHC string and
/// get one back. Cheaply cloneable; clones share the same write lock.
#[derive(Clone)]
pub struct AccountStore {
    inner: Arc<AccountStoreInner>,
}

struct AccountStoreInner {
    path: PathBuf,
    // Serializes read-modify-write cycles so concurrent registrations
    // cannot drop each other's inserts.
    lock: Mutex<()>,
}

impl AccountStore {
    /// Create a store backed by the given collection file.
    ///
    /// The file does not need to exist yet; it is created on first insert.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            inner: Arc::new(AccountStoreInner {
                path,
                lock: Mutex::new(()),
            }),
        }
    }

    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// The stored hash for an existing username is never mutated.
    pub async fn insert(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let _guard = self.inner.lock.lock().await;

        let mut accounts = super::load_collection::<String>(&self.inner.path).await?;
        if accounts.contains_key(username.as_str()) {
            return Err(RepositoryError::Conflict(
                "username already exists".to_owned(),
            ));
        }

        accounts.insert(username.as_str().to_owned(), password_hash.to_owned());
        super::store_collection(&self.inner.path, &accounts).await
    }

    /// Look up the stored password hash for a username.
    ///
    /// Returns `None` if the account does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be read.
    pub async fn password_hash(
        &self,
        username: &Username,
    ) -> Result<Option<String>, RepositoryError> {
        let _guard = self.inner.lock.lock().await;

        let accounts = super::load_collection::<String>(&self.inner.path).await?;
        Ok(accounts.get(username.as_str()).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn username(s: &str) -> Username {
        Username::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("accounts.json"));

        store.insert(&username("alice"), "hash-1").await.unwrap();

        let hash = store.password_hash(&username("alice")).await.unwrap();
        assert_eq!(hash.as_deref(), Some("hash-1"));
    }

    #[tokio::test]
    async fn test_lookup_unknown_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("accounts.json"));

        let hash = store.password_hash(&username("nobody")).await.unwrap();
        assert_eq!(hash, None);
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts_and_keeps_hash() {
        let dir = tempfile::tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("accounts.json"));

        store.insert(&username("alice"), "hash-1").await.unwrap();
        let result = store.insert(&username("alice"), "hash-2").await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));

        // The original hash must be untouched.
        let hash = store.password_hash(&username("alice")).await.unwrap();
        assert_eq!(hash.as_deref(), Some("hash-1"));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_both_survive() {
        let dir = tempfile::tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("accounts.json"));

        let a = store.clone();
        let b = store.clone();
        let alice = username("alice");
        let bob = username("bob");
        let (ra, rb) = tokio::join!(
            a.insert(&alice, "hash-a"),
            b.insert(&bob, "hash-b"),
        );
        ra.unwrap();
        rb.unwrap();

        assert!(store.password_hash(&username("alice")).await.unwrap().is_some());
        assert!(store.password_hash(&username("bob")).await.unwrap().is_some());
    }
}
