//! Authentication service.
//!
//! Registration and login backed by the account store. Passwords are hashed
//! with Argon2id before they ever reach storage; the collection on disk only
//! holds PHC-format hash strings.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use stylist_core::Username;

use crate::db::{AccountStore, RepositoryError};

/// Authentication service.
///
/// Handles user registration and login against the account collection.
#[derive(Clone)]
pub struct AuthService {
    accounts: AccountStore,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(accounts: AccountStore) -> Self {
        Self { accounts }
    }

    /// Register a new user with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is empty.
    /// Returns `AuthError::UserAlreadyExists` if the username is taken; the
    /// existing account's hash is never mutated in that case.
    pub async fn register(&self, username: &str, password: &str) -> Result<Username, AuthError> {
        let username = Username::parse(username)?;

        // No length or complexity policy; require only that something was
        // typed.
        if password.is_empty() {
            return Err(AuthError::WeakPassword(
                "password cannot be empty".to_owned(),
            ));
        }

        let password_hash = hash_password(password)?;

        self.accounts
            .insert(&username, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(username)
    }

    /// Login with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username does not
    /// exist or the password does not verify. The two cases are not
    /// distinguishable by the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<Username, AuthError> {
        let username = Username::parse(username).map_err(|_| AuthError::InvalidCredentials)?;

        let password_hash = self
            .accounts
            .password_hash(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(username)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
