//! Domain models for the web application.

pub mod session;

pub use session::{CurrentUser, PendingOutfit, keys as session_keys};
