//! Business logic services.
//!
//! - [`auth`] - Registration and login over the account store
//! - [`stylist`] - Prompt construction, model invocation, and response
//!   splitting

pub mod auth;
pub mod stylist;

pub use auth::{AuthError, AuthService};
pub use stylist::{StylistService, split_output};
