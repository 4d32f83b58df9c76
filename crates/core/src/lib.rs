//! Companion Stylist Core - Shared types library.
//!
//! This crate provides the domain types used across the Companion Stylist
//! components:
//! - `web` - The user-facing styling application
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no model
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Usernames, styling preference enums, and saved designs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
