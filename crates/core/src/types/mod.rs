//! Core types for Companion Stylist.
//!
//! This module provides type-safe wrappers for the styling domain.

pub mod design;
pub mod preferences;
pub mod username;

pub use design::SavedDesign;
pub use preferences::{
    ColorChoice, Fit, Gender, Occasion, OutfitPreferences, PreferenceError, StyleVibe,
};
pub use username::{Username, UsernameError};
