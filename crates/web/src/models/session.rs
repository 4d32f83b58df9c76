//! Session-related types.
//!
//! Types stored in the session for authentication state and the
//! generate-then-save flow.

use serde::{Deserialize, Serialize};

use stylist_core::{SavedDesign, Username};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Active username.
    pub username: Username,
}

/// The most recently generated outfit, held in the session until the user
/// saves it or generates another.
///
/// Saving is a separate request from generating, so the generated output
/// has to survive in session state between the two interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingOutfit {
    /// Gender selected on the form.
    pub gender: String,
    /// Style vibe selected on the form.
    pub style: String,
    /// Occasion selected on the form.
    pub occasion: String,
    /// The full model response text.
    pub outfit: String,
}

impl PendingOutfit {
    /// Convert into a persistable design record stamped with the current
    /// time. The image field stays empty: photo persistence was never wired
    /// up in the save flow.
    #[must_use]
    pub fn into_design(self) -> SavedDesign {
        SavedDesign::new(&self.gender, &self.style, &self.occasion, &self.outfit)
    }
}

/// Session keys for stylist data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the last generated, not-yet-saved outfit.
    pub const PENDING_OUTFIT: &str = "pending_outfit";

    /// Key for the last photo analysis result.
    pub const LAST_ANALYSIS: &str = "last_analysis";
}
