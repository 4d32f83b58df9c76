//! Saved outfit designs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved outfit recommendation, owned by a single username.
///
/// On disk this is the legacy record shape `{gender, style, occasion,
/// outfit, image}`. The styling fields are stored as their display strings
/// rather than enums so that records written by any prior version of the
/// collection still deserialize. `saved_at` is a later addition: absent in
/// legacy data, tolerated on read, written for new saves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedDesign {
    /// Selected gender at generation time.
    pub gender: String,
    /// Style vibe at generation time.
    pub style: String,
    /// Occasion at generation time.
    pub occasion: String,
    /// The full generated outfit text, including any "Similar Products:"
    /// section.
    pub outfit: String,
    /// Optional base64 image payload. Currently always `None`; the field is
    /// kept so existing records and any future image-saving flow round-trip.
    pub image: Option<String>,
    /// When the design was saved. Missing on legacy records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedDesign {
    /// Create a design record stamped with the current time.
    #[must_use]
    pub fn new(gender: &str, style: &str, occasion: &str, outfit: &str) -> Self {
        Self {
            gender: gender.to_owned(),
            style: style.to_owned(),
            occasion: occasion.to_owned(),
            outfit: outfit.to_owned(),
            image: None,
            saved_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_record_deserializes() {
        // Shape written by earlier versions of the collection: no saved_at,
        // null image.
        let json = r#"{
            "gender": "Female",
            "style": "Minimal",
            "occasion": "Office",
            "outfit": "Top: white shirt",
            "image": null
        }"#;

        let design: SavedDesign = serde_json::from_str(json).unwrap();
        assert_eq!(design.style, "Minimal");
        assert_eq!(design.image, None);
        assert_eq!(design.saved_at, None);
    }

    #[test]
    fn test_new_record_omits_absent_saved_at() {
        let design = SavedDesign {
            gender: "Male".to_owned(),
            style: "Classic".to_owned(),
            occasion: "Party".to_owned(),
            outfit: "outfit text".to_owned(),
            image: None,
            saved_at: None,
        };

        let json = serde_json::to_string(&design).unwrap();
        assert!(!json.contains("saved_at"));
        assert!(json.contains("\"image\":null"));
    }

    #[test]
    fn test_roundtrip_with_saved_at() {
        let design = SavedDesign::new("Female", "Chic", "Date", "outfit");
        let json = serde_json::to_string(&design).unwrap();
        let parsed: SavedDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, design);
        assert!(parsed.saved_at.is_some());
    }
}
