//! Styling preference enums and the structured preference form input.
//!
//! The option sets mirror the preference form exactly: two genders, three
//! fits, five style vibes, seven colors, five occasions. Each enum
//! serializes as its display string so persisted data stays human-readable.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a form value does not match any known option.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown {field} option: {value}")]
pub struct PreferenceError {
    /// The form field being parsed.
    pub field: &'static str,
    /// The rejected value.
    pub value: String,
}

macro_rules! preference_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, [ $( $variant:ident => $label:literal ),+ $(,)? ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// All selectable options, in form display order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Returns the display label for this option.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = PreferenceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok(Self::$variant), )+
                    other => Err(PreferenceError {
                        field: $field,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

preference_enum!(
    /// Gender selection for the preference form.
    Gender, "gender", [Female => "Female", Male => "Male"]
);

preference_enum!(
    /// Preferred garment fit.
    Fit, "fit", [Relaxed => "Relaxed", Regular => "Regular", Slim => "Slim"]
);

preference_enum!(
    /// Overall style vibe.
    StyleVibe, "style", [
        Classic => "Classic",
        Streetwear => "Streetwear",
        Minimal => "Minimal",
        Korean => "Korean",
        Chic => "Chic",
    ]
);

preference_enum!(
    /// Favorite color choice (multi-select).
    ColorChoice, "color", [
        Navy => "Navy",
        Pastels => "Pastels",
        Beige => "Beige",
        Black => "Black",
        White => "White",
        Pink => "Pink",
        Purple => "Purple",
    ]
);

preference_enum!(
    /// Occasion the outfit is for.
    Occasion, "occasion", [
        Casual => "Casual",
        Party => "Party",
        Office => "Office",
        Date => "Date",
        Wedding => "Wedding",
    ]
);

/// The structured input to full outfit generation.
///
/// One or more favorite colors may be selected; the other fields are single
/// choices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutfitPreferences {
    /// Selected gender.
    pub gender: Gender,
    /// Preferred fit.
    pub fit: Fit,
    /// Style vibe.
    pub style: StyleVibe,
    /// Favorite colors (may be empty).
    pub colors: Vec<ColorChoice>,
    /// Occasion.
    pub occasion: Occasion,
}

impl OutfitPreferences {
    /// Renders the selected colors as a comma-separated list.
    #[must_use]
    pub fn colors_list(&self) -> String {
        self.colors
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_option_counts() {
        assert_eq!(Gender::ALL.len(), 2);
        assert_eq!(Fit::ALL.len(), 3);
        assert_eq!(StyleVibe::ALL.len(), 5);
        assert_eq!(ColorChoice::ALL.len(), 7);
        assert_eq!(Occasion::ALL.len(), 5);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for vibe in StyleVibe::ALL {
            let parsed: StyleVibe = vibe.as_str().parse().unwrap();
            assert_eq!(parsed, *vibe);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Grunge".parse::<StyleVibe>().unwrap_err();
        assert_eq!(err.field, "style");
        assert_eq!(err.value, "Grunge");
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Occasion::Office).unwrap();
        assert_eq!(json, "\"Office\"");

        let parsed: Occasion = serde_json::from_str("\"Wedding\"").unwrap();
        assert_eq!(parsed, Occasion::Wedding);
    }

    #[test]
    fn test_colors_list() {
        let prefs = OutfitPreferences {
            gender: Gender::Female,
            fit: Fit::Regular,
            style: StyleVibe::Minimal,
            colors: vec![ColorChoice::Black, ColorChoice::Navy],
            occasion: Occasion::Office,
        };
        assert_eq!(prefs.colors_list(), "Black, Navy");
    }

    #[test]
    fn test_colors_list_empty() {
        let prefs = OutfitPreferences {
            gender: Gender::Male,
            fit: Fit::Slim,
            style: StyleVibe::Classic,
            colors: vec![],
            occasion: Occasion::Party,
        };
        assert_eq!(prefs.colors_list(), "");
    }
}
