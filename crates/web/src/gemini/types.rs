//! Request and response types for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents. The stylist always sends a single user turn.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single-turn request carrying one text prompt.
    #[must_use]
    pub fn from_text(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: prompt.to_owned(),
                }],
            }],
        }
    }

    /// A single-turn request carrying an inline image followed by an
    /// instruction.
    #[must_use]
    pub fn from_image(mime_type: &str, base64_data: String, instruction: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: Blob {
                            mime_type: mime_type.to_owned(),
                            data: base64_data,
                        },
                    },
                    Part::Text {
                        text: instruction.to_owned(),
                    },
                ],
            }],
        }
    }
}

/// A single piece of conversation content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Ordered message parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content message: text or inline binary data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text.
    Text {
        /// The text payload.
        text: String,
    },
    /// Inline base64-encoded binary data (images).
    InlineData {
        /// The binary payload.
        #[serde(rename = "inlineData", alias = "inline_data")]
        inline_data: Blob,
    },
}

/// Base64-encoded binary payload with its media type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    /// IANA media type, e.g. `image/jpeg`.
    #[serde(rename = "mimeType", alias = "mime_type")]
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates. May be empty if the prompt was blocked.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;

        let mut out = String::new();
        for part in &content.parts {
            if let Part::Text { text } = part {
                out.push_str(text);
            }
        }

        if out.is_empty() { None } else { Some(out) }
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content. Absent for blocked candidates.
    pub content: Option<Content>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_serialization() {
        let request = GenerateContentRequest::from_text("describe an outfit");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "describe an outfit"
        );
    }

    #[test]
    fn test_image_request_serialization() {
        let request = GenerateContentRequest::from_image("image/png", "QUJD".to_owned(), "analyze");
        let json = serde_json::to_value(&request).unwrap();

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "QUJD");
        assert_eq!(parts[1]["text"], "analyze");
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Outfit: "}, {"text": "navy blazer"}]}}
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "Outfit: navy blazer");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_response_with_blocked_candidate() {
        let json = r#"{"candidates": [{}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), None);
    }
}
