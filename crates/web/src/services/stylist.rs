//! The styling orchestrator.
//!
//! Builds prompts from user input, relays them to Gemini, and splits the
//! textual response into its outfit and "Similar Products" sections. The
//! instruction and template wording is load-bearing: the model is told to
//! reproduce the exact section marker that [`split_output`] later splits on,
//! so the strings here must not be reworded casually.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use stylist_core::OutfitPreferences;

use crate::gemini::{GeminiClient, GeminiError, GenerateContentRequest};

/// Fixed instruction sent alongside an uploaded photo.
pub const ANALYZE_INSTRUCTION: &str = "Analyze this person's current outfit. Describe what they \
     are wearing, their style vibe, and suggest detailed improvement ideas.";

/// Section marker the model is instructed to emit between the outfit and the
/// shoppable product list.
pub const PRODUCTS_MARKER: &str = "Similar Products:";

/// The styling orchestrator.
///
/// Cheaply cloneable; clones share the underlying Gemini client.
#[derive(Clone)]
pub struct StylistService {
    gemini: GeminiClient,
}

impl StylistService {
    /// Create a new stylist service over a Gemini client.
    #[must_use]
    pub const fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }

    /// Analyze an uploaded outfit photo.
    ///
    /// Sends the image inline (base64) with the fixed analysis instruction
    /// and returns the model's text verbatim.
    ///
    /// # Errors
    ///
    /// Returns `GeminiError` if the model call fails; the failure surfaces
    /// to the caller rather than degrading to a default.
    pub async fn analyze_uploaded_image(
        &self,
        mime_type: &str,
        image: &[u8],
    ) -> Result<String, GeminiError> {
        let request =
            GenerateContentRequest::from_image(mime_type, BASE64.encode(image), ANALYZE_INSTRUCTION);
        self.gemini.generate(&request).await
    }

    /// Generate a full styled outfit from the preference form.
    ///
    /// # Errors
    ///
    /// Returns `GeminiError` if the model call fails.
    pub async fn generate_full_outfit(
        &self,
        preferences: &OutfitPreferences,
    ) -> Result<String, GeminiError> {
        let prompt = build_outfit_prompt(preferences);
        let request = GenerateContentRequest::from_text(&prompt);
        self.gemini.generate(&request).await
    }
}

/// Render the outfit generation prompt.
///
/// The platform, currency, and budget constraints and the response format
/// skeleton are fixed; only the five preference fields vary.
#[must_use]
pub fn build_outfit_prompt(preferences: &OutfitPreferences) -> String {
    format!(
        "You are a professional Indian fashion stylist and shopping assistant.\n\
         \n\
         Generate a clean structured outfit response.\n\
         \n\
         IMPORTANT RULES:\n\
         - Use ONLY Indian platforms: Amazon.in, Myntra, Ajio, Flipkart, Tata Cliq\n\
         - Prices must be in Indian Rupees (₹)\n\
         - Budget range: ₹999–₹2000\n\
         \n\
         User Preferences:\n\
         Gender: {gender}\n\
         Preferred Fit: {fit}\n\
         Style: {style}\n\
         Favorite Colors: {colors}\n\
         Occasion: {occasion}\n\
         \n\
         Format:\n\
         \n\
         Gender:\n\
         Style:\n\
         Occasion:\n\
         \n\
         Top:\n\
         Bottom:\n\
         Footwear:\n\
         Accessories:\n\
         Color Anchor:\n\
         \n\
         ------------------------------------\n\
         Similar Products:\n\
         \n\
         1. Product Name:\n\
         Platform:\n\
         Price:\n\
         Description:\n\
         \n\
         2. Product Name:\n\
         Platform:\n\
         Price:\n\
         Description:\n\
         \n\
         3. Product Name:\n\
         Platform:\n\
         Price:\n\
         Description:\n",
        gender = preferences.gender,
        fit = preferences.fit,
        style = preferences.style,
        colors = preferences.colors_list(),
        occasion = preferences.occasion,
    )
}

/// Split a model response into its outfit and products sections.
///
/// Splits on the fixed [`PRODUCTS_MARKER`]. The first element is everything
/// before the marker, trimmed; the second is everything after, trimmed, or
/// empty when the marker is absent. Marker absence is an expected case
/// (older-format or model-variance responses), not an error.
#[must_use]
pub fn split_output(text: &str) -> (String, String) {
    match text.split_once(PRODUCTS_MARKER) {
        Some((outfit, products)) => (outfit.trim().to_owned(), products.trim().to_owned()),
        None => (text.trim().to_owned(), String::new()),
    }
}
