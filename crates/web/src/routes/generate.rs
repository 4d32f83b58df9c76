//! Generate Look route handlers.
//!
//! The styling page offers two flows: upload a photo for improvement
//! suggestions, or fill the preference form for a full generated outfit.
//! Generated results are parked in the session so they survive a reload and
//! can be saved from a separate request.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Query, RawForm, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use stylist_core::{ColorChoice, Fit, Gender, Occasion, OutfitPreferences, StyleVibe};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{PendingOutfit, session_keys};
use crate::services::stylist::split_output;
use crate::state::AppState;

/// Accepted upload media types.
const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

// =============================================================================
// Templates
// =============================================================================

/// A generated outfit rendered as its two sections.
pub struct OutfitView {
    pub outfit: String,
    pub products: String,
}

/// Styling page template.
#[derive(Template, WebTemplate)]
#[template(path = "looks/generate.html")]
pub struct GenerateTemplate {
    pub username: String,
    pub analysis: Option<String>,
    pub result: Option<OutfitView>,
    pub saved: bool,
    pub error: Option<String>,
    pub genders: &'static [Gender],
    pub fits: &'static [Fit],
    pub styles: &'static [StyleVibe],
    pub colors: &'static [ColorChoice],
    pub occasions: &'static [Occasion],
}

impl GenerateTemplate {
    fn new(username: String) -> Self {
        Self {
            username,
            analysis: None,
            result: None,
            saved: false,
            error: None,
            genders: Gender::ALL,
            fits: Fit::ALL,
            styles: StyleVibe::ALL,
            colors: ColorChoice::ALL,
            occasions: Occasion::ALL,
        }
    }
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for feedback banners.
#[derive(Debug, Deserialize)]
pub struct FeedbackQuery {
    pub saved: Option<bool>,
    pub error: Option<String>,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the styling page.
///
/// Any analysis or generated outfit from earlier in the session is shown
/// again, so a page reload does not lose the result.
pub async fn page(
    RequireAuth(user): RequireAuth,
    Query(query): Query<FeedbackQuery>,
    session: Session,
) -> Result<Response> {
    let mut template = GenerateTemplate::new(user.username.to_string());
    template.saved = query.saved.unwrap_or(false);
    template.error = query.error.map(error_message);

    // The page still renders when the session cannot be read; the stale
    // result is just not shown.
    match session.get::<String>(session_keys::LAST_ANALYSIS).await {
        Ok(analysis) => template.analysis = analysis,
        Err(e) => tracing::warn!("Failed to read analysis from session: {}", e),
    }

    match session
        .get::<PendingOutfit>(session_keys::PENDING_OUTFIT)
        .await
    {
        Ok(Some(pending)) => {
            let (outfit, products) = split_output(&pending.outfit);
            template.result = Some(OutfitView { outfit, products });
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to read pending outfit from session: {}", e),
    }

    Ok(template.into_response())
}

/// Analyze an uploaded outfit photo.
///
/// Expects a multipart body with a `photo` file field. A missing photo is a
/// validation failure reported as a page banner, not an error page.
pub async fn analyze(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut photo: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid upload: {e}")))?
    {
        if field.name() == Some("photo") {
            let content_type = field.content_type().unwrap_or_default().to_owned();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("invalid upload: {e}")))?;
            if !bytes.is_empty() {
                photo = Some((content_type, bytes.to_vec()));
            }
        }
    }

    let Some((content_type, bytes)) = photo else {
        return Ok(Redirect::to("/generate?error=no_image").into_response());
    };

    if !ACCEPTED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Ok(Redirect::to("/generate?error=bad_image_type").into_response());
    }

    tracing::info!(user = %user.username, bytes = bytes.len(), "analyzing uploaded photo");
    let analysis = state
        .stylist()
        .analyze_uploaded_image(&content_type, &bytes)
        .await?;

    session
        .insert(session_keys::LAST_ANALYSIS, &analysis)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    let mut template = GenerateTemplate::new(user.username.to_string());
    template.analysis = Some(analysis);
    Ok(template.into_response())
}

/// Generate a full styled outfit from the preference form.
///
/// The form arrives urlencoded with repeated `colors` keys for the
/// multi-select, which `serde_urlencoded` cannot express; the body is
/// decoded with `form_urlencoded` instead.
pub async fn outfit(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    session: Session,
    RawForm(body): RawForm,
) -> Result<Response> {
    let preferences = parse_outfit_form(&body)?;

    tracing::info!(user = %user.username, style = %preferences.style, "generating outfit");
    let generated = state.stylist().generate_full_outfit(&preferences).await?;

    let pending = PendingOutfit {
        gender: preferences.gender.to_string(),
        style: preferences.style.to_string(),
        occasion: preferences.occasion.to_string(),
        outfit: generated.clone(),
    };
    session
        .insert(session_keys::PENDING_OUTFIT, &pending)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    let (outfit, products) = split_output(&generated);
    let mut template = GenerateTemplate::new(user.username.to_string());
    template.result = Some(OutfitView { outfit, products });
    Ok(template.into_response())
}

/// Save the session's pending outfit for the active user.
pub async fn save(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    session: Session,
) -> Result<Response> {
    let pending: PendingOutfit = session
        .get(session_keys::PENDING_OUTFIT)
        .await
        .map_err(|e| AppError::Internal(format!("session read failed: {e}")))?
        .ok_or_else(|| AppError::Validation("no generated outfit to save".to_owned()))?;

    state
        .designs()
        .append(&user.username, pending.into_design())
        .await?;

    tracing::info!(user = %user.username, "outfit saved");
    Ok(Redirect::to("/generate?saved=true").into_response())
}

// =============================================================================
// Form Parsing
// =============================================================================

/// Decode the preference form, including the repeated `colors` keys.
fn parse_outfit_form(body: &[u8]) -> Result<OutfitPreferences> {
    let mut gender = None;
    let mut fit = None;
    let mut style = None;
    let mut occasion = None;
    let mut colors = Vec::new();

    for (key, value) in url::form_urlencoded::parse(body) {
        match key.as_ref() {
            "gender" => gender = Some(parse_option::<Gender>(&value)?),
            "fit" => fit = Some(parse_option::<Fit>(&value)?),
            "style" => style = Some(parse_option::<StyleVibe>(&value)?),
            "occasion" => occasion = Some(parse_option::<Occasion>(&value)?),
            "colors" => colors.push(parse_option::<ColorChoice>(&value)?),
            _ => {}
        }
    }

    Ok(OutfitPreferences {
        gender: gender.ok_or_else(|| missing_field("gender"))?,
        fit: fit.ok_or_else(|| missing_field("fit"))?,
        style: style.ok_or_else(|| missing_field("style"))?,
        colors,
        occasion: occasion.ok_or_else(|| missing_field("occasion"))?,
    })
}

fn parse_option<T: std::str::FromStr<Err = stylist_core::PreferenceError>>(
    value: &str,
) -> Result<T> {
    value
        .parse()
        .map_err(|e: stylist_core::PreferenceError| AppError::Validation(e.to_string()))
}

fn missing_field(name: &str) -> AppError {
    AppError::Validation(format!("missing form field: {name}"))
}

/// Map an error token from the redirect query to user-facing text.
fn error_message(token: String) -> String {
    match token.as_str() {
        "no_image" => "Please upload an image first.".to_owned(),
        "bad_image_type" => "Please upload a JPEG, PNG, or WebP image.".to_owned(),
        _ => "Something went wrong, please try again.".to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_outfit_form_full() {
        let body = b"gender=Female&fit=Regular&style=Minimal&colors=Black&colors=Navy&occasion=Office";
        let prefs = parse_outfit_form(body).unwrap();

        assert_eq!(prefs.gender, Gender::Female);
        assert_eq!(prefs.fit, Fit::Regular);
        assert_eq!(prefs.style, StyleVibe::Minimal);
        assert_eq!(prefs.colors, vec![ColorChoice::Black, ColorChoice::Navy]);
        assert_eq!(prefs.occasion, Occasion::Office);
    }

    #[test]
    fn test_parse_outfit_form_no_colors() {
        // The multi-select may be left empty
        let body = b"gender=Male&fit=Slim&style=Classic&occasion=Party";
        let prefs = parse_outfit_form(body).unwrap();
        assert!(prefs.colors.is_empty());
    }

    #[test]
    fn test_parse_outfit_form_missing_field() {
        let body = b"gender=Female&fit=Regular&style=Minimal&colors=Black";
        let err = parse_outfit_form(body).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_parse_outfit_form_unknown_option() {
        let body = b"gender=Other&fit=Regular&style=Minimal&occasion=Office";
        let err = parse_outfit_form(body).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_parse_outfit_form_urlencoded_values() {
        // Browsers percent-encode nothing in these labels, but a stray
        // encoded space must still decode before matching.
        let body = b"gender=Female&fit=Regular&style=Minimal&occasion=Office&colors=Pastels";
        assert!(parse_outfit_form(body).is_ok());
    }

    #[test]
    fn test_error_message_tokens() {
        assert_eq!(
            error_message("no_image".to_owned()),
            "Please upload an image first."
        );
        assert!(!error_message("junk".to_owned()).is_empty());
    }
}
