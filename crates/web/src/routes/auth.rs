//! Authentication route handlers.
//!
//! Handles login, registration, and logout against the account store.
//! Failures are reported as redirect query tokens rendered as banners, so
//! a wrong password is a message on the login page, never an error page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::AuthError;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error.map(error_message),
        success: query.success.map(success_message),
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.auth().login(&form.username, &form.password).await {
        Ok(username) => {
            set_sentry_user(&username);

            let user = CurrentUser { username };
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to set session: {}", e);
                return Redirect::to("/auth/login?error=session").into_response();
            }

            Redirect::to("/generate").into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            Redirect::to("/auth/login?error=credentials").into_response()
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    RegisterTemplate {
        error: query.error.map(error_message),
    }
}

/// Handle registration form submission.
///
/// Successful registration does not log the user in; they are sent back to
/// the login page to sign in with the new credentials.
pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    match state.auth().register(&form.username, &form.password).await {
        Ok(_) => Redirect::to("/auth/login?success=registered").into_response(),
        Err(AuthError::UserAlreadyExists) => {
            Redirect::to("/auth/register?error=user_exists").into_response()
        }
        Err(AuthError::InvalidUsername(_)) => {
            Redirect::to("/auth/register?error=bad_username").into_response()
        }
        Err(AuthError::WeakPassword(_)) => {
            Redirect::to("/auth/register?error=empty_password").into_response()
        }
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            Redirect::to("/auth/register?error=failed").into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Clears the active identity and destroys the session.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    // Also destroy the entire session (pending outfits included)
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    clear_sentry_user();

    Redirect::to("/auth/login").into_response()
}

// =============================================================================
// Banner Messages
// =============================================================================

/// Map an error token from the redirect query to user-facing text.
fn error_message(token: String) -> String {
    match token.as_str() {
        "credentials" => "Invalid credentials.".to_owned(),
        "user_exists" => "User already exists.".to_owned(),
        "bad_username" => "Usernames cannot be empty or contain spaces.".to_owned(),
        "empty_password" => "Password cannot be empty.".to_owned(),
        "session" => "Session error, please try again.".to_owned(),
        _ => "Something went wrong, please try again.".to_owned(),
    }
}

/// Map a success token from the redirect query to user-facing text.
fn success_message(token: String) -> String {
    match token.as_str() {
        "registered" => "Registered Successfully! Please Login.".to_owned(),
        _ => "Done.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(error_message("credentials".to_owned()), "Invalid credentials.");
        assert_eq!(error_message("user_exists".to_owned()), "User already exists.");
        // Unknown tokens get a generic message rather than echoing input
        assert!(!error_message("<script>".to_owned()).contains('<'));
    }

    #[test]
    fn test_registration_success_message() {
        assert_eq!(
            success_message("registered".to_owned()),
            "Registered Successfully! Please Login."
        );
    }
}
