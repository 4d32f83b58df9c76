//! HTTP route handlers for the stylist.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to /generate
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//!
//! # Generate Look (requires auth)
//! GET  /generate               - Styling page (upload + preference forms)
//! POST /generate/analyze       - Analyze an uploaded photo (multipart)
//! POST /generate/outfit        - Generate a full styled outfit
//! POST /generate/save          - Save the pending outfit
//!
//! # Dashboard (requires auth)
//! GET  /dashboard              - Saved looks for the active user
//! ```

pub mod auth;
pub mod dashboard;
pub mod generate;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the generate-look routes router.
pub fn generate_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(generate::page))
        .route("/analyze", post(generate::analyze))
        .route("/outfit", post(generate::outfit))
        .route("/save", post(generate::save))
}

/// Create all routes for the stylist.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing: straight into the styling flow (the auth gate redirects
        // anonymous visitors to the login page)
        .route("/", get(|| async { Redirect::to("/generate") }))
        // Auth routes
        .nest("/auth", auth_routes())
        // Generate Look routes
        .nest("/generate", generate_routes())
        // Dashboard
        .route("/dashboard", get(dashboard::index))
}
