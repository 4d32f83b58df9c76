//! Dashboard route handlers.
//!
//! Shows every look the active user has saved, oldest first.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use stylist_core::SavedDesign;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "looks/dashboard.html")]
pub struct DashboardTemplate {
    pub username: String,
    pub designs: Vec<SavedDesign>,
}

/// Display the saved looks dashboard.
pub async fn index(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Response> {
    let designs = state.designs().list(&user.username).await?;

    Ok(DashboardTemplate {
        username: user.username.to_string(),
        designs,
    }
    .into_response())
}
