// src/portal/handlers/profile.rs

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use tracing::info;

use crate::auth::session::APP_USER_KEY;
use crate::auth::{CurrentSession, SessionRecord};
use crate::common::{safe_email_log, ApiError, AppState, ValidationResult, Validator};
use crate::portal::models::{NavQuery, NavView, ProfileBlob, ProfileView};
use crate::portal::navigation::nav_view;

const MAX_BIO_CHARS: usize = 1000;

pub struct ProfileValidator;

impl Validator<ProfileBlob> for ProfileValidator {
    fn validate(&self, data: &ProfileBlob) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require("first_name", &data.first_name, "First name");
        result.require("last_name", &data.last_name, "Last name");
        result.require_email("email", &data.email);

        if data.bio.chars().count() > MAX_BIO_CHARS {
            result.add_error("bio", "Bio must be at most 1000 characters");
        }

        result
    }
}

/// GET /profile
/// Stored profile blob, or the bundled defaults when none is stored
pub async fn get_profile(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
) -> Result<Json<ProfileView>, ApiError> {
    let profile = session
        .read_json::<ProfileBlob>(APP_USER_KEY)
        .await?
        .unwrap_or_else(|| state.fixtures.default_profile.clone());

    Ok(Json(ProfileView {
        role: user.role,
        verified: true,
        profile,
    }))
}

/// PUT /profile
pub async fn update_profile(
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
    Json(payload): Json<ProfileBlob>,
) -> Result<Json<ProfileView>, ApiError> {
    ProfileValidator.validate(&payload).into_result()?;

    session.write_json(APP_USER_KEY, &payload).await?;
    info!(email = %safe_email_log(&user.email), "Profile updated");

    Ok(Json(ProfileView {
        role: user.role,
        verified: true,
        profile: payload,
    }))
}

/// GET /api/nav
pub async fn navigation(
    Extension(user): Extension<SessionRecord>,
    Query(query): Query<NavQuery>,
) -> Json<NavView> {
    Json(nav_view(&user, query.path.as_deref()))
}
