//! Authentication handlers

use axum::{
    extract::{Extension, Json, Query},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

use super::gate::{self, LOGIN_ROUTE, SIGNUP_ROUTE};
use super::models::{
    FromQuery, LoginRequest, LoginView, Role, SessionRecord, SignupRequest, SignupRole, SignupView,
};
use super::session::CurrentSession;
use crate::common::{safe_email_log, ApiError, AppState, ValidationResult, Validator};

/// GET /
/// The root only ever forwards to the login page
pub async fn root_redirect() -> Redirect {
    Redirect::to(LOGIN_ROUTE)
}

/// GET /login
pub async fn login_page(Query(query): Query<FromQuery>) -> Json<LoginView> {
    Json(LoginView {
        page: "login",
        from: query.from,
        signup: SIGNUP_ROUTE,
    })
}

/// POST /login
/// Checks credentials, stores the session, then redirects to the page the
/// user was bounced from (`?from=`) or to the role's home
///
/// # Request Body
/// ```json
/// { "email": "talent@example.com", "password": "1234" }
/// ```
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    session: CurrentSession,
    Query(query): Query<FromQuery>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let mut validation = ValidationResult::new();
    validation.require("email", &payload.email, "Email");
    validation.require("password", &payload.password, "Password");
    validation.into_result()?;

    let record = match state.verifier.verify(payload.email.trim(), &payload.password).await {
        Ok(record) => record,
        Err(e) => {
            warn!(
                email = %safe_email_log(&payload.email),
                error = %e,
                "Login rejected"
            );
            return Err(e.into());
        }
    };

    // Session goes in before the redirect so the next request already sees it
    session.write_session(&record).await?;

    let destination = gate::resolve_post_login(record.role, query.from.as_deref());
    info!(
        email = %safe_email_log(&record.email),
        role = %record.role,
        destination = %destination,
        "User logged in"
    );

    Ok(Redirect::to(&destination).into_response())
}

/// POST /logout
pub async fn logout(
    session: CurrentSession,
    Extension(user): Extension<SessionRecord>,
) -> Result<Redirect, ApiError> {
    session.clear_session().await?;
    info!(email = %safe_email_log(&user.email), "User logged out");
    Ok(Redirect::to(LOGIN_ROUTE))
}

/// GET /api/me
pub async fn me(Extension(user): Extension<SessionRecord>) -> Json<SessionRecord> {
    Json(user)
}

/// GET /signup
pub async fn signup_page() -> Json<SignupView> {
    Json(SignupView {
        page: "signup",
        roles: vec![
            SignupRole {
                value: Role::Talent,
                label: "Talent",
                description: "Athletes, creators, entertainers",
            },
            SignupRole {
                value: Role::Brand,
                label: "Brand",
                description: "Companies seeking talent",
            },
        ],
        login: LOGIN_ROUTE,
    })
}

pub struct SignupValidator;

impl Validator<SignupRequest> for SignupValidator {
    fn validate(&self, data: &SignupRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require("first_name", &data.first_name, "First name");
        result.require("last_name", &data.last_name, "Last name");
        result.require_email("email", &data.email);

        if data.password.chars().count() < 4 {
            result.add_error("password", "Password must be at least 4 characters");
        }

        if data.role == Role::Admin {
            result.add_error("role", "Admin accounts cannot be self-registered");
        }

        result
    }
}

/// POST /signup
/// Validates the form. No account is created and no session is written;
/// the user is sent to the login page.
pub async fn signup(Json(payload): Json<SignupRequest>) -> Result<Redirect, ApiError> {
    SignupValidator.validate(&payload).into_result()?;

    info!(
        email = %safe_email_log(&payload.email),
        role = %payload.role,
        "Signup form accepted"
    );

    Ok(Redirect::to(LOGIN_ROUTE))
}
