// src/portal/handlers/mod.rs

pub mod campaigns;
pub mod dashboard;
pub mod deals;
pub mod payments;
pub mod profile;
pub mod talent;

use crate::auth::session::APP_USER_KEY;
use crate::auth::{CurrentSession, SessionRecord};
use crate::common::ApiError;
use crate::portal::fixtures::{Fixtures, TalentIdentity};
use crate::portal::models::AppUser;

/// Slot key holding the masked payout account
pub const PAYMENT_METHOD_KEY: &str = "paymentMethod";

/// Slot key holding content uploaded to deals, keyed by deal id
pub const DEAL_UPLOADS_KEY: &str = "dealUploads";

/// Talent the caller's dashboards are about
pub(crate) async fn talent_identity(
    fixtures: &Fixtures,
    user: &SessionRecord,
    session: &CurrentSession,
) -> Result<TalentIdentity, ApiError> {
    let app_user = session.read_json::<AppUser>(APP_USER_KEY).await?;
    Ok(fixtures.identity_for(&user.email, app_user.as_ref()))
}
