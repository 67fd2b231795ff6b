// src/portal/handlers/deals.rs

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::{talent_identity, DEAL_UPLOADS_KEY};
use crate::auth::gate::default_route;
use crate::auth::{CurrentSession, SessionRecord};
use crate::common::{safe_email_log, ApiError, AppState, ValidationResult};
use crate::portal::fixtures::{Fixtures, TalentIdentity};
use crate::portal::metrics::{commission, percentage, talent_share};
use crate::portal::models::{
    Deal, DealDetailView, DealStatus, DealSummary, DealsView, RejectDealRequest, SearchQuery,
    StatusCounts, UploadedFile,
};

pub fn deal_summary(deal: &Deal) -> DealSummary {
    DealSummary {
        deal: deal.clone(),
        talent_earnings: talent_share(deal.value, deal.commission_rate),
        commission: commission(deal.value, deal.commission_rate),
    }
}

/// The signed-in user's deals, narrowed by brand name or deal type
pub fn build_deals_view(fixtures: &Fixtures, identity: &TalentIdentity, query: &SearchQuery) -> DealsView {
    let needle = query.q.as_deref().unwrap_or("").trim().to_lowercase();

    let deals: Vec<&Deal> = fixtures
        .deals_of(&identity.talent_id)
        .into_iter()
        .filter(|d| {
            needle.is_empty()
                || d.brand_name.to_lowercase().contains(&needle)
                || d.deal_type.to_lowercase().contains(&needle)
        })
        .collect();

    let mut counts = StatusCounts {
        all: deals.len(),
        ..StatusCounts::default()
    };
    for deal in &deals {
        match deal.status {
            DealStatus::Pending => counts.pending += 1,
            DealStatus::Approved => counts.approved += 1,
            DealStatus::Completed => counts.completed += 1,
            DealStatus::Rejected => counts.rejected += 1,
        }
    }

    let completed_earnings: f64 = deals
        .iter()
        .filter(|d| d.status == DealStatus::Completed)
        .map(|d| talent_share(d.value, d.commission_rate))
        .sum();

    DealsView {
        deals: deals.into_iter().map(deal_summary).collect(),
        counts,
        completed_earnings,
    }
}

pub fn build_deal_detail(state: &AppState, deal: Deal, uploads: Vec<UploadedFile>) -> DealDetailView {
    let analytics = state.fixtures.deal_analytics.clone();
    let engagement_rate = percentage(
        analytics.engagement.interactions(),
        analytics.engagement.views,
    );
    let live_views = state
        .live_views
        .current(&deal.id)
        .unwrap_or(analytics.engagement.views);

    DealDetailView {
        summary: deal_summary(&deal),
        collateral: state.fixtures.collateral.clone(),
        analytics,
        engagement_rate,
        live_views,
        uploads,
    }
}

/// Uploaded content per deal id
type DealUploads = HashMap<String, Vec<UploadedFile>>;

async fn read_uploads(session: &CurrentSession) -> Result<DealUploads, ApiError> {
    Ok(session
        .read_json::<DealUploads>(DEAL_UPLOADS_KEY)
        .await?
        .unwrap_or_default())
}

async fn uploads_for(session: &CurrentSession, deal_id: &str) -> Result<Vec<UploadedFile>, ApiError> {
    Ok(read_uploads(session).await?.remove(deal_id).unwrap_or_default())
}

fn find_deal(state: &AppState, user: &SessionRecord, id: &str) -> Result<Deal, ApiError> {
    state.fixtures.deal(id).cloned().ok_or_else(|| {
        warn!(deal_id = %id, "Deal not found");
        ApiError::NotFound(format!("Deal {} not found", id), default_route(user.role))
    })
}

fn ensure_pending(deal: &Deal) -> Result<(), ApiError> {
    if deal.status == DealStatus::Pending {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "Deal {} is no longer pending",
            deal.id
        )))
    }
}

/// GET /deals
pub async fn list_deals(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
    Query(query): Query<SearchQuery>,
) -> Result<Json<DealsView>, ApiError> {
    let identity = talent_identity(&state.fixtures, &user, &session).await?;
    Ok(Json(build_deals_view(&state.fixtures, &identity, &query)))
}

/// GET /deals/:id
pub async fn deal_detail(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
    Path(id): Path<String>,
) -> Result<Json<DealDetailView>, ApiError> {
    let deal = find_deal(&state, &user, &id)?;
    let uploads = uploads_for(&session, &deal.id).await?;
    Ok(Json(build_deal_detail(&state, deal, uploads)))
}

/// POST /deals/:id/accept
/// Returns the deal as approved. Fixture data is not modified.
pub async fn accept_deal(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
    Path(id): Path<String>,
) -> Result<Json<DealDetailView>, ApiError> {
    let mut deal = find_deal(&state, &user, &id)?;
    ensure_pending(&deal)?;

    deal.status = DealStatus::Approved;
    info!(
        deal_id = %deal.id,
        brand = %deal.brand_name,
        email = %safe_email_log(&user.email),
        "Deal accepted"
    );

    let uploads = uploads_for(&session, &deal.id).await?;
    Ok(Json(build_deal_detail(&state, deal, uploads)))
}

/// POST /deals/:id/reject
/// Returns the deal as rejected with the given reason. Fixture data is not
/// modified.
pub async fn reject_deal(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
    Path(id): Path<String>,
    Json(payload): Json<RejectDealRequest>,
) -> Result<Json<DealDetailView>, ApiError> {
    let mut deal = find_deal(&state, &user, &id)?;
    ensure_pending(&deal)?;

    let reason = payload.reason.trim();
    if reason.is_empty() {
        return Err(ApiError::ValidationError(
            "reason: A rejection reason is required".to_string(),
        ));
    }

    deal.status = DealStatus::Rejected;
    deal.reject_reason = Some(reason.to_string());
    info!(
        deal_id = %deal.id,
        brand = %deal.brand_name,
        email = %safe_email_log(&user.email),
        "Deal rejected"
    );

    let uploads = uploads_for(&session, &deal.id).await?;
    Ok(Json(build_deal_detail(&state, deal, uploads)))
}

/// POST /deals/:id/uploads
/// Adds a deliverable to the deal's uploaded content for this session
///
/// # Request Body
/// ```json
/// { "type": "Image", "name": "launch-post.png" }
/// ```
pub async fn add_upload(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
    Path(id): Path<String>,
    Json(payload): Json<UploadedFile>,
) -> Result<Json<DealDetailView>, ApiError> {
    let deal = find_deal(&state, &user, &id)?;

    let mut validation = ValidationResult::new();
    validation.require("name", &payload.name, "File name");
    validation.into_result()?;

    let mut all = read_uploads(&session).await?;
    let uploads = all.entry(deal.id.clone()).or_default();
    uploads.push(UploadedFile {
        kind: payload.kind,
        name: payload.name.trim().to_string(),
    });
    let uploads = uploads.clone();
    session.write_json(DEAL_UPLOADS_KEY, &all).await?;

    info!(
        deal_id = %deal.id,
        kind = ?payload.kind,
        count = uploads.len(),
        "Deal content uploaded"
    );

    Ok(Json(build_deal_detail(&state, deal, uploads)))
}

/// DELETE /deals/:id/uploads/:index
pub async fn remove_upload(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<DealDetailView>, ApiError> {
    let deal = find_deal(&state, &user, &id)?;

    let mut all = read_uploads(&session).await?;
    let uploads = all.entry(deal.id.clone()).or_default();
    if index >= uploads.len() {
        return Err(ApiError::NotFound(
            format!("Deal {} has no upload {}", deal.id, index),
            default_route(user.role),
        ));
    }
    uploads.remove(index);
    let uploads = uploads.clone();
    session.write_json(DEAL_UPLOADS_KEY, &all).await?;

    Ok(Json(build_deal_detail(&state, deal, uploads)))
}
