// src/portal/handlers/campaigns.rs

use axum::{
    extract::{Extension, Query},
    Json,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::common::AppState;
use crate::portal::fixtures::Fixtures;
use crate::portal::metrics::{campaign_progress, engagement_rate};
use crate::portal::models::{CampaignStatus, CampaignSummary, CampaignsView, SearchQuery};

/// Campaigns matching `q` (name or brand), with progress as of `today`.
/// Totals cover the filtered list only.
pub fn build_campaigns_view(fixtures: &Fixtures, query: &SearchQuery, today: NaiveDate) -> CampaignsView {
    let needle = query.q.as_deref().unwrap_or("").trim().to_lowercase();

    let campaigns: Vec<CampaignSummary> = fixtures
        .campaigns
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.brand_name.to_lowercase().contains(&needle)
        })
        .map(|c| CampaignSummary {
            progress: campaign_progress(c.start_date, c.end_date, today),
            engagement_rate: engagement_rate(c.engagement, c.reach),
            campaign: c.clone(),
        })
        .collect();

    CampaignsView {
        total_budget: campaigns.iter().map(|c| c.campaign.budget).sum(),
        active_campaigns: campaigns
            .iter()
            .filter(|c| c.campaign.status == CampaignStatus::Active)
            .count(),
        total_reach: campaigns.iter().map(|c| c.campaign.reach).sum(),
        campaigns,
    }
}

/// GET /campaigns
pub async fn list_campaigns(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<CampaignsView> {
    let today = Utc::now().date_naive();
    Json(build_campaigns_view(&state.fixtures, &query, today))
}
