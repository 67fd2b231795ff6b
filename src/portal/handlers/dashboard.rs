// src/portal/handlers/dashboard.rs

use axum::{extract::Extension, Json};
use std::sync::Arc;

use super::deals::deal_summary;
use super::payments::current_payment_method;
use super::talent_identity;
use crate::auth::{CurrentSession, SessionRecord};
use crate::common::{ApiError, AppState};
use crate::portal::fixtures::{Fixtures, TalentIdentity};
use crate::portal::metrics::{commission, growth_rate, talent_share};
use crate::portal::models::{
    AdminView, AnalyticsView, ChecklistItem, DashboardView, DealStatus, EarningsView,
    PaymentMethodView, PerformerSummary,
};

const RECENT_DEALS_LIMIT: usize = 6;

/// Extra accounts counted on the admin dashboard on top of the talent list
const NON_TALENT_USERS: usize = 50;

pub fn build_dashboard_view(fixtures: &Fixtures, identity: &TalentIdentity) -> DashboardView {
    let deals = fixtures.deals_of(&identity.talent_id);
    let greeting_name = identity
        .name
        .as_deref()
        .and_then(|name| name.split_whitespace().next())
        .unwrap_or("there")
        .to_string();

    let profile_checklist = vec![
        ChecklistItem { label: "Photos uploaded", done: true },
        ChecklistItem { label: "Bio completed", done: true },
        ChecklistItem { label: "Add portfolio items", done: false },
        ChecklistItem { label: "Link social accounts", done: false },
    ];

    DashboardView {
        greeting_name,
        total_earnings: deals
            .iter()
            .map(|d| talent_share(d.value, d.commission_rate))
            .sum(),
        active_deals: deals
            .iter()
            .filter(|d| matches!(d.status, DealStatus::Approved | DealStatus::Pending))
            .count(),
        recent_deals: deals
            .iter()
            .take(RECENT_DEALS_LIMIT)
            .map(|d| deal_summary(d))
            .collect(),
        profile_completion: 85,
        profile_checklist,
    }
}

pub fn build_earnings_view(
    fixtures: &Fixtures,
    identity: &TalentIdentity,
    payment_method: PaymentMethodView,
) -> EarningsView {
    let deals = fixtures.deals_of(&identity.talent_id);
    let completed: Vec<_> = deals
        .iter()
        .filter(|d| d.status == DealStatus::Completed)
        .collect();

    let growth = match fixtures.monthly_earnings.as_slice() {
        [.., previous, current] => growth_rate(current.earnings, previous.earnings),
        _ => 0.0,
    };

    EarningsView {
        total_earnings: completed
            .iter()
            .map(|d| talent_share(d.value, d.commission_rate))
            .sum(),
        total_commissions: completed
            .iter()
            .map(|d| commission(d.value, d.commission_rate))
            .sum(),
        pending_earnings: deals
            .iter()
            .filter(|d| d.status == DealStatus::Approved)
            .map(|d| talent_share(d.value, d.commission_rate))
            .sum(),
        monthly: fixtures.monthly_earnings.clone(),
        growth_rate: growth,
        payouts: fixtures.payouts.clone(),
        recent_payouts: completed.iter().map(|d| deal_summary(d)).collect(),
        payment_method,
    }
}

pub fn build_analytics_view(fixtures: &Fixtures) -> AnalyticsView {
    let analytics = &fixtures.analytics;

    let revenue_growth_rate = match analytics.monthly_growth.as_slice() {
        [.., previous, current] => growth_rate(current.revenue, previous.revenue),
        _ => 0.0,
    };

    AnalyticsView {
        total_talent: analytics.total_talent,
        active_deals: analytics.active_deals,
        total_revenue: analytics.total_revenue,
        avg_deal_value: analytics.avg_deal_value,
        top_performers: analytics
            .top_performers
            .iter()
            .map(|p| PerformerSummary {
                revenue_per_deal: if p.deals == 0 {
                    0.0
                } else {
                    p.revenue as f64 / p.deals as f64
                },
                performer: p.clone(),
            })
            .collect(),
        monthly_growth: analytics.monthly_growth.clone(),
        revenue_growth_rate,
    }
}

pub fn build_admin_view(fixtures: &Fixtures) -> AdminView {
    AdminView {
        total_users: fixtures.talents.len() + NON_TALENT_USERS,
        active_deals: fixtures
            .deals
            .iter()
            .filter(|d| matches!(d.status, DealStatus::Approved | DealStatus::Pending))
            .count(),
        campaigns: fixtures.campaigns.len(),
        total_revenue: fixtures.deals.iter().map(|d| d.value).sum(),
    }
}

/// GET /dashboard
pub async fn dashboard(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
) -> Result<Json<DashboardView>, ApiError> {
    let identity = talent_identity(&state.fixtures, &user, &session).await?;
    Ok(Json(build_dashboard_view(&state.fixtures, &identity)))
}

/// GET /earnings
pub async fn earnings(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    session: CurrentSession,
) -> Result<Json<EarningsView>, ApiError> {
    let identity = talent_identity(&state.fixtures, &user, &session).await?;
    let payment_method = current_payment_method(&session).await?;
    Ok(Json(build_earnings_view(&state.fixtures, &identity, payment_method)))
}

/// GET /analytics
pub async fn analytics(Extension(state): Extension<Arc<AppState>>) -> Json<AnalyticsView> {
    Json(build_analytics_view(&state.fixtures))
}

/// GET /admin
pub async fn admin(Extension(state): Extension<Arc<AppState>>) -> Json<AdminView> {
    Json(build_admin_view(&state.fixtures))
}
