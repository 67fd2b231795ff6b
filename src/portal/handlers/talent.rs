// src/portal/handlers/talent.rs

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::auth::gate::default_route;
use crate::auth::SessionRecord;
use crate::common::{ApiError, AppState};
use crate::portal::fixtures::Fixtures;
use crate::portal::metrics::format_count;
use crate::portal::models::{
    DiscoverQuery, DiscoverView, FollowersDisplay, RosterEntry, RosterView, Talent, TalentCard,
};

fn talent_card(talent: &Talent) -> TalentCard {
    let total = talent.followers.total();
    TalentCard {
        talent: talent.clone(),
        followers_display: FollowersDisplay {
            instagram: format_count(talent.followers.instagram),
            tiktok: format_count(talent.followers.tiktok),
            twitter: format_count(talent.followers.twitter),
            total: format_count(total),
        },
        total_followers: total,
    }
}

fn is_all(filter: &Option<String>) -> bool {
    match filter.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(value) => value.eq_ignore_ascii_case("all"),
    }
}

/// Filters talent by free text, sport and location
pub fn build_discover_view(fixtures: &Fixtures, query: &DiscoverQuery) -> DiscoverView {
    let needle = query.q.as_deref().unwrap_or("").trim().to_lowercase();

    let results: Vec<TalentCard> = fixtures
        .talents
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.name.to_lowercase().contains(&needle)
                || t.sport.to_lowercase().contains(&needle)
                || t.university.to_lowercase().contains(&needle)
        })
        .filter(|t| {
            is_all(&query.sport)
                || query
                    .sport
                    .as_deref()
                    .is_some_and(|s| t.sport.eq_ignore_ascii_case(s.trim()))
        })
        .filter(|t| {
            is_all(&query.location)
                || query
                    .location
                    .as_deref()
                    .is_some_and(|l| t.location.contains(l.trim()))
        })
        .map(talent_card)
        .collect();

    let mut sports: Vec<String> = Vec::new();
    let mut locations: Vec<String> = Vec::new();
    for talent in &fixtures.talents {
        if !sports.contains(&talent.sport) {
            sports.push(talent.sport.clone());
        }
        if let Some(state) = talent.location.split(", ").nth(1) {
            if !state.is_empty() && !locations.iter().any(|l| l == state) {
                locations.push(state.to_string());
            }
        }
    }

    DiscoverView {
        count: results.len(),
        results,
        sports,
        locations,
    }
}

/// GET /discover
pub async fn discover(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<DiscoverQuery>,
) -> Json<DiscoverView> {
    let view = build_discover_view(&state.fixtures, &query);
    debug!(query = ?query, matches = view.count, "Discover search");
    Json(view)
}

/// GET /talent/:id
pub async fn talent_profile(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<SessionRecord>,
    Path(id): Path<String>,
) -> Result<Json<TalentCard>, ApiError> {
    match state.fixtures.talent(&id) {
        Some(talent) => Ok(Json(talent_card(talent))),
        None => {
            warn!(talent_id = %id, "Talent profile not found");
            Err(ApiError::NotFound(
                format!("Talent profile {} not found", id),
                default_route(user.role),
            ))
        }
    }
}

/// GET /roster
pub async fn roster(Extension(state): Extension<Arc<AppState>>) -> Json<RosterView> {
    let talent: Vec<RosterEntry> = state
        .fixtures
        .talents
        .iter()
        .map(|t| RosterEntry {
            id: t.id.clone(),
            name: t.name.clone(),
            sport: t.sport.clone(),
            university: t.university.clone(),
            nil_value: t.nil_value,
            verified: t.verified,
        })
        .collect();

    Json(RosterView {
        count: talent.len(),
        talent,
    })
}
