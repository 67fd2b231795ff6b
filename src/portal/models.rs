// src/portal/models.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Fixture Records
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub instagram: u64,
    pub tiktok: u64,
    pub twitter: u64,
}

impl Followers {
    pub fn total(&self) -> u64 {
        self.instagram + self.tiktok + self.twitter
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talent {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub sport: String,
    pub university: String,
    pub year: String,
    pub position: String,
    pub followers: Followers,
    pub nil_value: u64,
    pub location: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub achievements: Vec<String>,
    pub available_rights: Vec<String>,
    pub endorsement_rate: u64,
    pub response_time: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    Pending,
    Approved,
    Completed,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub talent_id: String,
    pub brand_name: String,
    pub deal_type: String,
    pub image: String,
    pub value: u64,
    pub status: DealStatus,
    pub date: NaiveDate,
    pub description: String,
    pub commission_rate: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Completed,
    Draft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub brand_name: String,
    pub budget: u64,
    pub talent: Vec<String>,
    pub status: CampaignStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reach: u64,
    pub engagement: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPerformer {
    pub name: String,
    pub deals: u32,
    pub revenue: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyGrowth {
    pub month: String,
    pub deals: u32,
    pub revenue: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyAnalytics {
    pub total_talent: u32,
    pub active_deals: u32,
    pub total_revenue: u64,
    pub avg_deal_value: u64,
    pub top_performers: Vec<TopPerformer>,
    pub monthly_growth: Vec<MonthlyGrowth>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyEarnings {
    pub month: String,
    pub earnings: u64,
    pub deals: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub brand: String,
    pub amount: u64,
    pub date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collateral {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
    pub views: u64,
    pub saves: u64,
}

impl Engagement {
    /// Interactions excluding plain views
    pub fn interactions(&self) -> u64 {
        self.likes + self.shares + self.comments + self.saves
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reach {
    pub impressions: u64,
    pub unique_users: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversions {
    pub clicks: u64,
    pub sales: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub views: u64,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealAnalytics {
    pub engagement: Engagement,
    pub reach: Reach,
    pub conversions: Conversions,
    pub historical_data: Vec<HistoricalPoint>,
    pub trend_indicator: String,
    pub benchmark_comparison: f64,
}

/// Binds a login identity to a talent record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBinding {
    pub email: String,
    pub talent_id: String,
}

/// Editable profile blob kept under the `appUser` slot key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileBlob {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    #[serde(default)]
    pub allow_ai_likeness: bool,
    /// Talent record the dashboards should show
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name used for the dashboard greeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The part of the `appUser` blob the dashboards read. Parsed on its own so
/// a blob carrying only `{id, name}` still counts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppUser {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadKind {
    Image,
    Video,
    Document,
}

/// Content a user attached to a deal, kept per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    #[serde(rename = "type")]
    pub kind: UploadKind,
    pub name: String,
}

/// Payout account as shown back to the user; the full numbers are never kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodView {
    pub bank_name: String,
    pub masked_account: String,
}

impl Default for PaymentMethodView {
    fn default() -> Self {
        Self {
            bank_name: "Bank Account".to_string(),
            masked_account: "•••• 1234".to_string(),
        }
    }
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct DiscoverQuery {
    pub q: Option<String>,
    pub sport: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RejectDealRequest {
    pub reason: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaymentMethodRequest {
    pub bank_name: String,
    pub account_number: String,
    pub routing_number: String,
}

// ============================================================================
// View Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ChecklistItem {
    pub label: &'static str,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub greeting_name: String,
    pub total_earnings: f64,
    pub active_deals: usize,
    pub recent_deals: Vec<DealSummary>,
    pub profile_completion: u8,
    pub profile_checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Serialize)]
pub struct TalentCard {
    #[serde(flatten)]
    pub talent: Talent,
    pub followers_display: FollowersDisplay,
    pub total_followers: u64,
}

#[derive(Debug, Serialize)]
pub struct FollowersDisplay {
    pub instagram: String,
    pub tiktok: String,
    pub twitter: String,
    pub total: String,
}

#[derive(Debug, Serialize)]
pub struct DiscoverView {
    pub results: Vec<TalentCard>,
    pub count: usize,
    pub sports: Vec<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DealSummary {
    #[serde(flatten)]
    pub deal: Deal,
    pub talent_earnings: f64,
    pub commission: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub approved: usize,
    pub completed: usize,
    pub rejected: usize,
}

#[derive(Debug, Serialize)]
pub struct DealsView {
    pub deals: Vec<DealSummary>,
    pub counts: StatusCounts,
    pub completed_earnings: f64,
}

#[derive(Debug, Serialize)]
pub struct DealDetailView {
    #[serde(flatten)]
    pub summary: DealSummary,
    pub collateral: Vec<Collateral>,
    pub analytics: DealAnalytics,
    pub engagement_rate: f64,
    pub live_views: u64,
    pub uploads: Vec<UploadedFile>,
}

#[derive(Debug, Serialize)]
pub struct CampaignSummary {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub progress: u8,
    pub engagement_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct CampaignsView {
    pub campaigns: Vec<CampaignSummary>,
    pub total_budget: u64,
    pub active_campaigns: usize,
    pub total_reach: u64,
}

#[derive(Debug, Serialize)]
pub struct EarningsView {
    pub total_earnings: f64,
    pub total_commissions: f64,
    pub pending_earnings: f64,
    pub monthly: Vec<MonthlyEarnings>,
    pub growth_rate: f64,
    pub payouts: Vec<Payout>,
    pub recent_payouts: Vec<DealSummary>,
    pub payment_method: PaymentMethodView,
}

#[derive(Debug, Serialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub sport: String,
    pub university: String,
    pub nil_value: u64,
    pub verified: bool,
}

#[derive(Debug, Serialize)]
pub struct RosterView {
    pub talent: Vec<RosterEntry>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct PerformerSummary {
    #[serde(flatten)]
    pub performer: TopPerformer,
    pub revenue_per_deal: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsView {
    pub total_talent: u32,
    pub active_deals: u32,
    pub total_revenue: u64,
    pub avg_deal_value: u64,
    pub top_performers: Vec<PerformerSummary>,
    pub monthly_growth: Vec<MonthlyGrowth>,
    pub revenue_growth_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct AdminView {
    pub total_users: usize,
    pub active_deals: usize,
    pub campaigns: usize,
    pub total_revenue: u64,
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub role: crate::auth::Role,
    pub verified: bool,
    #[serde(flatten)]
    pub profile: ProfileBlob,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct NavView {
    pub home: &'static str,
    pub display_name: String,
    pub role_label: String,
    pub items: Vec<NavItem>,
}
