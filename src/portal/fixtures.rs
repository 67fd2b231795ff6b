// src/portal/fixtures.rs
//! Statically bundled sample data standing in for a real data source

use serde::Deserialize;

use super::models::*;

const BUNDLED: &str = include_str!("fixtures.json");

/// Talent shown to identities without an account binding
pub const DEFAULT_TALENT_ID: &str = "1";

#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    pub talents: Vec<Talent>,
    pub deals: Vec<Deal>,
    pub campaigns: Vec<Campaign>,
    pub analytics: AgencyAnalytics,
    pub monthly_earnings: Vec<MonthlyEarnings>,
    pub payouts: Vec<Payout>,
    pub collateral: Vec<Collateral>,
    pub deal_analytics: DealAnalytics,
    pub accounts: Vec<AccountBinding>,
    pub default_profile: ProfileBlob,
}

impl Fixtures {
    /// Parses the data compiled into the binary
    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUNDLED)
    }

    pub fn talent(&self, id: &str) -> Option<&Talent> {
        self.talents.iter().find(|t| t.id == id)
    }

    pub fn deal(&self, id: &str) -> Option<&Deal> {
        self.deals.iter().find(|d| d.id == id)
    }

    /// Talent id bound to a login identity, falling back to the default talent
    pub fn talent_id_for(&self, email: &str) -> &str {
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .map(|a| a.talent_id.as_str())
            .unwrap_or(DEFAULT_TALENT_ID)
    }

    /// Talent shown to `email`. An `id` or `name` stored in the client's
    /// `appUser` blob wins over the account binding.
    pub fn identity_for(&self, email: &str, app_user: Option<&AppUser>) -> TalentIdentity {
        let stored_id = app_user
            .and_then(|u| u.id.as_deref())
            .map(str::trim)
            .filter(|id| !id.is_empty());
        let talent_id = stored_id.unwrap_or_else(|| self.talent_id_for(email)).to_string();

        let name = app_user
            .and_then(|u| u.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| self.talent(&talent_id).map(|t| t.name.clone()));

        TalentIdentity { talent_id, name }
    }

    pub fn deals_of(&self, talent_id: &str) -> Vec<&Deal> {
        self.deals.iter().filter(|d| d.talent_id == talent_id).collect()
    }
}

/// Whose deals and earnings a signed-in user is looking at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalentIdentity {
    pub talent_id: String,
    pub name: Option<String>,
}
