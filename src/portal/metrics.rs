// src/portal/metrics.rs
//! Derived figures shown across the dashboards

use chrono::NaiveDate;

/// Talent's cut of a deal after the agency commission
pub fn talent_share(value: u64, commission_rate: u32) -> f64 {
    value as f64 * (100.0 - commission_rate as f64) / 100.0
}

/// Agency commission on a deal
pub fn commission(value: u64, commission_rate: u32) -> f64 {
    value as f64 * commission_rate as f64 / 100.0
}

/// Percentage of a campaign's run that has elapsed on `today`
pub fn campaign_progress(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> u8 {
    if today < start {
        return 0;
    }
    if today > end {
        return 100;
    }

    let total = (end - start).num_days();
    if total <= 0 {
        return 100;
    }
    let elapsed = (today - start).num_days();
    ((elapsed as f64 / total as f64) * 100.0).round() as u8
}

/// `part / whole` as a percentage rounded to one decimal, 0 when `whole` is 0
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0)
}

/// Engagement as a share of reach
pub fn engagement_rate(engagement: u64, reach: u64) -> f64 {
    percentage(engagement, reach)
}

/// Change from `previous` to `current` in percent, one decimal
pub fn growth_rate(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    round1((current as f64 - previous as f64) / previous as f64 * 100.0)
}

/// Compact follower count: `1.2M`, `125.0K`, or the raw number
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
