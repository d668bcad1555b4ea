use crate::core::vendor_store::{VendorTable, MAX_RATING};
use crate::domain::model::{FilterCriteria, Recommendation, ScoreBreakdown, ScoredVendor, Vendor};
use std::cmp::Ordering;

pub const TOP_N: usize = 3;

// Rating dominates, then location, then how far under budget the price sits.
pub const RATING_WEIGHT: f64 = 0.80;
pub const LOCATION_WEIGHT: f64 = 0.12;
pub const BUDGET_FIT_WEIGHT: f64 = 0.08;

fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

pub fn matches(vendor: &Vendor, criteria: &FilterCriteria) -> bool {
    same_text(&vendor.event_type, &criteria.event_type)
        && same_text(&vendor.city, &criteria.city)
        && vendor.price <= criteria.max_budget
}

pub fn score(vendor: &Vendor, criteria: &FilterCriteria) -> ScoredVendor {
    let breakdown = ScoreBreakdown {
        rating: (vendor.rating / MAX_RATING).clamp(0.0, 1.0),
        location: if same_text(&vendor.city, &criteria.city) {
            1.0
        } else {
            0.0
        },
        budget_fit: (1.0 - vendor.price / criteria.max_budget).clamp(0.0, 1.0),
    };

    let score = RATING_WEIGHT * breakdown.rating
        + LOCATION_WEIGHT * breakdown.location
        + BUDGET_FIT_WEIGHT * breakdown.budget_fit;

    debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");

    ScoredVendor {
        vendor: vendor.clone(),
        score,
        breakdown,
    }
}

/// Score desc, rating desc, price asc, then name so the order is total.
pub fn rank_order(a: &ScoredVendor, b: &ScoredVendor) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.vendor.rating.total_cmp(&a.vendor.rating))
        .then_with(|| a.vendor.price.total_cmp(&b.vendor.price))
        .then_with(|| a.vendor.name.cmp(&b.vendor.name))
}

/// All matching vendors, ranked.
pub fn rank(table: &VendorTable, criteria: &FilterCriteria) -> Vec<ScoredVendor> {
    let mut ranked: Vec<ScoredVendor> = table
        .vendors()
        .iter()
        .filter(|vendor| matches(vendor, criteria))
        .map(|vendor| score(vendor, criteria))
        .collect();
    ranked.sort_by(rank_order);
    ranked
}

pub fn recommend(table: &VendorTable, criteria: &FilterCriteria) -> Recommendation {
    let mut ranked = rank(table, criteria);
    let matched = ranked.len();
    ranked.truncate(TOP_N);

    tracing::debug!(
        "{} of {} vendors matched {:?}; keeping {}",
        matched,
        table.len(),
        criteria,
        ranked.len()
    );

    Recommendation {
        criteria: criteria.clone(),
        matched,
        vendors: ranked,
        generated_at: chrono::Utc::now(),
    }
}
