use crate::core::checklist::Milestone;
use crate::core::vendor_store::VendorTable;
use crate::domain::model::{
    EstimationReport, NegotiationResult, NegotiationStatus, QualityTier, Recommendation, Service,
};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write;

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Whole units with thousands separators, e.g. `12500.4` -> `12,500`.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn render_recommendation(result: &Recommendation) -> String {
    let criteria = &result.criteria;
    let mut out = String::new();

    if result.is_empty() {
        let _ = writeln!(
            out,
            "⚠️  No vendors fit those filters. Try raising the budget or choosing another city."
        );
        return out;
    }

    let _ = writeln!(
        out,
        "🏆 Top {} vendors for a {} in {} ({} budget, {} matched)",
        result.vendors.len(),
        criteria.event_type,
        criteria.city,
        format_amount(criteria.max_budget),
        result.matched
    );
    let _ = writeln!(
        out,
        "{:<3} {:<28} {:<14} {:>6} {:>12} {:>7}  {}",
        "#", "Vendor", "City", "Rating", "Price", "Score", "Contact"
    );
    for (rank, scored) in result.vendors.iter().enumerate() {
        let vendor = &scored.vendor;
        let _ = writeln!(
            out,
            "{:<3} {:<28} {:<14} {:>6.1} {:>12} {:>7.3}  {}",
            rank + 1,
            vendor.name,
            vendor.city,
            vendor.rating,
            format_amount(vendor.price),
            scored.score,
            vendor.contact.as_deref().unwrap_or("-")
        );
    }
    out
}

fn verdict(result: &NegotiationResult) -> String {
    match result.status {
        NegotiationStatus::Accept => "👍 The quote is reasonable. Accept it.".to_string(),
        NegotiationStatus::Counter => format!(
            "🤝 Fair but can be better. Counter at {} (splits the difference).",
            format_amount(result.suggested_price)
        ),
        NegotiationStatus::Reject => format!(
            "🧐 Quote is steep! Start with a firm counter of {}. Be ready to walk away.",
            format_amount(result.suggested_price)
        ),
    }
}

pub fn render_estimate(report: &EstimationReport) -> String {
    let estimate = &report.estimate;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "💰 Estimated total cost: {} (Tier: {}, Guests: {})",
        format_amount(estimate.total),
        estimate.tier,
        estimate.guests
    );
    let _ = writeln!(out, "{:<20} {:<10} {:>14}", "Service", "Unit", "Cost");
    for line in &estimate.lines {
        let _ = writeln!(
            out,
            "{:<20} {:<10} {:>14}",
            line.service.name(),
            line.unit.to_string(),
            format_amount(line.cost)
        );
    }

    if let Some(negotiation) = &report.negotiation {
        let _ = writeln!(out);
        let _ = writeln!(out, "Vendor quote: {}", format_amount(negotiation.quote));
        let _ = writeln!(out, "{}", verdict(negotiation));
    }
    out
}

pub fn render_checklist(event_type: &str, milestones: &[Milestone]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🗓️  Checklist for {}", event_type);
    for milestone in milestones {
        let _ = writeln!(out, "  {:<8} {}", milestone.when, milestone.task);
    }
    out
}

#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub event_types: Vec<String>,
    pub cities: Vec<String>,
    pub services: Vec<ServiceView>,
    pub tiers: Vec<TierView>,
}

#[derive(Debug, Serialize)]
pub struct ServiceView {
    pub name: &'static str,
    pub unit: String,
    pub base_price: f64,
}

#[derive(Debug, Serialize)]
pub struct TierView {
    pub name: &'static str,
    pub multiplier: f64,
}

impl CatalogView {
    pub fn new(table: &VendorTable) -> Self {
        Self {
            event_types: table.event_types(),
            cities: table.cities(),
            services: Service::ALL
                .iter()
                .map(|service| ServiceView {
                    name: service.name(),
                    unit: service.unit().to_string(),
                    base_price: service.base_price(),
                })
                .collect(),
            tiers: QualityTier::ALL
                .iter()
                .map(|tier| TierView {
                    name: tier.name(),
                    multiplier: tier.multiplier(),
                })
                .collect(),
        }
    }
}

pub fn render_catalog(catalog: &CatalogView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📋 Event types: {}", catalog.event_types.join(", "));
    let _ = writeln!(out, "📍 Cities: {}", catalog.cities.join(", "));
    let _ = writeln!(out, "🛠️  Services:");
    for service in &catalog.services {
        let _ = writeln!(
            out,
            "  {:<20} {:>8} {}",
            service.name,
            format_amount(service.base_price),
            service.unit
        );
    }
    let _ = writeln!(out, "⭐ Tiers:");
    for tier in &catalog.tiers {
        let _ = writeln!(out, "  {:<8} x{}", tier.name, tier.multiplier);
    }
    out
}
