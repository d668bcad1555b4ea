use crate::utils::error::{PlannerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the vendor CSV, validated at load time and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub event_type: String,
    pub city: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Per-query filter; build it with [`FilterCriteria::new`] so the budget is checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub event_type: String,
    pub city: String,
    pub max_budget: f64,
}

impl FilterCriteria {
    pub fn new(event_type: &str, city: &str, max_budget: f64) -> Result<Self> {
        crate::utils::validation::validate_non_empty_string("event_type", event_type)?;
        crate::utils::validation::validate_non_empty_string("city", city)?;
        crate::utils::validation::validate_positive_finite("budget", max_budget)?;

        Ok(Self {
            event_type: event_type.trim().to_string(),
            city: city.trim().to_string(),
            max_budget,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub rating: f64,
    pub location: f64,
    pub budget_fit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredVendor {
    pub vendor: Vendor,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub criteria: FilterCriteria,
    pub matched: usize,
    pub vendors: Vec<ScoredVendor>,
    pub generated_at: DateTime<Utc>,
}

impl Recommendation {
    /// Zero matches is reported to the user, never raised as an error.
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QualityTier {
    Basic,
    Premium,
    Luxe,
}

impl QualityTier {
    pub const ALL: [QualityTier; 3] = [QualityTier::Basic, QualityTier::Premium, QualityTier::Luxe];

    pub fn multiplier(self) -> f64 {
        match self {
            QualityTier::Basic => 1.0,
            QualityTier::Premium => 1.5,
            QualityTier::Luxe => 2.2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QualityTier::Basic => "Basic",
            QualityTier::Premium => "Premium",
            QualityTier::Luxe => "Luxe",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QualityTier {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(QualityTier::Basic),
            "premium" => Ok(QualityTier::Premium),
            "luxe" => Ok(QualityTier::Luxe),
            _ => Err(PlannerError::validation(
                "tier",
                s,
                "expected one of Basic, Premium, Luxe",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceUnit {
    PerGuest,
    Fixed,
}

impl fmt::Display for ServiceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceUnit::PerGuest => f.write_str("per_guest"),
            ServiceUnit::Fixed => f.write_str("fixed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Service {
    Venue,
    Catering,
    Decor,
    Photography,
    Entertainment,
    AvEquipment,
    Security,
    Transport,
}

impl Service {
    pub const ALL: [Service; 8] = [
        Service::Venue,
        Service::Catering,
        Service::Decor,
        Service::Photography,
        Service::Entertainment,
        Service::AvEquipment,
        Service::Security,
        Service::Transport,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Service::Venue => "Venue",
            Service::Catering => "Catering",
            Service::Decor => "Decor",
            Service::Photography => "Photography",
            Service::Entertainment => "Entertainment / DJ",
            Service::AvEquipment => "AV Equipment",
            Service::Security => "Security",
            Service::Transport => "Transport",
        }
    }

    /// Base price before the tier multiplier; per guest or per event depending on [`Service::unit`].
    pub fn base_price(self) -> f64 {
        match self {
            Service::Venue => 700.0,
            Service::Catering => 1200.0,
            Service::Decor => 300.0,
            Service::Photography => 45_000.0,
            Service::Entertainment => 35_000.0,
            Service::AvEquipment => 250.0,
            Service::Security => 90.0,
            Service::Transport => 150.0,
        }
    }

    pub fn unit(self) -> ServiceUnit {
        match self {
            Service::Photography | Service::Entertainment => ServiceUnit::Fixed,
            _ => ServiceUnit::PerGuest,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Service {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        if let Some(service) = Service::ALL
            .iter()
            .copied()
            .find(|service| service.name().to_lowercase() == key)
        {
            return Ok(service);
        }

        match key.as_str() {
            "entertainment" | "dj" => Ok(Service::Entertainment),
            "av" | "av_equipment" | "av-equipment" => Ok(Service::AvEquipment),
            _ => Err(PlannerError::validation(
                "services",
                s,
                format!(
                    "unknown service. Available: {}",
                    Service::ALL
                        .iter()
                        .map(|service| service.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            )),
        }
    }
}

/// Services the user picked, de-duplicated and kept in name order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSelection {
    pub services: Vec<Service>,
    pub tier: QualityTier,
    pub guests: u32,
}

impl ServiceSelection {
    pub fn new(services: Vec<Service>, tier: QualityTier, guests: i64) -> Result<Self> {
        if services.is_empty() {
            return Err(PlannerError::validation(
                "services",
                "",
                "choose at least one service to estimate cost",
            ));
        }

        let guests = u32::try_from(guests)
            .ok()
            .filter(|guests| *guests > 0)
            .ok_or_else(|| {
                PlannerError::validation("guests", guests, "must be a positive integer")
            })?;

        let mut services = services;
        services.sort_by(|a, b| a.name().cmp(b.name()));
        services.dedup();

        Ok(Self {
            services,
            tier,
            guests,
        })
    }

    /// Parses raw service and tier names as typed on the command line.
    pub fn parse(services: &[String], tier: &str, guests: i64) -> Result<Self> {
        let services = services
            .iter()
            .map(|name| name.parse::<Service>())
            .collect::<Result<Vec<_>>>()?;
        let tier = tier.parse::<QualityTier>()?;
        Self::new(services, tier, guests)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub service: Service,
    pub unit: ServiceUnit,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub tier: QualityTier,
    pub guests: u32,
    pub lines: Vec<CostLine>,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationStatus {
    Accept,
    Counter,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NegotiationResult {
    pub status: NegotiationStatus,
    pub estimate: f64,
    pub quote: f64,
    pub suggested_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimationReport {
    pub estimate: CostEstimate,
    pub negotiation: Option<NegotiationResult>,
    pub generated_at: DateTime<Utc>,
}
