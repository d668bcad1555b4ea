use crate::domain::model::{CostEstimate, ScoredVendor};
use crate::utils::error::{PlannerError, Result};
use serde::Serialize;

pub const RECOMMENDATIONS_FILE: &str = "recommendations.csv";
pub const COST_BREAKDOWN_FILE: &str = "cost_breakdown.csv";

/// Same columns as the input file, in the same order.
#[derive(Serialize)]
struct VendorRow<'a> {
    name: &'a str,
    event_type: &'a str,
    city: &'a str,
    price: f64,
    rating: f64,
}

#[derive(Serialize)]
struct CostRow<'a> {
    service: &'a str,
    unit: String,
    cost: f64,
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| PlannerError::IoError(e.into_error()))
}

pub fn recommendations_csv(vendors: &[ScoredVendor]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if vendors.is_empty() {
        writer.write_record(crate::core::vendor_store::REQUIRED_COLUMNS)?;
    }

    for scored in vendors {
        let vendor = &scored.vendor;
        writer.serialize(VendorRow {
            name: &vendor.name,
            event_type: &vendor.event_type,
            city: &vendor.city,
            price: vendor.price,
            rating: vendor.rating,
        })?;
    }

    finish(writer)
}

pub fn cost_breakdown_csv(estimate: &CostEstimate) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for line in &estimate.lines {
        writer.serialize(CostRow {
            service: line.service.name(),
            unit: line.unit.to_string(),
            cost: line.cost,
        })?;
    }
    let total = estimate.total.to_string();
    writer.write_record(["Total", "", total.as_str()])?;

    finish(writer)
}
