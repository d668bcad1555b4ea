use crate::domain::model::{CostEstimate, CostLine, Service, ServiceSelection, ServiceUnit};

/// Per-guest services scale with the head count; fixed services are charged once.
pub fn guest_factor(unit: ServiceUnit, guests: u32) -> f64 {
    match unit {
        ServiceUnit::PerGuest => f64::from(guests),
        ServiceUnit::Fixed => 1.0,
    }
}

pub fn line_cost(service: Service, selection: &ServiceSelection) -> f64 {
    service.base_price() * selection.tier.multiplier() * guest_factor(service.unit(), selection.guests)
}

pub fn estimate(selection: &ServiceSelection) -> CostEstimate {
    let lines: Vec<CostLine> = selection
        .services
        .iter()
        .map(|&service| CostLine {
            service,
            unit: service.unit(),
            cost: line_cost(service, selection),
        })
        .collect();

    let total = lines.iter().map(|line| line.cost).sum();

    tracing::debug!(
        "Estimated {} service(s) for {} guests at {} tier: {:.2}",
        lines.len(),
        selection.guests,
        selection.tier,
        total
    );

    CostEstimate {
        tier: selection.tier,
        guests: selection.guests,
        lines,
        total,
    }
}
