use anyhow::Result;
use tempfile::TempDir;
use vendor_planner::domain::model::{NegotiationStatus, QualityTier, Service, ServiceSelection};
use vendor_planner::core::estimate::estimate;
use vendor_planner::{
    EstimateRequest, EstimationPipeline, LocalStorage, PlannerConfig, PlannerEngine, PlannerError,
};

fn config(dir: &TempDir) -> PlannerConfig {
    PlannerConfig {
        output_path: dir.path().to_string_lossy().into_owned(),
        ..PlannerConfig::default()
    }
}

fn request(services: &[&str], tier: &str, guests: i64, quote: Option<f64>) -> EstimateRequest {
    EstimateRequest {
        services: services.iter().map(|s| s.to_string()).collect(),
        tier: tier.to_string(),
        guests,
        quote,
    }
}

#[tokio::test]
async fn test_estimate_and_negotiate_end_to_end() -> Result<()> {
    let dir = TempDir::new()?;
    let pipeline = EstimationPipeline::new(
        LocalStorage::new("."),
        config(&dir),
        request(&["Venue", "Catering", "Photography"], "Basic", 150, Some(500_000.0)),
    )
    .with_export(true);

    let outcome = PlannerEngine::new(pipeline).run().await?;
    let report = outcome.output;

    // (700 + 1200) * 150 + 45000
    assert_eq!(report.estimate.total, 330_000.0);
    let negotiation = report.negotiation.expect("quote was given");
    assert_eq!(negotiation.status, NegotiationStatus::Reject);
    assert_eq!(negotiation.suggested_price, 412_500.0);

    let written = std::fs::read_to_string(dir.path().join("cost_breakdown.csv"))?;
    assert_eq!(written.lines().count(), 5);
    Ok(())
}

#[tokio::test]
async fn test_unknown_service_is_validation_error() -> Result<()> {
    let dir = TempDir::new()?;
    let pipeline = EstimationPipeline::new(
        LocalStorage::new("."),
        config(&dir),
        request(&["Venue", "Fireworks"], "Basic", 50, None),
    );

    let err = PlannerEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, PlannerError::ValidationError { .. }));
    assert_eq!(err.exit_code(), 2);
    Ok(())
}

#[test]
fn test_estimate_is_monotonic_for_fixed_service_set() -> Result<()> {
    let services = vec![Service::Venue, Service::Photography, Service::Security];
    let mut previous_tier_totals: Option<Vec<f64>> = None;

    for tier in QualityTier::ALL {
        let totals: Vec<f64> = (1..=300)
            .step_by(37)
            .map(|guests| ServiceSelection::new(services.clone(), tier, guests).map(|s| estimate(&s).total))
            .collect::<Result<Vec<_>, _>>()?;

        assert!(totals.windows(2).all(|w| w[0] <= w[1]));
        if let Some(previous) = &previous_tier_totals {
            assert!(previous.iter().zip(&totals).all(|(low, high)| low <= high));
        }
        previous_tier_totals = Some(totals);
    }
    Ok(())
}
