use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;
use vendor_planner::core::FilterCriteria;
use vendor_planner::{
    LocalStorage, PlannerConfig, PlannerEngine, PlannerError, RecommendationPipeline, VendorTable,
};

const VENDORS: &str = "\
name,event_type,city,price,rating,contact
Golden Bells,wedding,NYC,5000,4.5,bells@example.com
Budget Vows,wedding,NYC,3000,4.0,
Sunset Hall,wedding,LA,2000,5.0,
Party Pals,birthday,NYC,800,4.8,
Grand Union,Wedding,nyc,5900,4.9,union@example.com
Skyline Weddings,wedding,NYC,7000,5.0,
";

fn setup(csv: &str) -> Result<(TempDir, PlannerConfig)> {
    let dir = TempDir::new()?;
    let vendors = dir.path().join("vendor_data.csv");
    std::fs::write(&vendors, csv)?;

    let config = PlannerConfig {
        vendors_file: vendors.to_string_lossy().into_owned(),
        output_path: dir.path().join("exports").to_string_lossy().into_owned(),
        ..PlannerConfig::default()
    };
    Ok((dir, config))
}

#[tokio::test]
async fn test_end_to_end_recommendation_with_export() -> Result<()> {
    let (dir, config) = setup(VENDORS)?;
    let criteria = FilterCriteria::new("wedding", "NYC", 6000.0)?;

    let pipeline =
        RecommendationPipeline::new(LocalStorage::new("."), config, criteria).with_export(true);
    let outcome = PlannerEngine::new(pipeline).run().await?;

    let names: Vec<&str> = outcome
        .output
        .vendors
        .iter()
        .map(|v| v.vendor.name.as_str())
        .collect();
    assert_eq!(names, vec!["Grand Union", "Golden Bells", "Budget Vows"]);
    assert_eq!(outcome.output.matched, 3);

    let export_path = outcome.export_path.expect("export path");
    assert!(export_path.ends_with("recommendations.csv"));

    let exported = dir.path().join("exports").join("recommendations.csv");
    assert!(Path::new(&exported).exists());

    let reloaded = VendorTable::load(&exported)?;
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.vendors()[0].name, "Grand Union");
    assert_eq!(reloaded.vendors()[0].contact, None);

    Ok(())
}

#[tokio::test]
async fn test_no_matches_is_not_an_error() -> Result<()> {
    let (_dir, config) = setup(VENDORS)?;
    let criteria = FilterCriteria::new("conference", "NYC", 100_000.0)?;

    let pipeline = RecommendationPipeline::new(LocalStorage::new("."), config, criteria);
    let outcome = PlannerEngine::new(pipeline).run().await?;

    assert!(outcome.output.is_empty());
    assert!(outcome.export_path.is_none());
    Ok(())
}

#[tokio::test]
async fn test_malformed_csv_fails_with_load_error() -> Result<()> {
    let (_dir, config) = setup("name,event_type,city,price,rating\nA,wedding,NYC,lots,4\n")?;
    let criteria = FilterCriteria::new("wedding", "NYC", 6000.0)?;

    let pipeline = RecommendationPipeline::new(LocalStorage::new("."), config, criteria);
    let err = PlannerEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, PlannerError::LoadError { .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[tokio::test]
async fn test_missing_vendor_file_fails_with_load_error() -> Result<()> {
    let dir = TempDir::new()?;
    let config = PlannerConfig {
        vendors_file: dir.path().join("nope.csv").to_string_lossy().into_owned(),
        ..PlannerConfig::default()
    };
    let criteria = FilterCriteria::new("wedding", "NYC", 6000.0)?;

    let pipeline = RecommendationPipeline::new(LocalStorage::new("."), config, criteria);
    let err = PlannerEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, PlannerError::LoadError { .. }));
    Ok(())
}
