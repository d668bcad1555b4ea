use clap::Parser;
use vendor_planner::app::pipelines::recommendation_pipeline::load_vendor_table;
use vendor_planner::app::render;
use vendor_planner::core::checklist::checklist;
use vendor_planner::core::{ConfigProvider, FilterCriteria, OutputFormat};
use vendor_planner::utils::logger;
use vendor_planner::{
    CliConfig, Command, EstimateRequest, EstimationPipeline, LocalStorage, PlannerConfig,
    PlannerEngine, PlannerError, RecommendationPipeline,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    let config = match PlannerConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    match config.output_format() {
        OutputFormat::Json => logger::init_json_logger(cli.verbose),
        OutputFormat::Table => logger::init_cli_logger(cli.verbose, config.log_level.as_deref()),
    }

    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(cli.command, config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(command: Command, config: PlannerConfig) -> Result<(), PlannerError> {
    let format = config.output_format();
    let storage = LocalStorage::new(".");

    match command {
        Command::Recommend {
            event_type,
            city,
            budget,
            export,
        } => {
            let criteria = FilterCriteria::new(&event_type, &city, budget)?;
            let pipeline = RecommendationPipeline::new(storage, config, criteria).with_export(export);
            let outcome = PlannerEngine::new(pipeline).run().await?;

            match format {
                OutputFormat::Json => println!("{}", render::to_json(&outcome.output)?),
                OutputFormat::Table => {
                    print!("{}", render::render_recommendation(&outcome.output));
                    if !outcome.output.is_empty() {
                        println!();
                        print!(
                            "{}",
                            render::render_checklist(&event_type, checklist(&event_type))
                        );
                    }
                }
            }
            if let Some(path) = outcome.export_path {
                println!("📁 Exported to: {}", path);
            }
        }

        Command::Estimate {
            services,
            guests,
            tier,
            quote,
            export,
        } => {
            let request = EstimateRequest {
                services,
                tier,
                guests,
                quote,
            };
            let pipeline = EstimationPipeline::new(storage, config, request).with_export(export);
            let outcome = PlannerEngine::new(pipeline).run().await?;

            match format {
                OutputFormat::Json => println!("{}", render::to_json(&outcome.output)?),
                OutputFormat::Table => print!("{}", render::render_estimate(&outcome.output)),
            }
            if let Some(path) = outcome.export_path {
                println!("📁 Exported to: {}", path);
            }
        }

        Command::Checklist { event_type } => {
            let milestones = checklist(&event_type);
            match format {
                OutputFormat::Json => println!("{}", render::to_json(&milestones)?),
                OutputFormat::Table => print!("{}", render::render_checklist(&event_type, milestones)),
            }
        }

        Command::Catalog => {
            let table = load_vendor_table(&storage, config.vendors_file()).await?;
            let catalog = render::CatalogView::new(&table);
            match format {
                OutputFormat::Json => println!("{}", render::to_json(&catalog)?),
                OutputFormat::Table => print!("{}", render::render_catalog(&catalog)),
            }
        }
    }

    Ok(())
}
