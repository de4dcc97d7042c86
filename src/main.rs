use catalog_etl::utils::{logger, validation::Validate};
use catalog_etl::{CatalogPipeline, CliConfig, LocalStorage, ScrapeEngine, SeedList};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting catalog-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    let seeds = match &config.seed_file {
        Some(path) => {
            tracing::info!("Loading institution seed list from {}", path);
            SeedList::from_file(path)?
        }
        None => SeedList::embedded(),
    };

    if let Err(e) = seeds.validate() {
        tracing::error!("❌ Seed list validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = CatalogPipeline::new(storage, config, seeds.institutions)?;

    let engine = ScrapeEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Catalog scrape completed successfully!");
            println!("✅ Catalog scrape completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Catalog scrape failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                catalog_etl::utils::error::ErrorSeverity::Low => 0,
                catalog_etl::utils::error::ErrorSeverity::Medium => 2,
                catalog_etl::utils::error::ErrorSeverity::High => 1,
                catalog_etl::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
