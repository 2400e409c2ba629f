use anyhow::Context;
use clap::Parser;
use mensa_menu::domain::ports::ConfigProvider;
use mensa_menu::utils::error::ErrorSeverity;
use mensa_menu::utils::{logger, validation::Validate};
use mensa_menu::{
    CliConfig, Codebook, HttpFeedSource, MenuConfig, MenuEngine, MenuPipeline, StdoutOutput,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            MenuConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?
        }
        None => MenuConfig::default(),
    };

    if let Err(e) = config.validate().and_then(|_| cli.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let codebook = Codebook::default();
    let today = chrono::Local::now().date_naive();
    let request = match cli.resolve(&config, &codebook, today) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let feed = HttpFeedSource::new(config.url_template());
    let pipeline = MenuPipeline::new(feed, StdoutOutput, request, codebook);
    let engine = MenuEngine::new(pipeline);

    if let Err(e) = engine.run().await {
        tracing::error!(
            "❌ Menu run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
