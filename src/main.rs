use clap::Parser;
use popu_ranking::utils::{logger, validation::Validate};
use popu_ranking::{CliConfig, LocalStorage, RankingConfig, RankingEngine, RankingPipeline, StdoutPrinter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::debug!("CLI config: {:?}", cli);

    // 載入配置，未指定時使用固定的輸入路徑
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match RankingConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(e.exit_code());
                }
            }
        }
        None => RankingConfig::default(),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("📄 Input: {}", config.source.path);

    let pipeline = RankingPipeline::new(LocalStorage::default(), config, StdoutPrinter);
    let engine = RankingEngine::new(pipeline);

    if let Err(e) = engine.run().await {
        tracing::error!(
            "❌ Ranking failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    tracing::info!("✅ Ranking completed");
    Ok(())
}
