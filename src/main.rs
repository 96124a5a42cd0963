use anyhow::Context;
use clap::Parser;
use lotto_draw::config::cli::{exit_code, render_outcome};
use lotto_draw::core::{ConfigProvider, RequestSource};
use lotto_draw::utils::{logger, validation::Validate};
use lotto_draw::{CliConfig, DrawEngine, DrawOutcome, GameRules, LocalSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lotto-draw CLI");
    tracing::debug!("CLI config: {:?}", config);

    if config.rules {
        let rules = serde_json::to_string_pretty(&GameRules::standard())?;
        println!("{}", rules);
        return Ok(());
    }

    // 驗證配置
    let settings = match config.validate().and_then(|_| config.load_settings()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if settings.monitoring_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let source = LocalSource::new(config.input.as_deref());
    let outcome = match source.read_request().await {
        Ok(body) => DrawEngine::from_config(&settings).handle_bytes(&body),
        Err(e) => {
            tracing::error!("❌ Could not read request: {}", e);
            DrawOutcome::from_error(&e)
        }
    };

    let rendered = render_outcome(&outcome, settings.pretty_output())
        .context("failed to render response")?;
    println!("{}", rendered);

    if outcome.is_success() {
        tracing::info!("✅ Draw completed successfully");
    }

    let code = exit_code(&outcome);
    if code > 0 {
        std::process::exit(code);
    }

    Ok(())
}
