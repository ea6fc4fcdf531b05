use anyhow::Context;
use clap::Parser;
use tryon_composer::core::SettingsProvider;
use tryon_composer::utils::error::ErrorSeverity;
use tryon_composer::utils::logger::{self, LogFormat};
use tryon_composer::utils::validation::Validate;
use tryon_composer::{
    apply_pick, CliConfig, LoggingSubmitter, PhotoRole, PickOutcome, PickedAsset,
    SubmissionReceipt, SubmissionService, TomlConfig, TryOnError, TryOnRequestComposer,
};

fn pick_from_flag(value: Option<&str>) -> PickOutcome {
    match value {
        Some(uri) => {
            let mut asset = PickedAsset::new(uri);
            // Remote URIs have no local size; the backend enforces its own limit.
            if let Ok(meta) = std::fs::metadata(uri) {
                asset = asset.with_size(meta.len());
            }
            PickOutcome::Selected(asset)
        }
        None => PickOutcome::Cancelled,
    }
}

/// `--verbose` wins over the configured level.
fn cli_log_level<'a>(cli: &CliConfig, configured: Option<&'a str>) -> &'a str {
    if cli.verbose {
        "debug"
    } else {
        configured.unwrap_or("info")
    }
}

fn load_config(cli: &CliConfig) -> tryon_composer::Result<TomlConfig> {
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

async fn run(
    cli: &CliConfig,
    file_config: &TomlConfig,
) -> tryon_composer::Result<SubmissionReceipt> {
    let prefs = file_config.preferences();
    tracing::debug!(
        notifications = prefs.notifications,
        save_history = prefs.save_history,
        "preferences loaded"
    );

    let policy = file_config.picker_policy();
    let mut composer = TryOnRequestComposer::with_settings(cli.experiment_settings(file_config));

    apply_pick(&mut composer, PhotoRole::Person, pick_from_flag(cli.person.as_deref()), &policy)?;
    apply_pick(&mut composer, PhotoRole::Garment, pick_from_flag(cli.garment.as_deref()), &policy)?;
    tracing::info!(readiness = %composer.readiness(), "{}", composer.readiness().message());

    let service = SubmissionService::new(LoggingSubmitter::new());
    service.submit(&composer).await
}

fn report_failure(e: &TryOnError) -> i32 {
    tracing::error!(
        "❌ Try-on request failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_logger(cli_log_level(&cli, None), LogFormat::Compact);
            std::process::exit(report_failure(&e).max(1));
        }
    };

    let format = if file_config.json_logs() {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli_log_level(&cli, file_config.log_level()), format);

    tracing::info!("Starting try-on composer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli, &file_config).await {
        Ok(receipt) => {
            println!("✅ {}", receipt.message);
            let json = serde_json::to_string_pretty(&receipt.request)
                .context("failed to render request as JSON")?;
            println!("{}", json);
        }
        Err(e) => {
            let exit_code = report_failure(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
