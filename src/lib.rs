pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

pub enum AppCommand {
    Check,
    Show,
}

/// Runs `command` and returns the report path when one was written.
pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<Option<PathBuf>> {
    info!("Fund discount check starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let gamco = &config.providers.gamco;
    let fund_provider = providers::GamcoFundListProvider::new(
        &gamco.base_url,
        &gamco.funds_path,
        gamco.asset_type.as_deref(),
    );
    let price_provider = providers::YahooFinanceProvider::new(&config.providers.yahoo.base_url);

    match command {
        AppCommand::Check => {
            let today = chrono::Local::now().date_naive();
            let path = cli::check::run(
                &fund_provider,
                &price_provider,
                config.threshold,
                &config.report.report_dir(),
                &config.report.prefix,
                today,
            )
            .await?;
            Ok(path)
        }
        AppCommand::Show => {
            cli::show::run(&fund_provider, &price_provider, config.threshold).await?;
            Ok(None)
        }
    }
}
