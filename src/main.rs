use anyhow::Result;
use clap::{Parser, Subcommand};
use navcheck::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Write the discount report and print its path (default)
    Check,
    /// Display funds trading at a discount without writing a report
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config_path = cli.config_path.as_deref();
    let result = match cli.command.unwrap_or(Commands::Check) {
        Commands::Setup => navcheck::cli::setup::setup(),
        Commands::Check => navcheck::run_command(navcheck::AppCommand::Check, config_path)
            .await
            .map(|path| {
                if let Some(path) = path {
                    println!("{}", path.display());
                }
            }),
        Commands::Show => navcheck::run_command(navcheck::AppCommand::Show, config_path)
            .await
            .map(|_| ()),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
