mod cmds;
mod config_file;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lehmer")]
#[command(version)]
#[command(about = "Seeded Park-Miller draws and shuffles", long_about = None)]
struct Cli {
    /// JSON config file supplying a default seed and log level
    #[arg(long, global = true, env = "LEHMER_CONFIG")]
    config: Option<PathBuf>,

    /// One of error, warn, info, debug, trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print integers or fractions from a seeded generator")]
    Draw(cmds::draw::Opts),

    #[command(about = "Shuffle items, file lines, or stdin lines")]
    Shuffle(cmds::shuffle::Opts),

    #[command(about = "Print a seeded permutation of 0..size")]
    Indices(cmds::indices::Opts),

    #[command(about = "Measure how evenly shuffles cover every permutation")]
    Uniformity(cmds::uniformity::Opts),

    #[command(about = "Config file related commands")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    Init(cmds::config::init::Opts),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config_file::read_config(path)?,
        None => config_file::Config::default(),
    };
    logging::init_logging(cli.log_level.clone().or_else(|| config.log_level.clone()))?;

    match &cli.command {
        Commands::Draw(opts) => cmds::draw::run(opts, &config).await?,
        Commands::Shuffle(opts) => cmds::shuffle::run(opts, &config).await?,
        Commands::Indices(opts) => cmds::indices::run(opts, &config).await?,
        Commands::Uniformity(opts) => cmds::uniformity::run(opts, &config).await?,
        Commands::Config { command } => match command {
            ConfigCommands::Init(opts) => cmds::config::init::run(opts).await?,
        },
    }

    Ok(())
}
