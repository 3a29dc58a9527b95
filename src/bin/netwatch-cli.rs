use std::path::PathBuf;

use clap::{Parser, Subcommand};

use netwatch::config::{load_config, MonitorConfig};
use netwatch::observability::logging::init_logging;
use netwatch::store::LogStore;

#[derive(Parser)]
#[command(name = "netwatch-cli")]
#[command(about = "Inspect the persisted connection log", long_about = None)]
struct Cli {
    /// Path to a monitor config file (TOML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all recorded exchanges as JSON
    Logs,
    /// Summarize recorded exchanges
    Stats,
    /// Delete all recorded exchanges
    Clear,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MonitorConfig::default(),
    };
    init_logging(&config.observability.log_filter);

    let store = LogStore::open(config.storage.path());

    match cli.command {
        Commands::Logs => {
            let logs = store.get_all();
            println!("{}", serde_json::to_string_pretty(&logs)?);
        }
        Commands::Stats => {
            let logs = store.get_all();
            let successful = logs.iter().filter(|r| r.is_successful).count();
            println!("records: {}", logs.len());
            println!("successful: {}", successful);
            println!("failed: {}", logs.len() - successful);
            if !logs.is_empty() {
                let total_ms: u64 = logs.iter().map(|r| r.duration_ms).sum();
                println!("mean duration: {}ms", total_ms / logs.len() as u64);
            }
        }
        Commands::Clear => {
            store.clear();
            println!("Cleared {}", store.path().display());
        }
    }

    Ok(())
}
