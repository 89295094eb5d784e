mod report;

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use log::{error, info};
use querywire_core::{Kernel, KernelConfig, KernelError, find_sorted_services};

use crate::report::WiringReport;

/// Querywire: compile a service configuration and inspect its query extension wiring
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Boot the kernel and print the extension chain of every data provider
    Inspect {
        /// Configuration file (.json, .yaml, .yml or .toml)
        #[arg(short, long)]
        config: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the services tagged with TAG in priority order
    Tagged {
        /// Configuration file (.json, .yaml, .yml or .toml)
        #[arg(short, long)]
        config: PathBuf,
        /// Tag name, e.g. api.orm.query_extension.collection
        tag: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG still wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_kernel(path: &Path) -> Result<Kernel, KernelError> {
    let config = KernelConfig::load(path)?;
    info!("Loaded configuration from {}", path.display());
    Kernel::with_default_bundles(config)
}

async fn run(command: Commands) -> Result<(), KernelError> {
    match command {
        Commands::Inspect { config, json } => {
            let mut kernel = load_kernel(&config)?;
            kernel.boot().await?;
            let container = kernel
                .container()
                .ok_or_else(|| KernelError::from("Kernel booted without a container"))?;
            let report = WiringReport::from_container(&kernel.config().environment, &container);
            if json {
                let rendered = serde_json::to_string_pretty(&report.to_json())
                    .map_err(|e| KernelError::Other(format!("Failed to render report: {}", e)))?;
                println!("{}", rendered);
            } else {
                print!("{}", report);
            }
            kernel.shutdown().await?;
        }
        Commands::Tagged { config, tag } => {
            let kernel = load_kernel(&config)?;
            let builder = kernel.build()?;
            let sorted = find_sorted_services(&builder, &tag);
            if sorted.is_empty() {
                println!("No services tagged '{}'", tag);
            }
            for reference in sorted {
                println!("{}", reference.id());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args.command).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
