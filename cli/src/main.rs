mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use contract_abi::ParserConfig;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "abi-inspect")]
#[command(
    about = "Inspect contract ABI type signatures and their encoded layout",
    long_about = None
)]
struct Cli {
    /// Output format: human, json or yaml
    #[arg(long, global = true, default_value = "human")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one or more type signatures
    Parse {
        /// Signatures such as `uint256[2]` or `tuple(a address,b bytes)`
        #[arg(required = true)]
        signatures: Vec<String>,
    },

    /// Expand and parse ABI arguments from a JSON file
    Argument {
        /// Path to a JSON argument (or array of arguments), `-` for stdin
        path: String,
    },

    /// Print the canonical function signature for a name and input types
    Signature {
        /// Function name
        name: String,

        /// Input types
        types: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "abi_inspect=info,contract_abi=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // A missing .env file is fine
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = ParserConfig::from_env()?;
    debug!("Using max type depth {}", config.max_depth);

    match cli.command {
        Commands::Parse { signatures } => {
            commands::parse(&signatures, &config, cli.format)?;
        }
        Commands::Argument { path } => {
            commands::argument(&path, &config, cli.format)?;
        }
        Commands::Signature { name, types } => {
            commands::signature(&name, &types, &config, cli.format)?;
        }
    }

    Ok(())
}
