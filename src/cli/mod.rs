use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{print_openapi, serve};

#[derive(Parser)]
#[command(name = "rentease")]
#[command(about = "RentEase property rental management API server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Print the OpenAPI specification as JSON and exit
    Openapi,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::Openapi => {
                print_openapi()?;
            }
        }
        Ok(())
    }
}
