//! Pokedex Catalog CLI
//!
//! Browse the PokeAPI catalog from the terminal.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pokedex_catalog::logging::init_tracing;
use pokedex_catalog::text_interface::*;
use pokedex_catalog::{Catalog, CatalogConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pokedex-catalog")]
#[command(about = "Browse Pokémon, types and evolution lines from the PokeAPI", long_about = None)]
struct Cli {
    /// RON config file (defaults to $POKEDEX_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List one page of Pokémon
    List {
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Look up a Pokémon by exact name or number
    Search { term: String },
    /// Show the full detail view of a Pokémon
    Show { id: String },
    /// Show a Pokémon's evolution line
    Evolution { id: String },
    /// List all Pokémon types
    Types,
    /// Show matchups and members of one type
    Type { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config =
        CatalogConfig::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    let catalog = Catalog::from_config(&config).context("failed to set up catalog")?;

    let outcome = match &cli.command {
        Command::List { offset } => handle_list_command(&catalog, *offset).await,
        Command::Search { term } => handle_search_command(&catalog, term).await,
        Command::Show { id } => handle_detail_command(&catalog, id).await,
        Command::Evolution { id } => handle_evolution_command(&catalog, id).await,
        Command::Types => handle_types_command(&catalog).await,
        Command::Type { name } => handle_type_command(&catalog, name).await,
    };

    match outcome {
        Ok(text) => {
            println!("{}", text.trim_end());
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}
