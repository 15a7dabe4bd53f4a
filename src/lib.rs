// In: src/lib.rs

//! Pokedex Catalog
//!
//! Data layer for a Pokemon catalog backed by the public PokeAPI: paginated
//! listings, direct search, a type browser, the detail view, and evolution
//! line resolution. Every operation is a standalone async function over a
//! pluggable transport, so front ends only render.

// --- MODULE DECLARATIONS ---
pub mod cancel;
pub mod catalog;
pub mod client;
pub mod config;
pub mod errors;
pub mod evolution;
pub mod http;
pub mod identifier;
pub mod logging;
pub mod text_interface;
pub mod views;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Re-export the upstream document types.
pub use schema::{
    EvolutionChainRecord, EvolutionNode, NamedResource, PokemonRecord, PokemonType, ResourceList,
    SpeciesRecord, TypeRecord,
};

// --- From this crate's modules (`src/`) ---

// Core operations.
pub use catalog::Catalog;
pub use evolution::{flatten_chain, EvolutionResolver, ResolutionReport, ResolvedEvolutionEntry};

// Transport and configuration.
pub use cancel::{cancellation, CancelSignal, Canceller};
pub use client::{Fetcher, PokeApiClient};
pub use config::CatalogConfig;
pub use http::HttpFetcher;
pub use identifier::PokemonId;

// View shapes.
pub use views::{
    CatalogPage, Loadable, PokemonCard, PokemonDetail, SearchOutcome, TypeOverview,
};

// Crate-specific error and result types.
pub use errors::{CatalogError, CatalogResult, ConfigError};
