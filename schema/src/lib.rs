// Pokedex Catalog Schema - Upstream document definitions
// This crate contains the serde models of the PokeAPI documents the catalog
// reads, plus the static type enum. It performs no I/O; the main
// pokedex-catalog crate fetches the JSON and decodes it into these types.

// Re-export the main types
pub use evolution_data::*;
pub use pokemon_data::*;
pub use pokemon_types::*;
pub use resources::*;
pub use species_data::*;
pub use type_data::*;

pub mod evolution_data;
pub mod pokemon_data;
pub mod pokemon_types;
pub mod resources;
pub mod species_data;
pub mod type_data;
