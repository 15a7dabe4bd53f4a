//! Pokedex Catalog MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp)
//! that exposes the catalog for LLM interaction.

use std::sync::Arc;

use pokedex_catalog::logging::init_tracing;
use pokedex_catalog::text_interface::*;
use pokedex_catalog::{Catalog, CatalogConfig};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::info;

#[derive(Debug, Clone)]
pub struct PokedexCatalogService {
    tool_router: ToolRouter<PokedexCatalogService>,
    catalog: Arc<Catalog>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListPokemonRequest {
    #[schemars(description = "Listing offset; 0 for the first page")]
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchPokemonRequest {
    #[schemars(description = "Exact Pokemon name or pokedex number")]
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PokemonRequest {
    #[schemars(description = "Pokemon name or pokedex number, e.g. 'pikachu' or '25'")]
    pub pokemon: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TypeRequest {
    #[schemars(description = "Type name, e.g. 'fire'")]
    pub type_name: String,
}

/// Tool failures are reported as text so the model can read and react to them.
fn text_result(outcome: Result<String, String>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(message) => Ok(CallToolResult::error(vec![Content::text(message)])),
    }
}

#[tool_router]
impl PokedexCatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            tool_router: Self::tool_router(),
            catalog: Arc::new(catalog),
        }
    }

    #[tool(description = "List one page of Pokemon with their numbers and types")]
    async fn list_pokemon(
        &self,
        Parameters(request): Parameters<ListPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_list_command(&self.catalog, request.offset).await)
    }

    #[tool(description = "Search for a Pokemon by exact name or number")]
    async fn search_pokemon(
        &self,
        Parameters(request): Parameters<SearchPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_search_command(&self.catalog, &request.query).await)
    }

    #[tool(description = "Show stats, abilities, description and evolution line of a Pokemon")]
    async fn pokemon_details(
        &self,
        Parameters(request): Parameters<PokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_detail_command(&self.catalog, &request.pokemon).await)
    }

    #[tool(description = "Show the full evolution line of a Pokemon, including every branch")]
    async fn evolution_chain(
        &self,
        Parameters(request): Parameters<PokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_evolution_command(&self.catalog, &request.pokemon).await)
    }

    #[tool(description = "List all Pokemon types")]
    async fn list_types(&self) -> Result<CallToolResult, McpError> {
        text_result(handle_types_command(&self.catalog).await)
    }

    #[tool(description = "Show type matchups and example Pokemon of a type")]
    async fn type_details(
        &self,
        Parameters(request): Parameters<TypeRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(handle_type_command(&self.catalog, &request.type_name).await)
    }
}

#[tool_handler]
impl ServerHandler for PokedexCatalogService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Pokedex Catalog MCP Server starting...");

    let config = CatalogConfig::resolve(None)?;
    let catalog = Catalog::from_config(&config)?;
    let service = PokedexCatalogService::new(catalog);
    let transport = (stdin(), stdout());

    info!(base_url = %config.base_url, "Starting MCP server with transport...");
    let server = service.serve(transport).await?;

    let quit_reason = server.waiting().await?;
    info!(?quit_reason, "Pokedex Catalog MCP Server exiting");
    Ok(())
}
