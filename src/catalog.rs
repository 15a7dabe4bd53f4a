//! Catalog operations: listing, search, type browsing and the detail view.
//!
//! Every screen's data flow lives here as a plain async function so front
//! ends only render. Fan-out hydration of many Pokemon follows the same
//! partial-success policy as evolution resolution: failed members are logged
//! and dropped, the rest keep their listing order.

use crate::client::PokeApiClient;
use crate::config::CatalogConfig;
use crate::errors::{CatalogError, CatalogResult};
use crate::evolution::{species_reference, EvolutionResolver, ResolvedEvolutionEntry};
use crate::http::HttpFetcher;
use crate::identifier::PokemonId;
use crate::views::{CatalogPage, PokemonCard, PokemonDetail, SearchOutcome, TypeMatchups, TypeOverview};
use futures_util::future::join_all;
use schema::{NamedResource, PokemonType};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Catalog {
    client: PokeApiClient,
    resolver: EvolutionResolver,
    page_size: u32,
    type_member_limit: usize,
}

impl Catalog {
    pub fn new(client: PokeApiClient, config: &CatalogConfig) -> Self {
        Self {
            resolver: EvolutionResolver::new(client.clone()),
            client,
            page_size: config.page_size,
            type_member_limit: config.type_member_limit,
        }
    }

    /// Catalog talking to the configured upstream over HTTP.
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let fetcher = HttpFetcher::new(config)?;
        let client = PokeApiClient::new(config.base_url()?, Arc::new(fetcher));
        Ok(Self::new(client, config))
    }

    /// Evolution line of `id` in chain order.
    pub async fn evolution_line(&self, id: &PokemonId) -> CatalogResult<Vec<ResolvedEvolutionEntry>> {
        self.resolver.resolve(id).await
    }

    /// One page of the main listing, starting at `offset`.
    pub async fn list_page(&self, offset: u32) -> CatalogResult<CatalogPage> {
        let listing = self.client.pokemon_page(offset, self.page_size).await?;
        let refs: Vec<&NamedResource> = listing.results.iter().collect();
        let cards = self.hydrate_cards(&refs).await;

        Ok(CatalogPage {
            offset,
            total: listing.count,
            cards,
            next_offset: listing
                .next
                .as_ref()
                .and_then(|_| offset.checked_add(self.page_size)),
        })
    }

    /// Direct lookup of a single Pokemon by number or name.
    pub async fn search(&self, term: &str) -> CatalogResult<SearchOutcome> {
        let query = term.trim().to_lowercase();
        let id = match query.parse::<PokemonId>() {
            Ok(id) => id,
            Err(_) => return Ok(SearchOutcome::NoMatch { query }),
        };

        match self.client.pokemon(&id).await {
            Ok(record) => Ok(SearchOutcome::Found(PokemonCard::from(&record))),
            Err(CatalogError::NotFound(_)) => {
                debug!(%query, "search found nothing");
                Ok(SearchOutcome::NoMatch { query })
            }
            Err(other) => Err(other),
        }
    }

    /// Main-series types in upstream order.
    pub async fn list_types(&self) -> CatalogResult<Vec<PokemonType>> {
        let listing = self.client.type_list().await?;
        let types = listing
            .results
            .iter()
            .filter_map(|entry| match entry.name.parse::<PokemonType>() {
                Ok(ty) => Some(ty),
                Err(_) => {
                    warn!(type_name = %entry.name, "skipping unrecognised type");
                    None
                }
            })
            .filter(|ty| ty.is_main_series())
            .collect();
        Ok(types)
    }

    /// Matchups and the first members of a type.
    pub async fn type_overview(&self, pokemon_type: PokemonType) -> CatalogResult<TypeOverview> {
        let record = self.client.type_record(pokemon_type.api_name()).await?;
        let refs: Vec<&NamedResource> = record
            .pokemon
            .iter()
            .take(self.type_member_limit)
            .map(|member| &member.pokemon)
            .collect();
        let members = self.hydrate_cards(&refs).await;

        Ok(TypeOverview {
            pokemon_type,
            matchups: TypeMatchups::from(&record.damage_relations),
            member_count: record.pokemon.len(),
            members,
        })
    }

    /// Full detail view. The species record is fetched once and shared between
    /// the description and the evolution line.
    pub async fn pokemon_detail(&self, id: &PokemonId) -> CatalogResult<PokemonDetail> {
        let pokemon = self.client.pokemon(id).await?;
        let species = self.client.species_at(&species_reference(&pokemon)?.url).await?;
        let evolution = self.resolver.resolve_from_species(&species).await?;

        Ok(PokemonDetail::from_records(&pokemon, &species, evolution.entries))
    }

    async fn hydrate_cards(&self, refs: &[&NamedResource]) -> Vec<PokemonCard> {
        let outcomes = join_all(refs.iter().map(|r| self.client.pokemon_at(&r.url))).await;

        refs.iter()
            .zip(outcomes)
            .filter_map(|(reference, outcome)| match outcome {
                Ok(record) => Some(PokemonCard::from(&record)),
                Err(error) => {
                    warn!(name = %reference.name, %error, "skipping pokemon card");
                    None
                }
            })
            .collect()
    }
}
