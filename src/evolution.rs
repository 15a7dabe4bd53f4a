//! Evolution line resolution.
//!
//! A Pokemon's evolution line is found by walking
//! pokemon -> species -> evolution chain, flattening the chain tree in
//! pre-order, and then looking every member up concurrently to get its
//! display identity.
//!
//! Member lookups use a partial-success policy: a member whose lookup fails is
//! logged, recorded in [`ResolutionReport::skipped`], and left out, while every
//! other member keeps its position relative to the rest. Failures in the three
//! prerequisite fetches abort the whole resolution.

use crate::cancel::{run_cancellable, CancelSignal};
use crate::client::PokeApiClient;
use crate::errors::{CatalogError, CatalogResult};
use crate::identifier::PokemonId;
use futures_util::future::join_all;
use schema::{EvolutionNode, NamedResource, PokemonRecord, SpeciesRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Display identity of one evolution stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEvolutionEntry {
    pub id: u32,
    pub name: String,
    /// Official artwork; `None` when upstream has none.
    pub image_url: Option<String>,
}

impl From<&PokemonRecord> for ResolvedEvolutionEntry {
    fn from(record: &PokemonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            image_url: record.artwork_url().map(str::to_string),
        }
    }
}

/// A chain member whose lookup failed and was left out of the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position in the flattened chain.
    pub position: usize,
    pub name: String,
    pub error: CatalogError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    pub entries: Vec<ResolvedEvolutionEntry>,
    pub skipped: Vec<SkippedEntry>,
}

impl ResolutionReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Flatten an evolution tree in pre-order: a node, then each child subtree in
/// `evolves_to` order. Every node appears exactly once.
pub fn flatten_chain(root: &EvolutionNode) -> Vec<&NamedResource> {
    let mut out = Vec::with_capacity(root.node_count());
    visit(root, &mut out);
    out
}

fn visit<'a>(node: &'a EvolutionNode, out: &mut Vec<&'a NamedResource>) {
    out.push(&node.species);
    for child in &node.evolves_to {
        visit(child, out);
    }
}

/// The species link of a Pokemon record, which every conformant record carries.
pub fn species_reference(pokemon: &PokemonRecord) -> CatalogResult<&NamedResource> {
    pokemon.species.as_ref().ok_or_else(|| {
        CatalogError::MalformedData(format!("pokemon {} has no species reference", pokemon.name))
    })
}

#[derive(Debug, Clone)]
pub struct EvolutionResolver {
    client: PokeApiClient,
}

impl EvolutionResolver {
    pub fn new(client: PokeApiClient) -> Self {
        Self { client }
    }

    /// Resolve the full evolution line of `id`, in chain order.
    pub async fn resolve(&self, id: &PokemonId) -> CatalogResult<Vec<ResolvedEvolutionEntry>> {
        self.resolve_report(id).await.map(|report| report.entries)
    }

    /// Like [`resolve`](Self::resolve), but abandons in-flight requests and
    /// fails with [`CatalogError::Cancelled`] as soon as `cancel` fires.
    pub async fn resolve_with_cancel(
        &self,
        id: &PokemonId,
        cancel: &CancelSignal,
    ) -> CatalogResult<Vec<ResolvedEvolutionEntry>> {
        let result = run_cancellable(cancel, self.resolve(id)).await;
        if matches!(result, Err(CatalogError::Cancelled)) {
            debug!(%id, "evolution resolution cancelled");
        }
        result
    }

    /// Resolve `id` and report skipped members alongside the entries.
    pub async fn resolve_report(&self, id: &PokemonId) -> CatalogResult<ResolutionReport> {
        let pokemon = self.client.pokemon(id).await?;
        self.resolve_for_pokemon(&pokemon).await
    }

    /// Resolve from an already fetched Pokemon record.
    pub async fn resolve_for_pokemon(
        &self,
        pokemon: &PokemonRecord,
    ) -> CatalogResult<ResolutionReport> {
        let species = self.client.species_at(&species_reference(pokemon)?.url).await?;
        self.resolve_from_species(&species).await
    }

    /// Resolve from an already fetched species record.
    pub async fn resolve_from_species(
        &self,
        species: &SpeciesRecord,
    ) -> CatalogResult<ResolutionReport> {
        let chain_ref = species.evolution_chain.as_ref().ok_or_else(|| {
            CatalogError::MalformedData(format!(
                "species {} has no evolution chain reference",
                species.name
            ))
        })?;
        let chain = self.client.evolution_chain_at(&chain_ref.url).await?;

        let members = flatten_chain(&chain.chain);
        debug!(
            chain_id = chain.id,
            members = members.len(),
            depth = chain.chain.depth(),
            "flattened evolution chain"
        );

        let report = self.resolve_members(&members).await;
        info!(
            species = %species.name,
            resolved = report.entries.len(),
            skipped = report.skipped.len(),
            "resolved evolution line"
        );
        Ok(report)
    }

    async fn resolve_members(&self, members: &[&NamedResource]) -> ResolutionReport {
        // join_all yields outputs in input order, whatever order they complete in.
        let outcomes = join_all(members.iter().map(|member| self.lookup_member(member))).await;

        let mut report = ResolutionReport::default();
        for (position, (member, outcome)) in members.iter().zip(outcomes).enumerate() {
            match outcome {
                Ok(entry) => report.entries.push(entry),
                Err(error) => {
                    warn!(name = %member.name, position, %error, "skipping evolution member");
                    report.skipped.push(SkippedEntry {
                        position,
                        name: member.name.clone(),
                        error,
                    });
                }
            }
        }
        report
    }

    /// Species names are not always Pokemon names (`lycanroc` vs
    /// `lycanroc-midday`), but the species id always names its default
    /// variety, so the id from the species URL is preferred.
    async fn lookup_member(&self, member: &NamedResource) -> CatalogResult<ResolvedEvolutionEntry> {
        let id = match member.id_from_url() {
            Some(n) => PokemonId::number(n)?,
            None => member.name.parse()?,
        };
        let record = self.client.pokemon(&id).await?;
        Ok(ResolvedEvolutionEntry::from(&record))
    }
}
