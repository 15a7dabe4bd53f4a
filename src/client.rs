//! Typed access to the upstream API.
//!
//! [`Fetcher`] is the transport seam: it turns a URL into a response body or
//! a classified [`CatalogError`]. [`PokeApiClient`] builds endpoint URLs and
//! decodes bodies into the `schema` documents.

use crate::errors::{CatalogError, CatalogResult};
use crate::identifier::PokemonId;
use async_trait::async_trait;
use schema::{EvolutionChainRecord, PokemonRecord, ResourceList, SpeciesRecord, TypeRecord};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Retrieves a document body.
///
/// Implementations must map HTTP 404 to [`CatalogError::NotFound`] and every
/// other transport or status failure to [`CatalogError::Upstream`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> CatalogResult<String>;
}

#[derive(Clone)]
pub struct PokeApiClient {
    base_url: Url,
    fetcher: Arc<dyn Fetcher>,
}

impl std::fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PokeApiClient {
    /// `base_url` must end with `/` (see `CatalogConfig::base_url`).
    pub fn new(base_url: Url, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { base_url, fetcher }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /pokemon/{idOrName}`
    pub async fn pokemon(&self, id: &PokemonId) -> CatalogResult<PokemonRecord> {
        let url = self.endpoint(&format!("pokemon/{}", id))?;
        self.get(&url).await.map_err(|e| match e {
            CatalogError::NotFound(_) => CatalogError::NotFound(format!("pokemon {}", id)),
            other => other,
        })
    }

    /// `GET /pokemon?offset=&limit=`
    pub async fn pokemon_page(&self, offset: u32, limit: u32) -> CatalogResult<ResourceList> {
        let mut url = self.endpoint("pokemon")?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        self.get(&url).await
    }

    /// `GET /type`
    pub async fn type_list(&self) -> CatalogResult<ResourceList> {
        let url = self.endpoint("type")?;
        self.get(&url).await
    }

    /// `GET /type/{name}`
    pub async fn type_record(&self, name: &str) -> CatalogResult<TypeRecord> {
        let url = self.endpoint(&format!("type/{}", name))?;
        self.get(&url).await
    }

    /// Species record behind a `species.url` reference.
    pub async fn species_at(&self, reference: &str) -> CatalogResult<SpeciesRecord> {
        self.get_reference(reference).await
    }

    /// Evolution chain behind an `evolution_chain.url` reference.
    pub async fn evolution_chain_at(&self, reference: &str) -> CatalogResult<EvolutionChainRecord> {
        self.get_reference(reference).await
    }

    /// Pokemon record behind a listing or type-member reference.
    pub async fn pokemon_at(&self, reference: &str) -> CatalogResult<PokemonRecord> {
        self.get_reference(reference).await
    }

    async fn get_reference<T: DeserializeOwned>(&self, reference: &str) -> CatalogResult<T> {
        // References are absolute in practice; a relative one is resolved against the API root.
        let url = self.base_url.join(reference).map_err(|e| {
            CatalogError::MalformedData(format!("bad resource reference {:?}: {}", reference, e))
        })?;
        self.get(&url).await
    }

    fn endpoint(&self, path: &str) -> CatalogResult<Url> {
        self.base_url.join(path).map_err(|e| {
            CatalogError::MalformedData(format!("cannot build endpoint {:?}: {}", path, e))
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: &Url) -> CatalogResult<T> {
        debug!(%url, "fetching upstream document");
        let body = self.fetcher.fetch(url).await?;
        serde_json::from_str(&body)
            .map_err(|e| CatalogError::MalformedData(format!("{}: {}", url, e)))
    }
}
