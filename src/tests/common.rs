use crate::catalog::Catalog;
use crate::client::{Fetcher, PokeApiClient};
use crate::config::CatalogConfig;
use crate::errors::{CatalogError, CatalogResult};
use crate::evolution::EvolutionResolver;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const BASE: &str = "https://pokeapi.test/api/v2/";

#[derive(Clone)]
enum Reply {
    Body(String),
    Fail(CatalogError),
    Hang,
}

/// An in-memory upstream keyed by absolute URL.
///
/// Unregistered URLs answer with `NotFound`, like the real API's 404s.
///
/// # Example
/// ```
/// let upstream = FakeUpstream::new()
///     .with_family(1, &[(1, "base-form"), (2, "stage2")], linear(&["base-form", "stage2"]))
///     .with_delay("pokemon/base-form", Duration::from_millis(30))
///     .shared();
/// ```
#[derive(Default)]
pub struct FakeUpstream {
    routes: HashMap<String, Reply>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<String>>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a JSON body at `path` (relative to [`BASE`]).
    pub fn with_json(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(url(path), Reply::Body(body.to_string()));
        self
    }

    /// Registers a raw (possibly invalid) body at `path`.
    pub fn with_raw(mut self, path: &str, body: &str) -> Self {
        self.routes.insert(url(path), Reply::Body(body.to_string()));
        self
    }

    pub fn with_failure(mut self, path: &str, error: CatalogError) -> Self {
        self.routes.insert(url(path), Reply::Fail(error));
        self
    }

    /// `path` never answers.
    pub fn with_hang(mut self, path: &str) -> Self {
        self.routes.insert(url(path), Reply::Hang);
        self
    }

    pub fn with_delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(url(path), delay);
        self
    }

    /// Registers a Pokemon reachable both by id and by name.
    pub fn with_pokemon(self, id: u32, name: &str, species_id: u32) -> Self {
        let body = pokemon_json(id, name, species_id);
        self.with_json(&format!("pokemon/{}", id), body.clone())
            .with_json(&format!("pokemon/{}", name), body.clone())
            .with_json(&format!("pokemon/{}/", id), body)
    }

    /// Registers a whole evolution family: every member's Pokemon and species
    /// records, all pointing at evolution chain `chain_id` with the given tree.
    pub fn with_family(mut self, chain_id: u32, members: &[(u32, &str)], tree: Value) -> Self {
        for &(id, name) in members {
            self = self
                .with_pokemon(id, name, id)
                .with_json(&format!("pokemon-species/{}/", id), species_json(id, name, chain_id));
        }
        self.with_json(
            &format!("evolution-chain/{}/", chain_id),
            json!({ "id": chain_id, "chain": tree }),
        )
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, path: &str) -> usize {
        let target = url(path);
        self.requests().iter().filter(|r| **r == target).count()
    }
}

#[async_trait]
impl Fetcher for FakeUpstream {
    async fn fetch(&self, url: &Url) -> CatalogResult<String> {
        let key = url.as_str().to_string();
        self.requests.lock().unwrap().push(key.clone());

        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }

        match self.routes.get(&key).cloned() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(error)) => Err(error),
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(CatalogError::NotFound(url.path().to_string())),
        }
    }
}

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

pub fn test_config() -> CatalogConfig {
    CatalogConfig {
        base_url: BASE.to_string(),
        page_size: 3,
        type_member_limit: 2,
        ..CatalogConfig::default()
    }
}

pub fn client(upstream: &Arc<FakeUpstream>) -> PokeApiClient {
    let base = test_config().base_url().unwrap();
    PokeApiClient::new(base, upstream.clone())
}

pub fn resolver(upstream: &Arc<FakeUpstream>) -> EvolutionResolver {
    EvolutionResolver::new(client(upstream))
}

pub fn catalog(upstream: &Arc<FakeUpstream>) -> Catalog {
    Catalog::new(client(upstream), &test_config())
}

pub fn pokemon_json(id: u32, name: &str, species_id: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "sprites": {
            "front_default": format!("https://img.test/sprites/{}.png", id),
            "other": {
                "official-artwork": { "front_default": format!("https://img.test/artwork/{}.png", id) }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": url("type/12/") } },
            { "slot": 2, "type": { "name": "poison", "url": url("type/4/") } }
        ],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": url("stat/1/") } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack", "url": url("stat/4/") } }
        ],
        "abilities": [
            { "ability": { "name": "overgrow", "url": url("ability/65/") }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "chlorophyll", "url": url("ability/34/") }, "is_hidden": true, "slot": 3 }
        ],
        "species": { "name": name, "url": url(&format!("pokemon-species/{}/", species_id)) }
    })
}

pub fn species_json(id: u32, name: &str, chain_id: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "evolution_chain": { "url": url(&format!("evolution-chain/{}/", chain_id)) },
        "flavor_text_entries": [
            { "flavor_text": "Une graine", "language": { "name": "fr", "url": url("language/5/") } },
            { "flavor_text": format!("A strange seed was\u{c}planted on {}.", name), "language": { "name": "en", "url": url("language/9/") } }
        ],
        "genera": [
            { "genus": "Seed Pokémon", "language": { "name": "en", "url": url("language/9/") } }
        ]
    })
}

/// An evolution node JSON value.
pub fn node(name: &str, children: Vec<Value>) -> Value {
    json!({
        "species": { "name": name, "url": url(&format!("pokemon-species/{}/", name)) },
        "evolves_to": children
    })
}

/// An evolution node whose species URL carries a numeric id, as upstream's do.
pub fn species_node(id: u32, name: &str, children: Vec<Value>) -> Value {
    json!({
        "species": { "name": name, "url": url(&format!("pokemon-species/{}/", id)) },
        "evolves_to": children
    })
}

/// A branch-free chain through `names` in order.
pub fn linear(names: &[&str]) -> Value {
    names
        .iter()
        .rev()
        .fold(None, |child: Option<Value>, name| {
            Some(node(name, child.into_iter().collect()))
        })
        .expect("at least one name")
}
