//! Presentation-ready shapes built from upstream documents.
//!
//! Nothing here performs I/O; these are pure conversions the CLI, the MCP
//! server, or any other front end can render directly.

use crate::errors::CatalogError;
use crate::evolution::ResolvedEvolutionEntry;
use schema::{PokemonRecord, PokemonType, SpeciesRecord, StatSlot};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Stat values at or above this fill a stat bar completely.
pub const STAT_BAR_MAX: u32 = 150;

const DESCRIPTION_LANGUAGE: &str = "en";

/// Compact summary used on listing, search and type pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCard {
    pub id: u32,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub image_url: Option<String>,
}

impl PokemonCard {
    /// Pokedex number padded to three digits: `#001`, `#025`, `#1010`.
    pub fn number_label(&self) -> String {
        format!("#{:03}", self.id)
    }

    /// First-slot type, or `Normal` when the record lists none.
    pub fn primary_type(&self) -> PokemonType {
        self.types.first().copied().unwrap_or(PokemonType::Normal)
    }
}

impl From<&PokemonRecord> for PokemonCard {
    fn from(record: &PokemonRecord) -> Self {
        let mut slots: Vec<_> = record.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);

        let types = slots
            .into_iter()
            .filter_map(|slot| match slot.type_.name.parse::<PokemonType>() {
                Ok(ty) => Some(ty),
                Err(_) => {
                    warn!(pokemon = %record.name, type_name = %slot.type_.name, "unrecognised type");
                    None
                }
            })
            .collect();

        Self {
            id: record.id,
            name: record.name.clone(),
            types,
            image_url: record.artwork_url().map(str::to_string),
        }
    }
}

impl fmt::Display for PokemonCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<&str> = self.types.iter().map(|t| t.api_name()).collect();
        write!(f, "{} {} [{}]", self.number_label(), self.name, types.join("/"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    /// API stat name, e.g. `special-attack`.
    pub name: String,
    pub base: u32,
}

impl StatLine {
    pub fn label(&self) -> &str {
        stat_label(&self.name)
    }

    /// Percentage of the stat bar to fill, capped at 100.
    pub fn bar_percent(&self) -> u32 {
        (self.base * 100 / STAT_BAR_MAX).min(100)
    }
}

impl From<&StatSlot> for StatLine {
    fn from(slot: &StatSlot) -> Self {
        Self {
            name: slot.stat.name.clone(),
            base: slot.base_stat,
        }
    }
}

/// Display label for an API stat name; unknown names are returned unchanged.
pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityLine {
    pub name: String,
    pub hidden: bool,
}

/// Everything the detail screen shows for one Pokemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub card: PokemonCard,
    /// Decimetres, as reported upstream.
    pub height: u32,
    /// Hectograms, as reported upstream.
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub stats: Vec<StatLine>,
    pub abilities: Vec<AbilityLine>,
    pub description: String,
    pub genus: Option<String>,
    pub evolution: Vec<ResolvedEvolutionEntry>,
}

impl PokemonDetail {
    pub fn from_records(
        pokemon: &PokemonRecord,
        species: &SpeciesRecord,
        evolution: Vec<ResolvedEvolutionEntry>,
    ) -> Self {
        Self {
            card: PokemonCard::from(pokemon),
            height: pokemon.height,
            weight: pokemon.weight,
            base_experience: pokemon.base_experience,
            stats: pokemon.stats.iter().map(StatLine::from).collect(),
            abilities: pokemon
                .abilities
                .iter()
                .map(|slot| AbilityLine {
                    name: slot.ability.name.clone(),
                    hidden: slot.is_hidden,
                })
                .collect(),
            description: species
                .flavor_text(DESCRIPTION_LANGUAGE)
                .unwrap_or_else(|| "No English description available.".to_string()),
            genus: species.genus(DESCRIPTION_LANGUAGE).map(str::to_string),
            evolution,
        }
    }

    pub fn height_meters(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kilograms(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

/// One page of the main listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub offset: u32,
    /// Total number of Pokemon upstream.
    pub total: u32,
    pub cards: Vec<PokemonCard>,
    /// Offset of the following page, `None` on the last page.
    pub next_offset: Option<u32>,
}

/// Result of a direct-lookup search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Found(PokemonCard),
    NoMatch { query: String },
}

impl SearchOutcome {
    pub fn message(&self) -> String {
        match self {
            SearchOutcome::Found(card) => format!("Found {}", card),
            SearchOutcome::NoMatch { query } => format!("No Pokémon found matching \"{}\"", query),
        }
    }
}

/// The six damage-relation lists of a type, as type names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMatchups {
    pub weak_to: Vec<String>,
    pub strong_against: Vec<String>,
    pub resists: Vec<String>,
    pub not_very_effective_against: Vec<String>,
    pub immune_to: Vec<String>,
    pub no_effect_against: Vec<String>,
}

impl From<&schema::DamageRelations> for TypeMatchups {
    fn from(relations: &schema::DamageRelations) -> Self {
        let names = |list: &[schema::NamedResource]| -> Vec<String> {
            list.iter().map(|r| r.name.clone()).collect()
        };
        Self {
            weak_to: names(&relations.double_damage_from),
            strong_against: names(&relations.double_damage_to),
            resists: names(&relations.half_damage_from),
            not_very_effective_against: names(&relations.half_damage_to),
            immune_to: names(&relations.no_damage_from),
            no_effect_against: names(&relations.no_damage_to),
        }
    }
}

/// Everything the type detail screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOverview {
    pub pokemon_type: PokemonType,
    pub matchups: TypeMatchups,
    /// Total members upstream; `members` holds at most the configured limit.
    pub member_count: usize,
    pub members: Vec<PokemonCard>,
}

/// View state for an asynchronous load, in place of separate loading/error/data flags.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Success(T),
    Failure(CatalogError),
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(value) => Loadable::Success(value),
            Err(error) => Loadable::Failure(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            Loadable::Failure(error) => Some(error),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Loadable::Loading => Loadable::Loading,
            Loadable::Success(value) => Loadable::Success(f(value)),
            Loadable::Failure(error) => Loadable::Failure(error),
        }
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::{AbilitySlot, NamedResource, TypeSlot};

    fn resource(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    fn record() -> PokemonRecord {
        serde_json::from_value(serde_json::json!({
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "base_experience": 267,
            "types": [
                {"slot": 2, "type": {"name": "flying", "url": ""}},
                {"slot": 1, "type": {"name": "fire", "url": ""}}
            ],
            "stats": [
                {"base_stat": 78, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 109, "stat": {"name": "special-attack", "url": ""}},
                {"base_stat": 200, "stat": {"name": "speed", "url": ""}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_card_orders_types_by_slot() {
        let card = PokemonCard::from(&record());
        assert_eq!(card.types, vec![PokemonType::Fire, PokemonType::Flying]);
        assert_eq!(card.primary_type(), PokemonType::Fire);
        assert_eq!(card.number_label(), "#006");
        assert_eq!(card.image_url, None);
        assert_eq!(card.to_string(), "#006 charizard [fire/flying]");
    }

    #[test]
    fn test_card_without_types_defaults_to_normal() {
        let mut rec = record();
        rec.types.clear();
        rec.types.push(TypeSlot {
            slot: 1,
            type_: resource("plasma"),
        });
        let card = PokemonCard::from(&rec);
        assert!(card.types.is_empty());
        assert_eq!(card.primary_type(), PokemonType::Normal);
    }

    #[test]
    fn test_stat_lines() {
        let detail = PokemonDetail::from_records(
            &record(),
            &SpeciesRecord {
                id: 6,
                name: "charizard".to_string(),
                evolution_chain: None,
                flavor_text_entries: vec![],
                genera: vec![],
            },
            vec![],
        );
        let labels: Vec<&str> = detail.stats.iter().map(StatLine::label).collect();
        assert_eq!(labels, vec!["HP", "Sp. Atk", "Speed"]);
        let bars: Vec<u32> = detail.stats.iter().map(StatLine::bar_percent).collect();
        assert_eq!(bars, vec![52, 72, 100]);
        assert_eq!(detail.description, "No English description available.");
        assert_eq!(detail.height_meters(), 1.7);
        assert_eq!(detail.weight_kilograms(), 90.5);
    }

    #[test]
    fn test_detail_abilities_keep_hidden_flag() {
        let mut rec = record();
        rec.abilities = vec![
            AbilitySlot {
                ability: resource("blaze"),
                is_hidden: false,
                slot: 1,
            },
            AbilitySlot {
                ability: resource("solar-power"),
                is_hidden: true,
                slot: 3,
            },
        ];
        let species: SpeciesRecord = serde_json::from_value(serde_json::json!({})).unwrap();
        let detail = PokemonDetail::from_records(&rec, &species, vec![]);
        assert_eq!(
            detail.abilities,
            vec![
                AbilityLine {
                    name: "blaze".to_string(),
                    hidden: false
                },
                AbilityLine {
                    name: "solar-power".to_string(),
                    hidden: true
                },
            ]
        );
    }

    #[test]
    fn test_stat_label_passthrough() {
        assert_eq!(stat_label("accuracy"), "accuracy");
    }

    #[test]
    fn test_search_no_match_message() {
        let outcome = SearchOutcome::NoMatch {
            query: "missingno".to_string(),
        };
        assert_eq!(outcome.message(), "No Pokémon found matching \"missingno\"");
    }

    #[test]
    fn test_loadable_transitions() {
        let loading: Loadable<u32> = Loadable::default();
        assert!(loading.is_loading());

        let done = Loadable::from_result(Ok(3)).map(|n| n * 2);
        assert_eq!(done.value(), Some(&6));

        let failed: Loadable<u32> =
            Loadable::from_result(Err(CatalogError::NotFound("pokemon 0".to_string())));
        assert!(failed.error().is_some_and(CatalogError::is_not_found));
        assert_eq!(failed.value(), None);
    }
}
