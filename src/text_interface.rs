//! Text renderings shared by the CLI and the MCP server.
//!
//! Each `handle_*` function runs one catalog operation and turns both success
//! and failure into a human-readable message, so the front ends never format
//! errors themselves.

use crate::catalog::Catalog;
use crate::errors::CatalogError;
use crate::evolution::ResolvedEvolutionEntry;
use crate::identifier::PokemonId;
use crate::views::{CatalogPage, PokemonDetail, SearchOutcome, TypeOverview};
use schema::PokemonType;

/// Formats a listing page with a hint for fetching the next one
pub fn display_page(page: &CatalogPage) -> String {
    let mut output = String::from("--- Explore Pokémon ---\n");
    for card in &page.cards {
        output.push_str(&format!("  {}\n", card));
    }
    if page.cards.is_empty() {
        output.push_str(&format!(
            "No Pokémon at offset {} (of {})\n",
            page.offset, page.total
        ));
    } else {
        let first = u64::from(page.offset) + 1;
        let last = u64::from(page.offset) + page.cards.len() as u64;
        output.push_str(&format!("Showing {}-{} of {}\n", first, last, page.total));
    }
    if let Some(next) = page.next_offset {
        output.push_str(&format!("More available: use offset {}\n", next));
    }
    output
}

/// Formats an evolution line as `#001 bulbasaur -> #002 ivysaur -> ...`
pub fn display_evolution_line(entries: &[ResolvedEvolutionEntry]) -> String {
    if entries.is_empty() {
        return "No evolution data available.".to_string();
    }
    entries
        .iter()
        .map(|e| format!("#{:03} {}", e.id, e.name))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Formats the full detail view
pub fn display_detail(detail: &PokemonDetail) -> String {
    let mut output = format!("--- {} ---\n", detail.card);
    if let Some(genus) = &detail.genus {
        output.push_str(&format!("{}\n", genus));
    }
    output.push_str(&format!("{}\n\n", detail.description));
    output.push_str(&format!(
        "Height: {:.1} m  Weight: {:.1} kg",
        detail.height_meters(),
        detail.weight_kilograms()
    ));
    if let Some(exp) = detail.base_experience {
        output.push_str(&format!("  Base exp: {}", exp));
    }
    output.push('\n');

    output.push_str("\nBase stats:\n");
    for stat in &detail.stats {
        output.push_str(&format!("  {:<8} {:>3}\n", stat.label(), stat.base));
    }

    output.push_str("\nAbilities:\n");
    for ability in &detail.abilities {
        let marker = if ability.hidden { " (hidden)" } else { "" };
        output.push_str(&format!("  {}{}\n", ability.name, marker));
    }

    output.push_str(&format!(
        "\nEvolution: {}\n",
        display_evolution_line(&detail.evolution)
    ));
    if let Some(image) = &detail.card.image_url {
        output.push_str(&format!("Artwork: {}\n", image));
    }
    output
}

/// Formats the type list
pub fn display_types(types: &[PokemonType]) -> String {
    let mut output = String::from("Pokémon Types:\n");
    for ty in types {
        output.push_str(&format!("  {}\n", ty));
    }
    output
}

/// Formats a type's matchups and sample members
pub fn display_type_overview(overview: &TypeOverview) -> String {
    let list = |names: &[String]| {
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        }
    };
    let m = &overview.matchups;
    let mut output = format!("--- {} type ---\n", overview.pokemon_type);
    output.push_str(&format!("Weak to: {}\n", list(&m.weak_to)));
    output.push_str(&format!("Strong against: {}\n", list(&m.strong_against)));
    output.push_str(&format!("Resists: {}\n", list(&m.resists)));
    output.push_str(&format!("Immune to: {}\n", list(&m.immune_to)));
    output.push_str(&format!(
        "\n{} Pokémon (showing {}):\n",
        overview.member_count,
        overview.members.len()
    ));
    for card in &overview.members {
        output.push_str(&format!("  {}\n", card));
    }
    output
}

/// Human-readable message for a failed catalog call
pub fn display_error(error: &CatalogError) -> String {
    match error {
        CatalogError::NotFound(what) => format!("Not found: {}.", what),
        CatalogError::InvalidIdentifier(raw) => {
            format!("'{}' is not a Pokémon number or name.", raw)
        }
        CatalogError::Cancelled => "The request was cancelled.".to_string(),
        other => format!("Error loading Pokémon data: {}", other),
    }
}

/// Handles the "list" command
pub async fn handle_list_command(catalog: &Catalog, offset: u32) -> Result<String, String> {
    catalog
        .list_page(offset)
        .await
        .map(|page| display_page(&page))
        .map_err(|e| display_error(&e))
}

/// Handles the "search" command
pub async fn handle_search_command(catalog: &Catalog, term: &str) -> Result<String, String> {
    if term.trim().is_empty() {
        return Err("What Pokémon do you want to search for? (e.g., 'pikachu')".to_string());
    }
    match catalog.search(term).await {
        Ok(SearchOutcome::Found(card)) => Ok(format!("--- Search Results ---\n  {}\n", card)),
        Ok(no_match) => Err(no_match.message()),
        Err(e) => Err(display_error(&e)),
    }
}

/// Handles the "show" command for the detail view
pub async fn handle_detail_command(catalog: &Catalog, id: &str) -> Result<String, String> {
    let id: PokemonId = id.parse().map_err(|e| display_error(&e))?;
    catalog
        .pokemon_detail(&id)
        .await
        .map(|detail| display_detail(&detail))
        .map_err(|e| display_error(&e))
}

/// Handles the "evolution" command
pub async fn handle_evolution_command(catalog: &Catalog, id: &str) -> Result<String, String> {
    let id: PokemonId = id.parse().map_err(|e| display_error(&e))?;
    catalog
        .evolution_line(&id)
        .await
        .map(|entries| display_evolution_line(&entries))
        .map_err(|e| display_error(&e))
}

/// Handles the "types" command
pub async fn handle_types_command(catalog: &Catalog) -> Result<String, String> {
    catalog
        .list_types()
        .await
        .map(|types| display_types(&types))
        .map_err(|e| display_error(&e))
}

/// Handles the "type" command for a single type
pub async fn handle_type_command(catalog: &Catalog, type_name: &str) -> Result<String, String> {
    let pokemon_type: PokemonType = type_name
        .trim()
        .parse()
        .map_err(|_| format!("The type '{}' was not found.", type_name))?;
    catalog
        .type_overview(pokemon_type)
        .await
        .map(|overview| display_type_overview(&overview))
        .map_err(|e| display_error(&e))
}
