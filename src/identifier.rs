use crate::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anything the `/pokemon/{idOrName}` endpoint accepts: a positive pokedex
/// number or a lowercase slug name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PokemonId {
    Number(u32),
    Name(String),
}

impl PokemonId {
    pub fn number(n: u32) -> Result<Self, CatalogError> {
        if n == 0 {
            return Err(CatalogError::InvalidIdentifier(n.to_string()));
        }
        Ok(PokemonId::Number(n))
    }
}

impl FromStr for PokemonId {
    type Err = CatalogError;

    /// Trims, lowercases, and joins inner whitespace with `-` so that
    /// `"Mr Mime"` becomes `mr-mime`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();

        if normalized.is_empty() {
            return Err(CatalogError::InvalidIdentifier(s.to_string()));
        }

        if normalized.chars().all(|c| c.is_ascii_digit()) {
            let n: u32 = normalized
                .parse()
                .map_err(|_| CatalogError::InvalidIdentifier(s.to_string()))?;
            return PokemonId::number(n).map_err(|_| CatalogError::InvalidIdentifier(s.to_string()));
        }

        // "." and ".." would be collapsed by URL joining and leave `/pokemon/`
        if normalized.starts_with('-')
            || normalized.chars().all(|c| c == '.')
            || normalized.contains('/')
            || normalized.contains('?')
            || normalized.contains('#')
        {
            return Err(CatalogError::InvalidIdentifier(s.to_string()));
        }

        Ok(PokemonId::Name(normalized))
    }
}

impl From<u32> for PokemonId {
    fn from(n: u32) -> Self {
        PokemonId::Number(n)
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokemonId::Number(n) => write!(f, "{}", n),
            PokemonId::Name(name) => write!(f, "{}", name),
        }
    }
}
