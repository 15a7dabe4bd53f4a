use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Elemental types as named by the API (`"fire"`, `"water"`, ...).
///
/// `Unknown` and `Shadow` exist upstream but are not main-series types; the
/// type browser hides them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
    Stellar,
    Unknown,
    Shadow,
}

impl PokemonType {
    /// True for the types a player can actually encounter on a Pokemon.
    pub fn is_main_series(self) -> bool {
        !matches!(self, PokemonType::Unknown | PokemonType::Shadow)
    }

    /// The lowercase API name, usable as a `/type/{name}` path segment.
    pub fn api_name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Fire".parse::<PokemonType>(), Ok(PokemonType::Fire));
        assert_eq!("psychic".parse::<PokemonType>(), Ok(PokemonType::Psychic));
        assert!("plasma".parse::<PokemonType>().is_err());
    }

    #[test]
    fn test_display_matches_api_name() {
        for ty in PokemonType::iter() {
            assert_eq!(ty.to_string(), ty.api_name());
        }
    }

    #[test]
    fn test_main_series_excludes_unknown_and_shadow() {
        let hidden: Vec<_> = PokemonType::iter().filter(|t| !t.is_main_series()).collect();
        assert_eq!(hidden, vec![PokemonType::Unknown, PokemonType::Shadow]);
    }
}
