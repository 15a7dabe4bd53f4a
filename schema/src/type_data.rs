use crate::resources::NamedResource;
use serde::{Deserialize, Serialize};

/// The `/type/{name}` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeMember {
    #[serde(default)]
    pub slot: u8,
    pub pokemon: NamedResource,
}
