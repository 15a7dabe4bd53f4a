use crate::resources::NamedResource;
use serde::{Deserialize, Serialize};

/// The `/evolution-chain/{id}` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChainRecord {
    #[serde(default)]
    pub id: u32,
    pub chain: EvolutionNode,
}

/// One stage of an evolution tree. The API allows arbitrary depth and
/// branching (Eevee has eight children at the second level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self
            .evolves_to
            .iter()
            .map(EvolutionNode::node_count)
            .sum::<usize>()
    }

    /// Number of levels in this subtree; a lone root has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .evolves_to
            .iter()
            .map(EvolutionNode::depth)
            .max()
            .unwrap_or(0)
    }
}
