use serde::{Deserialize, Serialize};

/// A `{name, url}` pair as used throughout the API to point at another document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare `{url}` link, used where the API omits the name (e.g. evolution chains).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// Paginated listing returned by collection endpoints such as `/pokemon` and `/type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl NamedResource {
    /// Numeric id encoded as the last path segment of the resource URL,
    /// e.g. `https://pokeapi.co/api/v2/pokemon-species/25/` -> `25`.
    pub fn id_from_url(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_url_with_trailing_slash() {
        let resource = NamedResource {
            name: "pikachu".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon-species/25/".to_string(),
        };
        assert_eq!(resource.id_from_url(), Some(25));
    }

    #[test]
    fn test_id_from_url_without_numeric_segment() {
        let resource = NamedResource {
            name: "fire".to_string(),
            url: "https://pokeapi.co/api/v2/type/fire".to_string(),
        };
        assert_eq!(resource.id_from_url(), None);
    }

    #[test]
    fn test_resource_list_tolerates_missing_links() {
        let json = r#"{"count": 1, "results": [{"name": "bulbasaur", "url": "u"}]}"#;
        let list: ResourceList = serde_json::from_str(json).unwrap();
        assert_eq!(list.count, 1);
        assert!(list.next.is_none());
        assert_eq!(list.results[0].name, "bulbasaur");
    }
}
