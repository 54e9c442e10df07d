//! Resource types the search endpoint can filter results by

use std::collections::BTreeSet;

use serde::Serialize;

/// A category of result returned by the search resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Character,
    Issue,
    Location,
    Object,
    Person,
    Publisher,
    StoryArc,
    Team,
    Volume,
}

impl ResourceType {
    /// Returns a slice containing all resource type variants.
    pub fn all() -> &'static [ResourceType] {
        &[
            ResourceType::Character,
            ResourceType::Issue,
            ResourceType::Location,
            ResourceType::Object,
            ResourceType::Person,
            ResourceType::Publisher,
            ResourceType::StoryArc,
            ResourceType::Team,
            ResourceType::Volume,
        ]
    }

    /// The name the API uses for this resource type
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Character => "character",
            ResourceType::Issue => "issue",
            ResourceType::Location => "location",
            ResourceType::Object => "object",
            ResourceType::Person => "person",
            ResourceType::Publisher => "publisher",
            ResourceType::StoryArc => "story_arc",
            ResourceType::Team => "team",
            ResourceType::Volume => "volume",
        }
    }

    /// Parses an API resource name. Matching is exact.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<ResourceType> {
        ResourceType::all().iter().copied().find(|r| r.as_str() == s)
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intersects the requested resources with the known resource types.
///
/// Returns the surviving names joined by commas, or `None` when nothing
/// requested is a known resource type (including an empty request).
/// Unknown names and duplicates are dropped silently.
pub fn validate_resources<S: AsRef<str>>(resources: &[S]) -> Option<String> {
    let valid: BTreeSet<ResourceType> = resources
        .iter()
        .filter_map(|r| ResourceType::from_str(r.as_ref()))
        .collect();

    if valid.is_empty() {
        return None;
    }

    Some(
        valid
            .iter()
            .map(ResourceType::as_str)
            .collect::<Vec<_>>()
            .join(","),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_nine_types() {
        assert_eq!(ResourceType::all().len(), 9);
    }

    #[test]
    fn test_from_str_round_trips_every_name() {
        for resource in ResourceType::all() {
            assert_eq!(ResourceType::from_str(resource.as_str()), Some(*resource));
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!(ResourceType::from_str("Issue"), None);
        assert_eq!(ResourceType::from_str(" issue"), None);
        assert_eq!(ResourceType::from_str("story arc"), None);
    }

    #[test]
    fn test_validate_empty_is_none() {
        let empty: [&str; 0] = [];
        assert_eq!(validate_resources(&empty), None);
    }

    #[test]
    fn test_validate_only_invalid_is_none() {
        assert_eq!(validate_resources(&["comic", "hero", "ISSUE"]), None);
    }

    #[test]
    fn test_validate_keeps_exactly_requested_valid_types() {
        let joined = validate_resources(&["issue", "volume"]).expect("should be Some");
        let mut tokens: Vec<&str> = joined.split(',').collect();
        tokens.sort();
        assert_eq!(tokens, vec!["issue", "volume"]);
    }

    #[test]
    fn test_validate_drops_invalid_and_duplicates() {
        let joined = validate_resources(&["team", "bogus", "team", "story_arc"])
            .expect("should be Some");
        let mut tokens: Vec<&str> = joined.split(',').collect();
        tokens.sort();
        assert_eq!(tokens, vec!["story_arc", "team"]);
    }

    #[test]
    fn test_validate_accepts_owned_strings() {
        let owned = vec!["publisher".to_string()];
        assert_eq!(validate_resources(&owned), Some("publisher".to_string()));
    }
}
