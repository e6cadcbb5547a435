//! Name and type filtering for the dashboard list.

use serde::Deserialize;

use crate::models::AnimalRecord;

/// Maximum number of matches shown in the list.
pub const DISPLAY_LIMIT: usize = 10;

/// Types offered in the dashboard's type selector.
pub const TYPE_OPTIONS: [&str; 5] = ["Dog", "Cat", "Bird", "Rabbit", "Small & Furry"];

/// Query parameters for list filtering.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PetFilter {
    /// Case-insensitive substring of the name.
    #[serde(default, deserialize_with = "empty_string_as_none_str")]
    pub q: Option<String>,
    /// Exact type to keep.
    #[serde(rename = "type", default, deserialize_with = "empty_string_as_none_str")]
    pub type_: Option<String>,
}

fn empty_string_as_none_str<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Ok(Some(s)),
    }
}

impl PetFilter {
    /// Whether `pet` passes both filters.
    ///
    /// Unnamed records never match, even with an empty query.
    pub fn matches(&self, pet: &AnimalRecord) -> bool {
        let matches_search = pet.name.as_ref().is_some_and(|name| match &self.q {
            Some(q) => name.to_lowercase().contains(&q.to_lowercase()),
            None => true,
        });
        let matches_type = self
            .type_
            .as_ref()
            .is_none_or(|t| pet.animal_type == *t);

        matches_search && matches_type
    }

    /// All matching records, in input order.
    pub fn apply<'a>(&self, pets: &'a [AnimalRecord]) -> Vec<&'a AnimalRecord> {
        pets.iter().filter(|p| self.matches(p)).collect()
    }

    /// The first [`DISPLAY_LIMIT`] matching records.
    pub fn apply_capped(&self, pets: &[AnimalRecord]) -> Vec<AnimalRecord> {
        pets.iter()
            .filter(|p| self.matches(p))
            .take(DISPLAY_LIMIT)
            .cloned()
            .collect()
    }
}
