//! Data models for Petfinder records and the statistics derived from them.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt: Option<T> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Token endpoint response. Only the bearer token is used.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Wrapper for the animals listing endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AnimalsResponse {
    #[serde(default)]
    pub animals: Vec<AnimalRecord>,
}

/// Wrapper for the single-animal endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnimalResponse {
    pub animal: AnimalRecord,
}

/// Represents a single animal listing from Petfinder.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AnimalRecord {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    /// Categorical type such as "Dog", "Cat" or "Small & Furry".
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub animal_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub breeds: Breeds,
    /// Age label ("Baby", "Young", "Adult", "Senior"), not a number.
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
}

impl AnimalRecord {
    /// Medium-sized URL of the first photo, if the record has one.
    pub fn primary_photo(&self) -> Option<&str> {
        self.photos.first().and_then(|p| p.medium.as_deref())
    }

    pub fn primary_breed(&self) -> Option<&str> {
        self.breeds.primary.as_deref()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Breeds {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mixed: bool,
}

/// One photo in the sizes Petfinder provides.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Photo {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
}

/// Number of records bearing a given type.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct TypeCount {
    /// `None` only for the empty-input sentinel of `most_common_type`.
    #[serde(rename = "type")]
    pub animal_type: Option<String>,
    pub count: usize,
}

/// A record name paired with its parsed integer age.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PetAge {
    pub name: Option<String>,
    pub age: i64,
}

/// Statistics computed from one fetch of animal records.
///
/// Recomputed wholesale on every fetch; it carries no identity of its own.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StatsSummary {
    /// Number of records in the fetch.
    pub total: usize,
    /// Mean of the age proxies, rounded to two decimals.
    pub avg_age: f64,
    /// Per-type counts in first-occurrence order.
    pub type_counts: Vec<TypeCount>,
    pub most_common_type: TypeCount,
    pub oldest_pet: Option<PetAge>,
    pub youngest_pet: Option<PetAge>,
}
