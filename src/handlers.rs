use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use itertools::Itertools;
use serde::Serialize;
use std::sync::Arc;
use tera::Context;
use tracing::{error, info};

use crate::charts::DashboardCharts;
use crate::error::ApiError;
use crate::filter::{PetFilter, TYPE_OPTIONS};
use crate::models::{AnimalRecord, StatsSummary};
use crate::state::AppState;
use crate::stats::compute_stats;

/// Message shown when the detail fetch fails, whatever the cause.
const DETAIL_ERROR: &str = "Failed to load pet details";

/// Template-facing view of one animal.
#[derive(Debug, Serialize)]
pub struct PetView {
    pub id: u64,
    pub name: String,
    pub animal_type: String,
    pub breed: Option<String>,
    pub age: String,
    pub gender: String,
    pub status: String,
    pub description: Option<String>,
    pub photo: Option<String>,
}

impl From<&AnimalRecord> for PetView {
    fn from(pet: &AnimalRecord) -> Self {
        Self {
            id: pet.id,
            name: pet.name.clone().unwrap_or_default(),
            animal_type: pet.animal_type.clone(),
            breed: pet.primary_breed().map(str::to_string),
            age: pet.age.clone(),
            gender: pet.gender.clone(),
            status: pet.status.clone(),
            description: pet.description.clone().filter(|d| !d.is_empty()),
            photo: pet.primary_photo().map(str::to_string),
        }
    }
}

/// JSON body for `GET /api/stats`.
#[derive(Debug, Serialize)]
pub struct StatsPayload {
    pub stats: StatsSummary,
    pub charts: DashboardCharts,
}

/// JSON body for `GET /api/pets`.
#[derive(Debug, Serialize)]
pub struct PetsPayload {
    pub total_matches: usize,
    pub pets: Vec<AnimalRecord>,
}

fn render_template(
    tera: &tera::Tera,
    template: &str,
    context: &Context,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    tera.render(template, context).map(Html).map_err(|e| {
        error!("Template render error for '{}': {}", template, e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Render error")
    })
}

/// "Dog: 2, Cat: 1" line for the summary block.
fn type_distribution_line(stats: &StatsSummary) -> String {
    stats
        .type_counts
        .iter()
        .map(|c| format!("{}: {}", c.animal_type.as_deref().unwrap_or_default(), c.count))
        .join(", ")
}

/// Serializes chart data for embedding inside a `<script>` element.
fn charts_script_json(charts: &DashboardCharts) -> String {
    serde_json::to_string(charts)
        .unwrap_or_else(|_| "{}".to_string())
        .replace('<', "\\u003c")
}

/// GET / - Dashboard with summary statistics, charts and the filtered list.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<PetFilter>,
) -> impl IntoResponse {
    let (pets, fetch_error) = match state.petfinder.fetch_animals().await {
        Ok(pets) => (pets, None),
        Err(e) => {
            error!("Error fetching data: {}", e);
            (Vec::new(), Some(e.to_string()))
        }
    };

    let stats = compute_stats(&pets);
    let charts = DashboardCharts::build(&stats, &pets);
    let matches = filter.apply(&pets);
    let shown: Vec<PetView> = filter
        .apply_capped(&pets)
        .iter()
        .map(PetView::from)
        .collect();

    info!(
        total = stats.total,
        matches = matches.len(),
        "Rendering dashboard"
    );

    let mut context = Context::new();
    context.insert("error", &fetch_error);
    context.insert("stats", &stats);
    context.insert("avg_age", &format!("{:.2}", stats.avg_age));
    context.insert("type_distribution", &type_distribution_line(&stats));
    context.insert("charts_json", &charts_script_json(&charts));
    context.insert("pets", &shown);
    context.insert("match_count", &matches.len());
    context.insert("type_options", &TYPE_OPTIONS);

    // Pass back filter params
    context.insert("q", &filter.q);
    context.insert("type_filter", &filter.type_);

    render_template(&state.tera, "dashboard.html", &context)
}

/// GET /pet/{id} - Detail page, fetched independently of the dashboard.
///
/// Any id is accepted; one that cannot name a record renders the same
/// failure message as an upstream error.
pub async fn pet_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let fetched = match id.parse::<u64>() {
        Ok(numeric_id) => state
            .petfinder
            .fetch_animal(numeric_id)
            .await
            .map_err(|e| e.to_string()),
        Err(e) => Err(format!("invalid pet id: {}", e)),
    };

    let mut context = Context::new();
    match fetched {
        Ok(pet) => context.insert("pet", &PetView::from(&pet)),
        Err(e) => {
            error!(id = %id, "Error fetching pet: {}", e);
            context.insert("error", DETAIL_ERROR);
        }
    }

    render_template(&state.tera, "pet.html", &context)
}

/// GET /api/stats - Summary statistics and chart series for a fresh fetch.
pub async fn api_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsPayload>, ApiError> {
    let pets = state.petfinder.fetch_animals().await.map_err(|e| {
        error!("Error fetching data: {}", e);
        ApiError::bad_gateway(&e)
    })?;

    let stats = compute_stats(&pets);
    let charts = DashboardCharts::build(&stats, &pets);
    Ok(Json(StatsPayload { stats, charts }))
}

/// GET /api/pets - Filtered list, capped like the dashboard list.
pub async fn api_pets(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<PetFilter>,
) -> Result<Json<PetsPayload>, ApiError> {
    let pets = state.petfinder.fetch_animals().await.map_err(|e| {
        error!("Error fetching data: {}", e);
        ApiError::bad_gateway(&e)
    })?;

    Ok(Json(PetsPayload {
        total_matches: filter.apply(&pets).len(),
        pets: filter.apply_capped(&pets),
    }))
}

/// GET /api/pets/{id} - Single record.
pub async fn api_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<AnimalRecord>, ApiError> {
    state.petfinder.fetch_animal(id).await.map(Json).map_err(|e| {
        error!(id, "Error fetching pet: {}", e);
        ApiError::bad_gateway(&e)
    })
}

/// GET /health - Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Breeds, Photo};

    #[test]
    fn test_type_distribution_line() {
        let pets = [
            AnimalRecord {
                animal_type: "Dog".to_string(),
                ..Default::default()
            },
            AnimalRecord {
                animal_type: "Cat".to_string(),
                ..Default::default()
            },
            AnimalRecord {
                animal_type: "Dog".to_string(),
                ..Default::default()
            },
        ];

        assert_eq!(type_distribution_line(&compute_stats(&pets)), "Dog: 2, Cat: 1");
        assert_eq!(type_distribution_line(&compute_stats(&[])), "");
    }

    #[test]
    fn test_charts_json_escapes_markup() {
        let mut charts = DashboardCharts::default();
        charts.type_distribution.labels.push("</script>".to_string());
        charts.type_distribution.data.push(1);

        let json = charts_script_json(&charts);

        assert!(!json.contains("</script>"));
        assert!(json.contains("\\u003c/script>"));
    }

    #[test]
    fn test_pet_view_from_record() {
        let pet = AnimalRecord {
            id: 9,
            name: None,
            animal_type: "Bird".to_string(),
            breeds: Breeds {
                primary: Some("Parakeet".to_string()),
                ..Default::default()
            },
            description: Some(String::new()),
            photos: vec![Photo {
                medium: Some("m.jpg".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let view = PetView::from(&pet);

        assert_eq!(view.id, 9);
        assert_eq!(view.name, "");
        assert_eq!(view.breed.as_deref(), Some("Parakeet"));
        assert_eq!(view.description, None);
        assert_eq!(view.photo.as_deref(), Some("m.jpg"));
    }

    #[test]
    fn test_pet_view_keeps_whitespace_description() {
        let pet = AnimalRecord {
            description: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(PetView::from(&pet).description.as_deref(), Some("  "));
    }
}
