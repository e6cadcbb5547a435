//! Chart series for the dashboard's two charts.

use serde::Serialize;

use crate::models::{AnimalRecord, StatsSummary};
use crate::stats::AGE_MAPPING;

/// Labels and values for one chart, as handed to the chart script.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

/// Both dashboard charts.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct DashboardCharts {
    pub type_distribution: ChartSeries,
    pub age_groups: ChartSeries,
}

impl DashboardCharts {
    pub fn build(stats: &StatsSummary, pets: &[AnimalRecord]) -> Self {
        Self {
            type_distribution: type_distribution(stats),
            age_groups: age_groups(pets),
        }
    }
}

/// Pie breakdown of records per type, in first-occurrence order.
pub fn type_distribution(stats: &StatsSummary) -> ChartSeries {
    let (labels, data) = stats
        .type_counts
        .iter()
        .map(|c| (c.animal_type.clone().unwrap_or_default(), c.count))
        .unzip();
    ChartSeries { labels, data }
}

/// Histogram over the four known age labels. Other labels are not counted.
pub fn age_groups(pets: &[AnimalRecord]) -> ChartSeries {
    let mut data = vec![0; AGE_MAPPING.len()];
    for pet in pets {
        if let Some(bucket) = AGE_MAPPING.iter().position(|(label, _)| *label == pet.age) {
            data[bucket] += 1;
        }
    }

    ChartSeries {
        labels: AGE_MAPPING.iter().map(|(label, _)| label.to_string()).collect(),
        data,
    }
}
