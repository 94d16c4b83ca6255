//! Aggregation of stored location answers for the results page.

use std::collections::BTreeMap;

use serde::Serialize;

use super::response::{
    LocationResponse,
    SelectedPlace,
    parse_location_response,
};

/// One row of a distribution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    /// Arabic display name of the place.
    pub name: String,
    pub count: usize,
    /// Whole-number share of all counted responses.
    pub percentage: usize,
}

/// Distributions of the location answers of one survey.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    /// Stored values that parsed as location answers.
    pub response_count: usize,
    pub province_distribution: Vec<DistributionEntry>,
    pub judiciary_distribution: Vec<DistributionEntry>,
    pub area_distribution: Vec<DistributionEntry>,
}

/// Builds the three distribution tables from raw stored values.
///
/// Values that do not parse are skipped, so the percentages are shares of
/// the parseable responses. Partially answered responses count toward the
/// levels they did answer, which is why judiciary and area percentages can
/// add up to less than one hundred.
#[must_use]
pub fn summarize_location_responses<'r, I>(raw_values: I) -> LocationSummary
where
    I: IntoIterator<Item = &'r str>,
{
    let responses: Vec<LocationResponse> =
        raw_values.into_iter().filter_map(parse_location_response).collect();
    let total = responses.len();

    LocationSummary {
        response_count: total,
        province_distribution: count_distribution(&responses, total, |response| {
            Some(&response.province)
        }),
        judiciary_distribution: count_distribution(&responses, total, |response| {
            response.judiciary.as_ref()
        }),
        area_distribution: count_distribution(&responses, total, |response| {
            response.area.as_ref()
        }),
    }
}

/// Counts one level across the responses and turns it into sorted rows.
///
/// Rows are ordered by descending count, ties by name, so the table renders
/// the same way for the same answers.
fn count_distribution<F>(
    responses: &[LocationResponse],
    total: usize,
    select: F,
) -> Vec<DistributionEntry>
where
    F: Fn(&LocationResponse) -> Option<&SelectedPlace>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for response in responses {
        if let Some(place) = select(response) {
            *counts.entry(place.name.as_str()).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(name, count)| DistributionEntry {
            name: name.to_string(),
            count,
            percentage: whole_percentage(count, total),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Whole-number percentage with half-up rounding; 0 when there is nothing
/// to divide by.
const fn whole_percentage(count: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (count * 100 + total / 2) / total }
}
