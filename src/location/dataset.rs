//! Static Iraq location tables.
//!
//! The dataset is a three-table export (provinces, judiciaries, areas)
//! keyed by numeric ids, with Arabic display names and partial English
//! columns. It ships with the crate, is parsed once and never mutated.

use std::sync::LazyLock;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Id the source tables use for their "none" placeholder rows.
///
/// Placeholder rows are kept in the data so it round-trips against the
/// export, but they are never offered for selection.
pub const NONE_ENTRY_ID: u32 = 0;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to parse location data: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// One province row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "province_id")]
    pub id: u32,
    /// Arabic display name.
    #[serde(rename = "المحافظة")]
    pub name: String,
    #[serde(rename = "province", skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
}

/// One judiciary (district) row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judiciary {
    #[serde(rename = "district_ID")]
    pub id: u32,
    pub province_id: u32,
    /// Arabic display name.
    #[serde(rename = "المدينة او القضاء")]
    pub name: String,
    // The trailing space in the column header is present in the source data.
    #[serde(rename = "The city or The judiciary ", skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
}

/// One area (neighborhood) row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    #[serde(rename = "Neighbor_ID")]
    pub id: u32,
    #[serde(rename = "district_ID")]
    pub judiciary_id: u32,
    pub province_id: u32,
    /// Arabic display name.
    #[serde(rename = "المنطقة او الحي")]
    pub name: String,
    #[serde(rename = "The Area or The Neighborhood", skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
}

/// The three location tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDataset {
    pub provinces: Vec<Province>,
    pub judiciaries: Vec<Judiciary>,
    pub areas: Vec<Area>,
}

/// Source for the bundled dataset.
const BUNDLED_JSON: &str = include_str!("../../assets/iraq_locations.json");

/// Bundled dataset, parsed on first use.
static BUNDLED_DATASET: LazyLock<LocationDataset> = LazyLock::new(|| {
    LocationDataset::from_json_str(BUNDLED_JSON).unwrap_or_else(|error| {
        tracing::error!("Failed to parse bundled location data: {error}");
        LocationDataset::default()
    })
});

impl LocationDataset {
    /// Parses a dataset from its JSON export form.
    ///
    /// # Errors
    /// - JSON parse errors
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The dataset bundled with the crate.
    #[must_use]
    pub fn bundled() -> &'static Self {
        &BUNDLED_DATASET
    }

    /// Provinces offered for selection, placeholder row excluded.
    #[must_use]
    pub fn list_provinces(&self) -> Vec<&Province> {
        self.provinces.iter().filter(|province| province.id != NONE_ENTRY_ID).collect()
    }

    /// Judiciaries of one province, placeholder row excluded.
    ///
    /// Unknown province ids yield an empty list, there is no error case.
    #[must_use]
    pub fn list_judiciaries(&self, province_id: u32) -> Vec<&Judiciary> {
        self.judiciaries
            .iter()
            .filter(|judiciary| {
                judiciary.province_id == province_id && judiciary.id != NONE_ENTRY_ID
            })
            .collect()
    }

    /// Areas of one judiciary, placeholder row excluded.
    ///
    /// Both parent ids must match; a judiciary id from another province
    /// yields an empty list.
    #[must_use]
    pub fn list_areas(&self, province_id: u32, judiciary_id: u32) -> Vec<&Area> {
        self.areas
            .iter()
            .filter(|area| {
                area.province_id == province_id
                    && area.judiciary_id == judiciary_id
                    && area.id != NONE_ENTRY_ID
            })
            .collect()
    }

    /// Looks up a province row by id.
    #[must_use]
    pub fn find_province(&self, id: u32) -> Option<&Province> {
        self.provinces.iter().find(|province| province.id == id)
    }

    /// Looks up a judiciary row by id within a province.
    #[must_use]
    pub fn find_judiciary(&self, province_id: u32, id: u32) -> Option<&Judiciary> {
        self.judiciaries
            .iter()
            .find(|judiciary| judiciary.id == id && judiciary.province_id == province_id)
    }

    /// Looks up an area row by id within a judiciary.
    #[must_use]
    pub fn find_area(&self, province_id: u32, judiciary_id: u32, id: u32) -> Option<&Area> {
        self.areas.iter().find(|area| {
            area.id == id && area.province_id == province_id && area.judiciary_id == judiciary_id
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn test_bundled_dataset_parses() {
        let dataset = LocationDataset::bundled();

        expect_that!(dataset.provinces, not(is_empty()));
        expect_that!(dataset.judiciaries, not(is_empty()));
        expect_that!(dataset.areas, not(is_empty()));
    }

    #[googletest::test]
    fn test_list_provinces_excludes_placeholder_row() {
        let dataset = LocationDataset::bundled();

        let provinces = dataset.list_provinces();

        expect_that!(provinces, len(eq(18)));
        expect_that!(provinces.iter().any(|province| province.id == NONE_ENTRY_ID), eq(false));
        expect_that!(provinces.iter().any(|province| province.name == "بغداد"), eq(true));
    }

    #[googletest::test]
    fn test_list_judiciaries_filters_by_province() {
        let dataset = LocationDataset::bundled();

        let judiciaries = dataset.list_judiciaries(1);

        expect_that!(judiciaries, len(eq(4)));
        expect_that!(judiciaries.iter().all(|judiciary| judiciary.province_id == 1), eq(true));
        expect_that!(judiciaries.iter().any(|judiciary| judiciary.id == NONE_ENTRY_ID), eq(false));
    }

    #[googletest::test]
    fn test_list_judiciaries_for_unknown_province_is_empty() {
        let dataset = LocationDataset::bundled();

        expect_that!(dataset.list_judiciaries(999), is_empty());
    }

    #[googletest::test]
    fn test_list_areas_requires_matching_parent_pair() {
        let dataset = LocationDataset::bundled();

        expect_that!(dataset.list_areas(1, 101), len(eq(4)));
        // District 101 belongs to province 1, not 2.
        expect_that!(dataset.list_areas(2, 101), is_empty());
    }

    #[googletest::test]
    fn test_find_judiciary_enforces_province() {
        let dataset = LocationDataset::bundled();

        expect_that!(dataset.find_judiciary(1, 101), some(anything()));
        expect_that!(dataset.find_judiciary(2, 101), none());
    }

    #[googletest::test]
    fn test_find_area_enforces_full_path() {
        let dataset = LocationDataset::bundled();

        expect_that!(dataset.find_area(1, 101, 10101), some(anything()));
        expect_that!(dataset.find_area(1, 102, 10101), none());
    }

    #[googletest::test]
    fn test_from_json_str_rejects_malformed_input() {
        let result = LocationDataset::from_json_str("not json");

        expect_that!(result, err(anything()));
    }

    #[googletest::test]
    fn test_rows_keep_source_column_names() {
        let dataset = LocationDataset::bundled();
        let baghdad = dataset.find_province(1).unwrap();

        let json = serde_json::to_value(baghdad).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "province_id": 1,
                "المحافظة": "بغداد",
                "province": "Baghdad"
            })
        );
    }

    #[googletest::test]
    fn test_judiciary_english_column_keeps_trailing_space() {
        let dataset = LocationDataset::bundled();
        let karkh = dataset.find_judiciary(1, 101).unwrap();

        let json = serde_json::to_value(karkh).unwrap();

        expect_that!(json.get("The city or The judiciary "), some(eq(&serde_json::json!("Karkh"))));
    }
}
