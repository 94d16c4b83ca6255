//! Stored response form of a location selection.

use serde::{
    Deserialize,
    Serialize,
};

use super::dataset::{
    Area,
    Judiciary,
    Province,
};

/// One chosen row as stored in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPlace {
    pub id: u32,
    /// Arabic display name at the time of answering.
    pub name: String,
    #[serde(default)]
    pub is_other: bool,
}

impl SelectedPlace {
    /// `isOther` is carried for stored-format compatibility; the picker has
    /// no free-text escape, so it is always false.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), is_other: false }
    }
}

impl From<&Province> for SelectedPlace {
    fn from(row: &Province) -> Self {
        Self::new(row.id, row.name.as_str())
    }
}

impl From<&Judiciary> for SelectedPlace {
    fn from(row: &Judiciary) -> Self {
        Self::new(row.id, row.name.as_str())
    }
}

impl From<&Area> for SelectedPlace {
    fn from(row: &Area) -> Self {
        Self::new(row.id, row.name.as_str())
    }
}

/// Response payload of the location question.
///
/// Stored as a JSON string on the response record. `judiciary` and `area`
/// are explicit nulls while unanswered; the stored format always carries
/// all three keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub province: SelectedPlace,
    #[serde(default)]
    pub judiciary: Option<SelectedPlace>,
    #[serde(default)]
    pub area: Option<SelectedPlace>,
}

/// Parses one stored response value.
///
/// An unanswered question is stored as the empty string; that and malformed
/// JSON both come back as `None`, so consumers skip rows instead of
/// failing. Malformed values are logged.
#[must_use]
pub fn parse_location_response(raw: &str) -> Option<LocationResponse> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            tracing::warn!("Failed to parse stored location value: {error}");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    #[googletest::test]
    fn test_partial_response_serializes_with_explicit_nulls() {
        let response = LocationResponse {
            province: SelectedPlace::new(1, "بغداد"),
            judiciary: None,
            area: None,
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "province": { "id": 1, "name": "بغداد", "isOther": false },
                "judiciary": null,
                "area": null
            })
        );
    }

    #[googletest::test]
    fn test_parse_round_trips_a_complete_response() {
        let raw = r#"{
            "province": { "id": 1, "name": "بغداد", "isOther": false },
            "judiciary": { "id": 101, "name": "الكرخ", "isOther": false },
            "area": { "id": 10101, "name": "المنصور", "isOther": false }
        }"#;

        let parsed = parse_location_response(raw).unwrap();

        expect_that!(parsed.province.id, eq(1));
        assert_eq!(parsed.judiciary, Some(SelectedPlace::new(101, "الكرخ")));
        assert_eq!(parsed.area, Some(SelectedPlace::new(10101, "المنصور")));
    }

    #[googletest::test]
    fn test_parse_tolerates_missing_optional_fields() {
        let raw = r#"{ "province": { "id": 2, "name": "البصرة" } }"#;

        let parsed = parse_location_response(raw).unwrap();

        expect_that!(parsed.province.is_other, eq(false));
        expect_that!(parsed.judiciary, none());
        expect_that!(parsed.area, none());
    }

    #[googletest::test]
    fn test_parse_of_empty_value_is_none() {
        expect_that!(parse_location_response(""), none());
    }

    #[googletest::test]
    fn test_parse_of_malformed_value_is_none() {
        expect_that!(parse_location_response("{ not json"), none());
        expect_that!(parse_location_response("[1, 2, 3]"), none());
    }

    #[googletest::test]
    fn test_selected_place_from_rows_uses_arabic_names() {
        let province = Province {
            id: 1,
            name: "بغداد".to_string(),
            english_name: Some("Baghdad".to_string()),
        };

        let place = SelectedPlace::from(&province);

        assert_eq!(place, SelectedPlace::new(1, "بغداد"));
    }
}
