//! Cascading province, judiciary and area selection.

use super::dataset::{
    Area,
    Judiciary,
    LocationDataset,
    NONE_ENTRY_ID,
    Province,
};
use super::response::{
    LocationResponse,
    parse_location_response,
};

/// Selection state of the location question.
///
/// The three levels cascade: a judiciary is only ever set while its province
/// is, and an area only while both parents are. Changing a parent clears
/// everything below it. All operations are total; ids that do not resolve
/// against the dataset degrade to an empty level and a log line.
#[derive(Debug, Clone, Copy)]
pub struct LocationSelection<'a> {
    /// Dataset the selection resolves against.
    dataset: &'a LocationDataset,
    /// Chosen province row.
    province: Option<&'a Province>,
    /// Chosen judiciary row.
    judiciary: Option<&'a Judiciary>,
    /// Chosen area row.
    area: Option<&'a Area>,
}

impl<'a> LocationSelection<'a> {
    /// An empty selection over `dataset`.
    #[must_use]
    pub const fn new(dataset: &'a LocationDataset) -> Self {
        Self { dataset, province: None, judiciary: None, area: None }
    }

    /// Re-hydrates a selection from a stored response value.
    ///
    /// Ids are resolved level by level; the first one that no longer
    /// matches the dataset stops the descent, so a renamed or removed row
    /// degrades to a shallower selection instead of an inconsistent one.
    /// Empty and malformed values yield an empty selection.
    #[must_use]
    pub fn restore(dataset: &'a LocationDataset, stored_value: &str) -> Self {
        let mut selection = Self::new(dataset);
        let Some(parsed) = parse_location_response(stored_value) else {
            return selection;
        };

        let Some(province) = dataset.find_province(parsed.province.id) else {
            return selection;
        };
        selection.province = Some(province);

        let Some(judiciary_id) = parsed.judiciary.map(|place| place.id) else {
            return selection;
        };
        let Some(judiciary) = dataset.find_judiciary(province.id, judiciary_id) else {
            return selection;
        };
        selection.judiciary = Some(judiciary);

        let Some(area_id) = parsed.area.map(|place| place.id) else {
            return selection;
        };
        selection.area = dataset.find_area(province.id, judiciary.id, area_id);

        selection
    }

    /// Provinces offered at the first level.
    #[must_use]
    pub fn province_options(&self) -> Vec<&'a Province> {
        self.dataset.list_provinces()
    }

    /// Judiciaries of the chosen province; empty while no province is set.
    #[must_use]
    pub fn judiciary_options(&self) -> Vec<&'a Judiciary> {
        self.province.map_or_else(Vec::new, |province| self.dataset.list_judiciaries(province.id))
    }

    /// Areas of the chosen judiciary; empty while either parent is unset.
    #[must_use]
    pub fn area_options(&self) -> Vec<&'a Area> {
        match (self.province, self.judiciary) {
            (Some(province), Some(judiciary)) => {
                self.dataset.list_areas(province.id, judiciary.id)
            }
            _ => Vec::new(),
        }
    }

    /// Selects a province and clears the judiciary and area.
    pub fn select_province(&mut self, province_id: u32) {
        let province = self
            .dataset
            .find_province(province_id)
            .filter(|province| province.id != NONE_ENTRY_ID);
        if province.is_none() {
            tracing::warn!("Unknown province id {province_id}, clearing the selection");
        }
        self.province = province;
        self.judiciary = None;
        self.area = None;
    }

    /// Selects a judiciary within the chosen province and clears the area.
    ///
    /// Ignored while no province is set.
    pub fn select_judiciary(&mut self, judiciary_id: u32) {
        let Some(province) = self.province else {
            tracing::warn!("Judiciary {judiciary_id} selected before a province, ignoring");
            return;
        };
        let judiciary = self
            .dataset
            .find_judiciary(province.id, judiciary_id)
            .filter(|judiciary| judiciary.id != NONE_ENTRY_ID);
        if judiciary.is_none() {
            tracing::warn!("Judiciary {judiciary_id} does not belong to province {}", province.id);
        }
        self.judiciary = judiciary;
        self.area = None;
    }

    /// Selects an area within the chosen judiciary.
    ///
    /// Ignored while the province or judiciary is unset.
    pub fn select_area(&mut self, area_id: u32) {
        let (Some(province), Some(judiciary)) = (self.province, self.judiciary) else {
            tracing::warn!("Area {area_id} selected before province and judiciary, ignoring");
            return;
        };
        let area = self
            .dataset
            .find_area(province.id, judiciary.id, area_id)
            .filter(|area| area.id != NONE_ENTRY_ID);
        if area.is_none() {
            tracing::warn!("Area {area_id} does not belong to judiciary {}", judiciary.id);
        }
        self.area = area;
    }

    /// Chosen province row.
    #[must_use]
    pub const fn selected_province(&self) -> Option<&'a Province> {
        self.province
    }

    /// Chosen judiciary row.
    #[must_use]
    pub const fn selected_judiciary(&self) -> Option<&'a Judiciary> {
        self.judiciary
    }

    /// Chosen area row.
    #[must_use]
    pub const fn selected_area(&self) -> Option<&'a Area> {
        self.area
    }

    /// True once all three levels are chosen.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.province.is_some() && self.judiciary.is_some() && self.area.is_some()
    }

    /// In-progress response value, `None` while no province is chosen.
    ///
    /// Unanswered lower levels stay as explicit nulls in the stored form.
    #[must_use]
    pub fn partial_response(&self) -> Option<LocationResponse> {
        self.province.map(|province| LocationResponse {
            province: province.into(),
            judiciary: self.judiciary.map(Into::into),
            area: self.area.map(Into::into),
        })
    }

    /// Submittable response value, `None` until the selection is complete.
    #[must_use]
    pub fn completed_response(&self) -> Option<LocationResponse> {
        match (self.province, self.judiciary, self.area) {
            (Some(province), Some(judiciary), Some(area)) => Some(LocationResponse {
                province: province.into(),
                judiciary: Some(judiciary.into()),
                area: Some(area.into()),
            }),
            _ => None,
        }
    }
}
