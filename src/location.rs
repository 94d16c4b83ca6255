//! Cascading Iraq location picker: dataset, selection state, stored answers.

mod dataset;
mod response;
mod selection;
mod summary;

pub use dataset::{
    Area,
    DatasetError,
    Judiciary,
    LocationDataset,
    NONE_ENTRY_ID,
    Province,
};
pub use response::{
    LocationResponse,
    SelectedPlace,
    parse_location_response,
};
pub use selection::LocationSelection;
pub use summary::{
    DistributionEntry,
    LocationSummary,
    summarize_location_responses,
};
