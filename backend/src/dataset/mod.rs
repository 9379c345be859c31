//! Launch dataset: CSV loading and the immutable in-memory table.
//!
//! The dataset is read once at process start and never mutated afterwards.
//! Aggregations in [`crate::services`] borrow it explicitly; nothing here
//! holds process-global state.

pub mod checksum;
pub mod error;
pub mod loader;
pub mod table;

pub use error::{LoadError, LoadResult};
pub use loader::{
    parse_launch_csv, BOOSTER_CATEGORY_COLUMN, BOOSTER_VERSION_COLUMN, CLASS_COLUMN,
    FLIGHT_NUMBER_COLUMN, LAUNCH_SITE_COLUMN, PAYLOAD_MASS_COLUMN, REQUIRED_COLUMNS,
};
pub use table::Dataset;
