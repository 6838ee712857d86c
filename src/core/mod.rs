pub mod aggregation;
pub mod dataset;
pub mod loader;
pub mod measure;
pub mod scale;
pub mod series;
pub mod types;
pub mod windowing;

pub use aggregation::{aggregate_by_region, group_by_country};
pub use dataset::{AGGREGATES_REGION, Dataset};
pub use loader::{load_records_from_path, load_records_from_reader};
pub use measure::Measure;
pub use scale::{LinearScale, value_domain};
pub use series::{DisplaySeries, Series, SeriesKind};
pub use types::{ArrivalRecord, Selection, Viewport, YearValue};
pub use windowing::{normalize_year_range, values_in_year_window};
