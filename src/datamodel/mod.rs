pub mod bounds;
pub mod component;
pub mod error;
pub mod metric;
pub mod microgrid;
pub mod microgrid_datetime;
pub mod sample;

pub use bounds::Bounds;
pub use component::ComponentCategory;
pub use error::ConversionError;
pub use metric::Metric;
pub use microgrid::MicrogridComponentIDs;
pub use microgrid_datetime::{MicrogridDateTime, MicrogridDateTimeExt};
pub use sample::{AggregatedMetricSample, MetricSample, MetricSampleVariant, SimpleMetricSample};
