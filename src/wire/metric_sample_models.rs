// This file is manually edited because setting up an automatic
// compilation of the protocol buffer to Rust code did sound cumbersome
// for such a simple and stable schema.
//
// The message shapes mirror the external metric sample schema used by
// the microgrid APIs. Field tags are part of the external contract and
// must not be renumbered.
//
// The code uses the crate PROST for protobuf serialization/deserialization.

/// Point in time, as seconds and nanoseconds since the Unix epoch.
///
/// Same shape as the well-known protobuf `Timestamp`: `nanos` is always
/// in `[0, 999_999_999]`, also for instants before the epoch.
#[derive(prost::Message, Clone, PartialEq)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

/// A lower and upper limit for a metric value.
///
/// Carried verbatim by this layer; interpretation of the sign follows the
/// passive sign convention of the metric the bounds are attached to.
#[derive(prost::Message, Clone, PartialEq)]
pub struct Bounds {
    #[prost(double, tag = "1")]
    pub lower: f64,
    #[prost(double, tag = "2")]
    pub upper: f64,
}

/// A single measured or derived value of a metric.
#[derive(prost::Message, Clone, PartialEq)]
pub struct SimpleMetricSample {
    #[prost(double, tag = "1")]
    pub value: f64,
}

/// Statistical summary of a metric over an aggregation window.
///
/// The raw individual values are optional supporting data and are not
/// required to reconcile with the avg/min/max fields.
#[derive(prost::Message, Clone, PartialEq)]
pub struct AggregatedMetricSample {
    #[prost(double, tag = "1")]
    pub avg_value: f64,
    #[prost(double, tag = "2")]
    pub min_value: f64,
    #[prost(double, tag = "3")]
    pub max_value: f64,
    #[prost(double, repeated, tag = "4")]
    pub raw_values: Vec<f64>,
}

/// Union over a simple or an aggregated sample.
///
/// The wire contract represents the union as two optional sub-messages;
/// setting one is expected to nullify the other. The datamodel layer
/// converts this into a real sum type.
#[derive(prost::Message, Clone, PartialEq)]
pub struct MetricSampleVariant {
    #[prost(message, optional, tag = "1")]
    pub simple_metric: ::core::option::Option<SimpleMetricSample>,
    #[prost(message, optional, tag = "2")]
    pub aggregated_metric: ::core::option::Option<AggregatedMetricSample>,
}

/// A sampled metric together with its value, bounds and origin.
#[derive(prost::Message, Clone, PartialEq)]
pub struct MetricSample {
    /// UTC timestamp at which the metric was sampled.
    #[prost(message, optional, tag = "1")]
    pub sampled_at: ::core::option::Option<Timestamp>,
    /// Metric that was sampled, as a wire enum code.
    #[prost(enumeration = "crate::datamodel::metric::Metric", tag = "2")]
    pub metric: i32,
    /// Value of the sampled metric.
    #[prost(message, optional, tag = "3")]
    pub sample: ::core::option::Option<MetricSampleVariant>,
    /// Bounds that applied at sampling time. Multiple bounds form a union
    /// of allowable ranges, not an intersection.
    #[prost(message, repeated, tag = "4")]
    pub bounds: Vec<Bounds>,
    /// Origin of the metric when the component exposes several physical
    /// sources for the same metric kind. Empty when the source is implicit.
    #[prost(string, tag = "5")]
    pub source: String,
}
