use super::bounds::{self, Bounds};
use super::error::ConversionError;
use super::metric::Metric;
use super::microgrid_datetime::{MicrogridDateTime, MicrogridDateTimeExt};
use crate::wire::metric_sample_models as wire_models;
use serde::{Deserialize, Serialize};

/// A single sample of a specific metric, measured or derived at a
/// particular time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleMetricSample {
    pub value: f64,
}

impl SimpleMetricSample {
    pub fn from_wire(sample: &wire_models::SimpleMetricSample) -> Self {
        Self {
            value: sample.value,
        }
    }

    pub fn to_wire(&self) -> wire_models::SimpleMetricSample {
        wire_models::SimpleMetricSample { value: self.value }
    }
}

/// Derived statistical summary of a single metric.
///
/// Fields are copied as-is from the wire: `min_value <= avg_value <=
/// max_value` is not checked anywhere and callers must not assume it.
/// `raw_values` is optional supporting data; an empty list is valid and
/// round-trips as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedMetricSample {
    pub avg_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// All the raw individual values, when the producer reports them.
    pub raw_values: Vec<f64>,
}

impl AggregatedMetricSample {
    pub fn from_wire(sample: wire_models::AggregatedMetricSample) -> Self {
        Self {
            avg_value: sample.avg_value,
            min_value: sample.min_value,
            max_value: sample.max_value,
            raw_values: sample.raw_values,
        }
    }

    pub fn to_wire(&self) -> wire_models::AggregatedMetricSample {
        wire_models::AggregatedMetricSample {
            avg_value: self.avg_value,
            min_value: self.min_value,
            max_value: self.max_value,
            raw_values: self.raw_values.clone(),
        }
    }
}

/// Either a simple or an aggregated sample of a metric.
///
/// The wire format carries the union as two independently optional
/// sub-messages; this sum type makes the dual-set and neither-set shapes
/// unrepresentable in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricSampleVariant {
    Simple(SimpleMetricSample),
    Aggregated(AggregatedMetricSample),
}

impl MetricSampleVariant {
    /// Converts the wire union into a `MetricSampleVariant`.
    ///
    /// When a non-conforming producer sets both sub-messages, the simple
    /// sample wins (wire field order). A message with neither sub-message
    /// set is a [`ConversionError::EmptySampleVariant`].
    pub fn from_wire(variant: wire_models::MetricSampleVariant) -> Result<Self, ConversionError> {
        match (variant.simple_metric, variant.aggregated_metric) {
            (Some(simple), _) => Ok(Self::Simple(SimpleMetricSample::from_wire(&simple))),
            (None, Some(aggregated)) => Ok(Self::Aggregated(AggregatedMetricSample::from_wire(
                aggregated,
            ))),
            (None, None) => Err(ConversionError::EmptySampleVariant),
        }
    }

    /// Converts back to the wire union, populating exactly one side.
    pub fn to_wire(&self) -> wire_models::MetricSampleVariant {
        match self {
            Self::Simple(simple) => wire_models::MetricSampleVariant {
                simple_metric: Some(simple.to_wire()),
                aggregated_metric: None,
            },
            Self::Aggregated(aggregated) => wire_models::MetricSampleVariant {
                simple_metric: None,
                aggregated_metric: Some(aggregated.to_wire()),
            },
        }
    }
}

/// A sampled metric along with its value, bounds and origin.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    /// UTC timestamp at which the metric was sampled.
    pub sampled_at: MicrogridDateTime,
    pub metric: Metric,
    pub sample: MetricSampleVariant,
    /// Bounds that applied at sampling time. Multiple bounds collectively
    /// extend the range of allowable values (union, not intersection).
    pub bounds: Vec<Bounds>,
    /// Origin of the metric, populated when the component exposes several
    /// physical sources for the same metric kind. `None` means the source
    /// is implicit.
    pub source: Option<String>,
}

impl MetricSample {
    /// Converts a wire `MetricSample` into a datamodel `MetricSample`.
    ///
    /// Proto3 strings have no presence, so an empty wire `source` is
    /// normalized to `None`. Fails when the wire message is missing its
    /// timestamp or its sample variant.
    pub fn from_wire(sample: wire_models::MetricSample) -> Result<Self, ConversionError> {
        let sampled_at = sample
            .sampled_at
            .ok_or(ConversionError::MissingField("sampled_at"))?;
        let variant = sample
            .sample
            .ok_or(ConversionError::MissingField("sample"))?;

        Ok(Self {
            sampled_at: MicrogridDateTime::from_wire_timestamp(&sampled_at),
            metric: Metric::from_wire(sample.metric),
            sample: MetricSampleVariant::from_wire(variant)?,
            bounds: sample.bounds.iter().map(Bounds::from_wire).collect(),
            source: if sample.source.is_empty() {
                None
            } else {
                Some(sample.source)
            },
        })
    }

    /// Converts back to a wire `MetricSample`. `None` source encodes as
    /// the empty string.
    pub fn to_wire(&self) -> wire_models::MetricSample {
        wire_models::MetricSample {
            sampled_at: Some(self.sampled_at.to_wire_timestamp()),
            metric: self.metric.to_wire(),
            sample: Some(self.sample.to_wire()),
            bounds: self.bounds.iter().map(Bounds::to_wire).collect(),
            source: self.source.clone().unwrap_or_default(),
        }
    }

    /// Whether `value` falls within the union of this sample's bounds.
    /// An empty bounds list means unbounded.
    pub fn is_within_bounds(&self, value: f64) -> bool {
        bounds::is_within_bounds(&self.bounds, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregated() -> AggregatedMetricSample {
        AggregatedMetricSample {
            avg_value: 2.0,
            min_value: 1.0,
            max_value: 3.0,
            raw_values: vec![1.0, 2.0, 3.0],
        }
    }

    #[test]
    fn test_simple_sample_roundtrip() {
        let sample = SimpleMetricSample { value: 1_500.0 };
        assert_eq!(SimpleMetricSample::from_wire(&sample.to_wire()), sample);
    }

    #[test]
    fn test_aggregated_sample_roundtrip() {
        let sample = aggregated();
        assert_eq!(
            AggregatedMetricSample::from_wire(sample.to_wire()),
            sample.clone()
        );

        // An empty raw_values list round-trips as empty, not as absent.
        let empty = AggregatedMetricSample {
            raw_values: vec![],
            ..sample
        };
        let roundtripped = AggregatedMetricSample::from_wire(empty.to_wire());
        assert!(roundtripped.raw_values.is_empty());
        assert_eq!(roundtripped, empty);
    }

    #[test]
    fn test_aggregated_sample_is_not_validated() {
        // min > max is carried as-is.
        let inconsistent = AggregatedMetricSample {
            avg_value: 0.0,
            min_value: 10.0,
            max_value: -10.0,
            raw_values: vec![],
        };
        assert_eq!(
            AggregatedMetricSample::from_wire(inconsistent.to_wire()),
            inconsistent
        );
    }

    #[test]
    fn test_variant_roundtrip() {
        let simple = MetricSampleVariant::Simple(SimpleMetricSample { value: 42.0 });
        let wire = simple.to_wire();
        assert!(wire.simple_metric.is_some());
        assert!(wire.aggregated_metric.is_none());
        assert_eq!(MetricSampleVariant::from_wire(wire).unwrap(), simple);

        let agg = MetricSampleVariant::Aggregated(aggregated());
        let wire = agg.to_wire();
        assert!(wire.simple_metric.is_none());
        assert!(wire.aggregated_metric.is_some());
        assert_eq!(MetricSampleVariant::from_wire(wire).unwrap(), agg);
    }

    #[test]
    fn test_variant_neither_set_is_an_error() {
        let wire = wire_models::MetricSampleVariant {
            simple_metric: None,
            aggregated_metric: None,
        };
        assert_eq!(
            MetricSampleVariant::from_wire(wire),
            Err(ConversionError::EmptySampleVariant)
        );
    }

    #[test]
    fn test_variant_both_set_resolves_to_simple() {
        let wire = wire_models::MetricSampleVariant {
            simple_metric: Some(wire_models::SimpleMetricSample { value: 1.0 }),
            aggregated_metric: Some(aggregated().to_wire()),
        };
        assert_eq!(
            MetricSampleVariant::from_wire(wire).unwrap(),
            MetricSampleVariant::Simple(SimpleMetricSample { value: 1.0 })
        );
    }

    fn metric_sample() -> MetricSample {
        MetricSample {
            sampled_at: MicrogridDateTime::from_wire_timestamp(&wire_models::Timestamp {
                seconds: 1_704_067_200,
                nanos: 0,
            }),
            metric: Metric::AcActivePower,
            sample: MetricSampleVariant::Simple(SimpleMetricSample { value: 1_500.0 }),
            bounds: vec![Bounds {
                lower: -10_000.0,
                upper: 10_000.0,
            }],
            source: None,
        }
    }

    #[test]
    fn test_metric_sample_roundtrip() {
        let sample = metric_sample();
        assert_eq!(
            MetricSample::from_wire(sample.to_wire()).unwrap(),
            sample.clone()
        );

        let with_source = MetricSample {
            source: Some("dc_battery_0".to_string()),
            ..sample
        };
        assert_eq!(
            MetricSample::from_wire(with_source.to_wire()).unwrap(),
            with_source
        );
    }

    #[test]
    fn test_absent_source_roundtrips_as_absent() {
        let sample = metric_sample();
        let wire = sample.to_wire();
        assert_eq!(wire.source, "");

        let roundtripped = MetricSample::from_wire(wire).unwrap();
        assert_eq!(roundtripped.source, None);
    }

    #[test]
    fn test_empty_wire_source_is_normalized_to_none() {
        let mut wire = metric_sample().to_wire();
        wire.source = String::new();
        assert_eq!(MetricSample::from_wire(wire).unwrap().source, None);
    }

    #[test]
    fn test_unknown_metric_code_maps_to_unspecified() {
        let mut wire = metric_sample().to_wire();
        wire.metric = 9_999;
        assert_eq!(
            MetricSample::from_wire(wire).unwrap().metric,
            Metric::Unspecified
        );
    }

    #[test]
    fn test_missing_fields_are_errors() {
        let mut wire = metric_sample().to_wire();
        wire.sampled_at = None;
        assert_eq!(
            MetricSample::from_wire(wire),
            Err(ConversionError::MissingField("sampled_at"))
        );

        let mut wire = metric_sample().to_wire();
        wire.sample = None;
        assert_eq!(
            MetricSample::from_wire(wire),
            Err(ConversionError::MissingField("sample"))
        );
    }

    #[test]
    fn test_is_within_bounds_uses_union_semantics() {
        let mut sample = metric_sample();
        sample.bounds = vec![
            Bounds {
                lower: -10_000.0,
                upper: -1.0,
            },
            Bounds {
                lower: 1.0,
                upper: 10_000.0,
            },
        ];
        assert!(sample.is_within_bounds(5_000.0));
        assert!(!sample.is_within_bounds(0.0));

        sample.bounds = vec![];
        assert!(sample.is_within_bounds(1e12));
    }
}
