use super::metric_sample_models::MetricSample;
use super::microgrid_models::MicrogridComponentIDs;
use anyhow::Result;
use prost::Message;
use tracing::debug;

/// Decodes a `MetricSample` wire message from protobuf bytes.
///
/// The bytes are expected to be bare protobuf, without any compression
/// or framing layer.
pub fn parse_metric_sample(input: &[u8]) -> Result<MetricSample> {
    debug!("Parsing metric sample: {} bytes", input.len());
    Ok(MetricSample::decode(input)?)
}

/// Encodes a `MetricSample` wire message to protobuf bytes.
pub fn serialize_metric_sample(sample: &MetricSample) -> Vec<u8> {
    let encoded = sample.encode_to_vec();
    debug!("Encoded MetricSample to {} bytes", encoded.len());
    encoded
}

/// Decodes a `MicrogridComponentIDs` wire message from protobuf bytes.
pub fn parse_microgrid_component_ids(input: &[u8]) -> Result<MicrogridComponentIDs> {
    debug!("Parsing microgrid component IDs: {} bytes", input.len());
    Ok(MicrogridComponentIDs::decode(input)?)
}

/// Encodes a `MicrogridComponentIDs` wire message to protobuf bytes.
pub fn serialize_microgrid_component_ids(ids: &MicrogridComponentIDs) -> Vec<u8> {
    let encoded = ids.encode_to_vec();
    debug!("Encoded MicrogridComponentIDs to {} bytes", encoded.len());
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric_sample() {
        let input_data = MetricSample {
            sampled_at: None,
            metric: 0,
            sample: None,
            bounds: vec![],
            source: String::new(),
        };
        let input_bytes = input_data.encode_to_vec();

        let parsed = parse_metric_sample(&input_bytes).unwrap();
        assert_eq!(parsed, input_data);

        let input = b"not a valid protobuf";
        assert!(parse_metric_sample(input).is_err());
    }

    #[test]
    fn test_serialize_metric_sample() {
        let sample = MetricSample {
            sampled_at: Some(super::super::metric_sample_models::Timestamp {
                seconds: 1_000,
                nanos: 500,
            }),
            metric: 3,
            sample: None,
            bounds: vec![],
            source: "dc_battery_0".to_string(),
        };

        let serialized = serialize_metric_sample(&sample);
        assert!(!serialized.is_empty());

        let parsed = parse_metric_sample(&serialized).unwrap();
        assert_eq!(parsed, sample);
    }

    #[test]
    fn test_microgrid_component_ids_codec() {
        let ids = MicrogridComponentIDs {
            microgrid_id: 42,
            component_ids: vec![1, 2, 3],
        };

        let serialized = serialize_microgrid_component_ids(&ids);
        let parsed = parse_microgrid_component_ids(&serialized).unwrap();
        assert_eq!(parsed, ids);

        assert!(parse_microgrid_component_ids(b"not a valid protobuf").is_err());
    }
}
