// This file is manually edited, see metric_sample_models.rs for the
// rationale. The message shape mirrors the external microgrid schema.
//
// The code uses the crate PROST for protobuf serialization/deserialization.

/// Component IDs belonging to one microgrid.
#[derive(prost::Message, Clone, PartialEq)]
pub struct MicrogridComponentIDs {
    #[prost(uint64, tag = "1")]
    pub microgrid_id: u64,
    /// IDs of the components, in the order reported by the microgrid.
    #[prost(uint64, repeated, tag = "2")]
    pub component_ids: Vec<u64>,
}
