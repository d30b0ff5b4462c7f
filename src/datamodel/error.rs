use thiserror::Error;

/// Errors raised while converting wire messages into datamodel values.
///
/// Well-formed wire input never produces these; they indicate a producer
/// that violated the wire contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A required sub-message is absent from the wire message.
    #[error("Missing required field in wire message: {0}")]
    MissingField(&'static str),

    /// A metric sample variant carries neither a simple nor an aggregated
    /// sample.
    #[error("Metric sample variant has neither a simple nor an aggregated sample")]
    EmptySampleVariant,
}
