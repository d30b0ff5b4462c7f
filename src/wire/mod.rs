pub mod codec;
pub mod metric_sample_models;
pub mod microgrid_models;
