#![forbid(unsafe_code)]

pub mod datamodel;
pub mod wire;
