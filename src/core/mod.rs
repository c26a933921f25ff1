//! Configuration and the parallel extraction pipeline

mod config;
mod pipeline;

pub use config::{CandidatePair, SamplingConfig, SamplingMode};
pub use pipeline::{extract_enclosing_subgraphs, extract_one};
