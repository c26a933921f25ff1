//! Batching and sparsity diagnostics

mod collate;
mod sparsity;

pub use collate::{collate, into_batches, Batch};
pub use sparsity::{sparsity_report, SparsityReport, SummaryStat};
