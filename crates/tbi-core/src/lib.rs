//! Record merging and the document processing pipeline.
//!
//! The core is purely functional over in-memory data: every function takes
//! its inputs explicitly and returns a value. Network and storage calls
//! live behind the [`pipeline::ExtractionPass`] and [`persist::RecordStore`]
//! collaborator seams.

pub mod coerce;
pub mod error;
pub mod merge;
pub mod persist;
pub mod pipeline;

pub use coerce::{coerce, parse_number_text, parse_percentile_text};
pub use error::BatchError;
pub use merge::{MergeOutcome, merge};
pub use persist::{RecordStore, persisted_record};
pub use pipeline::{
    BatchOutcome, DocumentInput, DocumentResult, ExtractionPass, process_batch, process_document,
};
