//! # Perfboard Ingest
//!
//! Turns an uploaded CSV activity export into `SalesRecord`s.
//!
//! Header names are trimmed, the seven required columns are checked up front, and
//! numeric cells that do not parse are kept as missing values instead of failing the
//! upload.

pub mod coerce;
pub mod error;
pub mod reader;

pub use error::IngestError;
pub use reader::{UploadedTable, load_from_bytes, load_from_path, load_records};
