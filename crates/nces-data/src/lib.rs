//! School survey dataset loading.
//!
//! This crate reads the NCES school CSV into column-oriented storage and
//! exposes validated row access over it.
//!
//! # Features
//!
//! - **Encoded CSV Loading**: Decode legacy code pages (`cp1252`) or UTF-8 strictly
//! - **Column Storage**: One string sequence per header, in header order
//! - **Row Cursors**: Bounds-checked row views instead of per-row tuples
//! - **Projection**: Drop every column a consumer does not read
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use nces_data::{LoadOptions, columns, read_dataset};
//!
//! let options = LoadOptions::default().with_encoding_label("cp1252")?;
//! let dataset = read_dataset(Path::new("school_data.csv"), &options)?
//!     .project(columns::SEARCH_COLUMNS);
//!
//! let (values, headers) = dataset.row_at(0)?;
//! ```

pub mod columns;
mod dataset;
mod error;
mod load;

// === Error Types ===
pub use error::{DataError, Result};

// === Storage ===
pub use dataset::{Column, Dataset, RowView};

// === Loading ===
pub use load::{LoadOptions, decode, read_dataset, read_dataset_from_reader, resolve_encoding};
