//! Encoded CSV loading.

mod encoding;
mod options;
mod reader;

pub use encoding::{decode, resolve_encoding};
pub use options::LoadOptions;
pub use reader::{read_dataset, read_dataset_from_reader};
