//! Options controlling how a source is decoded and split into columns.

use encoding_rs::{Encoding, UTF_8};

use crate::error::Result;

use super::encoding::resolve_encoding;

/// How a delimited source is read.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Character encoding of the source bytes.
    pub encoding: &'static Encoding,
    /// Field delimiter.
    pub delimiter: u8,
    /// Pad records shorter than the header with empty cells.
    ///
    /// When false, a short record leaves its trailing columns one cell
    /// shorter and the row fails on access.
    pub pad_short_rows: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encoding: UTF_8,
            delimiter: b',',
            pad_short_rows: false,
        }
    }
}

impl LoadOptions {
    /// Set the encoding from a WHATWG label such as `cp1252`.
    pub fn with_encoding_label(mut self, label: &str) -> Result<Self> {
        self.encoding = resolve_encoding(label)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_pad_short_rows(mut self, enable: bool) -> Self {
        self.pad_short_rows = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;

    #[test]
    fn test_defaults() {
        let options = LoadOptions::default();
        assert_eq!(options.encoding, UTF_8);
        assert_eq!(options.delimiter, b',');
        assert!(!options.pad_short_rows);
    }

    #[test]
    fn test_with_encoding_label() {
        let options = LoadOptions::default().with_encoding_label("cp1252").unwrap();
        assert_eq!(options.encoding, WINDOWS_1252);
        assert!(LoadOptions::default().with_encoding_label("nope").is_err());
    }
}
