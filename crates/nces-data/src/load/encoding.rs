//! Encoding label resolution and strict decoding.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, WINDOWS_1252};

use crate::error::{DataError, Result};

/// Resolves a WHATWG encoding label (`utf-8`, `cp1252`, `latin1`, ...).
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label_no_replacement(label.trim().as_bytes()).ok_or_else(|| {
        DataError::UnknownEncoding {
            label: label.to_string(),
        }
    })
}

/// Bytes the cp1252 code page leaves undefined. WHATWG windows-1252 maps
/// them to C1 controls instead of failing.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Decodes `bytes` without replacement characters.
///
/// A byte order mark overrides `encoding` and is stripped. Malformed input
/// fails instead of being replaced with U+FFFD. Under windows-1252 (which
/// every `cp1252` and `latin1` label resolves to) the five bytes undefined in
/// cp1252 are malformed too.
pub fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding, path: &Path) -> Result<Cow<'a, str>> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((encoding, 0));
    let body = &bytes[bom_len..];
    let malformed = || DataError::Decode {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    };
    if encoding == WINDOWS_1252 && body.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
        return Err(malformed());
    }
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;

    #[test]
    fn test_resolve_legacy_labels() {
        assert_eq!(resolve_encoding("cp1252").unwrap(), WINDOWS_1252);
        assert_eq!(resolve_encoding("latin1").unwrap(), WINDOWS_1252);
        assert_eq!(resolve_encoding(" UTF-8 ").unwrap(), UTF_8);
    }

    #[test]
    fn test_resolve_unknown_label() {
        let err = resolve_encoding("klingon").unwrap_err();
        assert!(matches!(err, DataError::UnknownEncoding { label } if label == "klingon"));
    }

    #[test]
    fn test_decode_windows_1252() {
        let bytes = b"Pe\xf1asco";
        let text = decode(bytes, WINDOWS_1252, Path::new("mem")).unwrap();
        assert_eq!(text, "Peñasco");
    }

    #[test]
    fn test_decode_invalid_utf8_fails() {
        let bytes = b"Pe\xf1asco";
        let err = decode(bytes, UTF_8, Path::new("mem")).unwrap_err();
        assert!(matches!(err, DataError::Decode { encoding: "UTF-8", .. }));
    }

    #[test]
    fn test_decode_cp1252_undefined_byte_fails() {
        for byte in CP1252_UNDEFINED {
            let bytes = [b'A', byte, b'B'];
            let err = decode(&bytes, WINDOWS_1252, Path::new("mem")).unwrap_err();
            assert!(matches!(err, DataError::Decode { encoding: "windows-1252", .. }));
        }
    }

    #[test]
    fn test_decode_strips_bom() {
        let bytes = b"\xef\xbb\xbfA,B";
        let text = decode(bytes, WINDOWS_1252, Path::new("mem")).unwrap();
        assert_eq!(text, "A,B");
    }
}
