// ============================================================
// TEXT ENCODING
// ============================================================
// Strict decode/encode of whole files with a declared encoding

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use tracing::warn;

use crate::domain::error::{AppError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Resolve a WHATWG encoding label such as `utf-8`, `latin1` or `cp1252`
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| AppError::EncodingError(format!("Unknown encoding '{}'", label)))
}

/// Read a whole file, mapping a missing path to `FileNotFound`
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| AppError::from_io_at(e, path))
}

/// Decode `bytes` without replacement: any malformed sequence is an error
pub fn decode(bytes: &[u8], encoding: &'static Encoding, path: &Path) -> Result<String> {
    let body = if encoding == UTF_8 {
        bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
    } else {
        bytes
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            AppError::EncodingError(format!(
                "'{}' cannot decode the contents of {}",
                encoding.name(),
                path.display()
            ))
        })
}

/// Read and decode a text file in one step
pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = read_bytes(path)?;
    decode(&bytes, encoding, path)
}

/// Encode `text` for writing. Characters the target cannot represent are an
/// error rather than being replaced.
pub fn encode(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>> {
    let (bytes, used, unmappable) = encoding.encode(text);

    if unmappable {
        return Err(AppError::EncodingError(format!(
            "Output contains characters that '{}' cannot represent",
            encoding.name()
        )));
    }
    if used != encoding {
        warn!(
            "'{}' is decode-only, writing output as '{}'",
            encoding.name(),
            used.name()
        );
    }

    Ok(bytes.into_owned())
}
