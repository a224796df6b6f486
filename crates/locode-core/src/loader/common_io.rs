// crates/locode-core/src/loader/common_io.rs
use crate::error::{LocodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

#[cfg(feature = "compact")]
use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// TRANSPORT
// -----------------------------------------------------------------------------

/// Opens a file for reading, gunzipping it when `compact` is enabled.
///
/// A multi-member decoder is used because appends write one gzip member each.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        LocodeError::NotFound(format!("File not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(MultiGzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}

/// Appends a payload to a file (created if missing).
///
/// With `compact` the payload is written as one complete gzip member, which
/// [`open_stream`] reads back transparently.
pub fn append_payload(path: &Path, payload: &[u8]) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    let mut writer = {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        encoder.write_all(payload)?;
        encoder.finish()?
    };

    #[cfg(not(feature = "compact"))]
    let mut writer = {
        let mut writer = writer;
        writer.write_all(payload)?;
        writer
    };

    writer.flush()?;
    Ok(())
}

// -----------------------------------------------------------------------------
// TEXT ENCODING
// -----------------------------------------------------------------------------

/// Character encoding of the source CSV files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceEncoding {
    /// ISO-8859-1, which the UN/LOCODE CSV releases use.
    #[default]
    #[serde(rename = "latin_1", alias = "latin1", alias = "iso-8859-1")]
    Latin1,
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
}

impl SourceEncoding {
    pub fn decode(self, bytes: Vec<u8>) -> Result<String> {
        match self {
            // Every byte maps to the code point of the same value.
            SourceEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
            SourceEncoding::Utf8 => {
                let text = String::from_utf8(bytes)
                    .map_err(|e| LocodeError::InvalidData(format!("Not valid UTF-8: {e}")))?;
                Ok(match text.strip_prefix('\u{feff}') {
                    Some(stripped) => stripped.to_string(),
                    None => text,
                })
            }
        }
    }
}

impl FromStr for SourceEncoding {
    type Err = LocodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin_1" | "latin1" | "latin-1" | "iso-8859-1" => Ok(SourceEncoding::Latin1),
            "utf-8" | "utf8" | "utf_8" => Ok(SourceEncoding::Utf8),
            other => Err(LocodeError::Config(format!("Unsupported encoding: {other}"))),
        }
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceEncoding::Latin1 => f.write_str("latin_1"),
            SourceEncoding::Utf8 => f.write_str("utf-8"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_maps_high_bytes() {
        let text = SourceEncoding::Latin1.decode(vec![b'C', 0xD4, b'T', b'E']).unwrap();
        assert_eq!(text, "CÔTE");
    }

    #[test]
    fn utf8_strips_bom_and_rejects_garbage() {
        let text = SourceEncoding::Utf8
            .decode("\u{feff}Zürich".as_bytes().to_vec())
            .unwrap();
        assert_eq!(text, "Zürich");
        assert!(SourceEncoding::Utf8.decode(vec![0xFF, 0xFE, 0xFD]).is_err());
    }

    #[test]
    fn encoding_names() {
        assert_eq!("LATIN_1".parse::<SourceEncoding>().unwrap(), SourceEncoding::Latin1);
        assert_eq!("utf8".parse::<SourceEncoding>().unwrap(), SourceEncoding::Utf8);
        assert!("ebcdic".parse::<SourceEncoding>().is_err());
    }
}
