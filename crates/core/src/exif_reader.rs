use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

pub const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("cannot open file: {0}")]
    Open(std::io::Error),
    #[error("cannot parse EXIF: {0}")]
    Exif(exif::Error),
    #[error("DateTimeOriginal is not an ASCII value")]
    NotAscii,
    #[error("malformed DateTimeOriginal {raw:?}: {source}")]
    MalformedDate {
        raw: String,
        source: chrono::ParseError,
    },
}

/// Reads the `DateTimeOriginal` field of the primary image.
///
/// `Ok(None)` means the container simply carries no EXIF block or no such
/// field. Anything unreadable or malformed is an error.
pub fn read_capture_time(path: &Path) -> Result<Option<NaiveDateTime>, MetadataError> {
    let file = File::open(path).map_err(MetadataError::Open)?;
    let mut buf = BufReader::new(file);
    let exif = match Reader::new().read_from_container(&mut buf) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(err) => return Err(MetadataError::Exif(err)),
    };

    let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        return Ok(None);
    };

    let raw = match &field.value {
        Value::Ascii(values) => match values.first() {
            Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            None => return Ok(None),
        },
        _ => return Err(MetadataError::NotAscii),
    };

    parse_capture_time(&raw).map(Some)
}

pub fn parse_capture_time(raw: &str) -> Result<NaiveDateTime, MetadataError> {
    let normalized = raw.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    NaiveDateTime::parse_from_str(normalized, EXIF_DATE_FORMAT).map_err(|source| {
        MetadataError::MalformedDate {
            raw: raw.to_string(),
            source,
        }
    })
}
