//! Synthetic JPEG fixtures for tests.
//!
//! The files carry only SOI, an optional APP1/Exif segment and EOI. That is
//! all the EXIF reader looks at, so no real pixel data is needed.

use std::fs;
use std::path::{Path, PathBuf};

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;

/// Little-endian TIFF block: IFD0 -> Exif IFD -> DateTimeOriginal.
fn tiff_with_date_time_original(value: &str) -> Vec<u8> {
    let mut ascii = value.as_bytes().to_vec();
    ascii.push(0);

    let ifd0_offset: u32 = 8;
    let exif_ifd_offset: u32 = ifd0_offset + 2 + 12 + 4;
    let value_offset: u32 = exif_ifd_offset + 2 + 12 + 4;

    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&ifd0_offset.to_le_bytes());

    out.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut out, TAG_EXIF_IFD_POINTER, TYPE_LONG, 1, exif_ifd_offset);
    out.extend_from_slice(&0u32.to_le_bytes());

    out.extend_from_slice(&1u16.to_le_bytes());
    push_entry(
        &mut out,
        TAG_DATE_TIME_ORIGINAL,
        TYPE_ASCII,
        ascii.len() as u32,
        value_offset,
    );
    out.extend_from_slice(&0u32.to_le_bytes());

    out.extend_from_slice(&ascii);
    out
}

fn push_entry(out: &mut Vec<u8>, tag: u16, typ: u16, count: u32, value: u32) {
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&typ.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn jpeg_with_capture_time(value: &str) -> Vec<u8> {
    let mut payload = b"Exif\0\0".to_vec();
    payload.extend(tiff_with_date_time_original(value));

    let segment_len = (payload.len() + 2) as u16;
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend(payload);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

pub fn write_file(dir: &Path, name: &str, body: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write fixture");
    path
}

/// Writes a JPEG whose capture time is `date` at noon (`YYYY:MM:DD`).
pub fn write_photo(dir: &Path, name: &str, date: &str) -> PathBuf {
    write_file(dir, name, &jpeg_with_capture_time(&format!("{date} 12:00:00")))
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
