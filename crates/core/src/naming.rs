use chrono::NaiveDateTime;

pub const TARGET_EXTENSION: &str = "jpg";
const INDEX_WIDTH: usize = 2;
const DATE_FORMAT: &str = "%d%b%Y";

/// `"<index> - <DDMMMYYYY>.jpg"`, index zero-padded to at least two digits.
pub fn target_file_name(index: usize, capture_time: &NaiveDateTime) -> String {
    format!(
        "{:0width$} - {}.{}",
        index,
        format_date(capture_time),
        TARGET_EXTENSION,
        width = INDEX_WIDTH
    )
}

pub fn format_date(capture_time: &NaiveDateTime) -> String {
    capture_time.format(DATE_FORMAT).to_string().to_uppercase()
}
