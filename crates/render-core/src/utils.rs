use chrono::{DateTime, Utc};

/// Prefix of the secondary certificate id shown on printable certificates.
pub const CERTIFICATE_ID_PREFIX: &str = "CERT-";

/// Date-only rendering of a timestamp, `M/D/YYYY` in UTC.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// Time-of-day rendering of a timestamp, `h:mm:ss AM` in UTC.
pub fn format_time(at: &DateTime<Utc>) -> String {
    at.format("%-I:%M:%S %p").to_string()
}

/// Date and time together, `M/D/YYYY, h:mm:ss AM` in UTC.
pub fn format_date_time(at: &DateTime<Utc>) -> String {
    format!("{}, {}", format_date(at), format_time(at))
}

/// `CERT-` followed by the last eight characters of the credit id.
/// Ids shorter than eight characters are used whole.
pub fn certificate_id(credit_id: &str) -> String {
    let count = credit_id.chars().count();
    let tail: String = credit_id.chars().skip(count.saturating_sub(8)).collect();
    format!("{}{}", CERTIFICATE_ID_PREFIX, tail)
}

/// Wraps `text` into lines no wider than `max_width`, measuring each
/// character with `char_width`.
///
/// Words longer than a full line are broken across lines, so no input is ever
/// dropped. Explicit newlines start a new line. Always returns at least one
/// line, which is empty for empty input.
pub fn wrap_text<F>(text: &str, max_width: f32, char_width: F) -> Vec<String>
where
    F: Fn(char) -> f32,
{
    let limit = if max_width > 0.0 { max_width } else { f32::INFINITY };
    let space_width = char_width(' ');

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0.0f32;

        for word in paragraph.split_whitespace() {
            let word_width: f32 = word.chars().map(&char_width).sum();
            let needed = if current_line.is_empty() {
                word_width
            } else {
                current_width + space_width + word_width
            };

            if needed <= limit {
                if !current_line.is_empty() {
                    current_line.push(' ');
                    current_width += space_width;
                }
                current_line.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0.0;
            }

            // Every line keeps at least one character, even one wider than the limit.
            for c in word.chars() {
                let width = char_width(c);
                if !current_line.is_empty() && current_width + width > limit {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0.0;
                }
                current_line.push(c);
                current_width += width;
            }
        }

        lines.push(current_line);
    }
    lines
}
