pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.unsigned_abs().to_string();
    let mut result = String::new();
    if number < 0 {
        result.push('-');
    }
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

const SI_UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const IEC_UNITS: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Renders a byte count with one decimal, in powers of 1000 (`use_si`) or 1024.
pub fn human_file_size(bytes: f64, use_si: bool) -> String {
    let thresh = if use_si { 1000.0 } else { 1024.0 };
    if bytes.abs() < thresh {
        return format!("{bytes} B");
    }

    let units = if use_si { &SI_UNITS } else { &IEC_UNITS };
    let mut size = bytes / thresh;
    let mut unit = 0;
    while (size.abs() * 10.0).round() / 10.0 >= thresh && unit < units.len() - 1 {
        size /= thresh;
        unit += 1;
    }

    format!("{size:.1} {}", units[unit])
}
