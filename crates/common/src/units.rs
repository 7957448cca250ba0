//! Human-readable sizes, speeds and timestamps

use chrono::{DateTime, NaiveDateTime};

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;

/// Format a byte count using binary units with two decimals (`2.00 GB`)
pub fn format_memory_size(bytes: i64) -> String {
    let size = bytes as f64;
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if size < MB {
        format!("{:.2} KB", size / KB)
    } else if size < GB {
        format!("{:.2} MB", size / MB)
    } else if size < TB {
        format!("{:.2} GB", size / GB)
    } else {
        format!("{:.2} TB", size / TB)
    }
}

/// Disk sizes use the same scale as memory
pub fn format_disk_size(bytes: i64) -> String {
    format_memory_size(bytes)
}

/// Format a CPU speed given in Hz as GHz
pub fn format_cpu_capacity(hz: i64) -> String {
    format!("{:.2} GHz", hz as f64 / 1_000_000_000.0)
}

/// Render an RFC 3339 (or already `YYYY-MM-DD HH:MM:SS`) timestamp as
/// `YYYY-MM-DD HH:MM:SS`. Anything unparsable passes through untouched.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return ts.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}
