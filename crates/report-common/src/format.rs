//! Small presentation helpers shared by the views.

/// Human-readable file size for the selected-file label.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} B", bytes)
    }
}

/// Client-side counterpart of the server's upload check.
pub fn is_csv_filename(name: &str) -> bool {
    name.trim().to_lowercase().ends_with(".csv")
}
