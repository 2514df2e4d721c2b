//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the text renderings of the reports.

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a section title with an underline
pub fn format_section(title: &str, width: usize) -> String {
    format!("{}\n{}\n", title, separator(width.max(title.chars().count())))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(10.0, 10.0, 4), "████");
        assert_eq!(format_bar(-1.0, 10.0, 3), "   ");
        assert_eq!(format_bar(1.0, 0.0, 2), "  ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Furniture", 20), "Furniture");
        assert_eq!(truncate("Office Supplies", 9), "Office...");
        assert_eq!(truncate("Technology", 2), "..");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Cafés et thés", 8), "Cafés...");
    }

    #[test]
    fn test_format_section() {
        assert_eq!(format_section("Trend", 3), "Trend\n─────\n");
    }
}
