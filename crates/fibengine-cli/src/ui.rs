//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render a styled header line.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Render a status tag such as `[OK]` or `[BUSY]`.
#[must_use]
pub fn tag(label: &str, ok: bool) -> String {
    let text = format!("[{label}]");
    if is_color_disabled() {
        text
    } else if ok {
        style(text).green().bold().to_string()
    } else {
        style(text).red().bold().to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", tag("ERROR", false));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("F(10)").contains("=== F(10) ==="));
    }

    #[test]
    fn tag_contains_label() {
        assert!(tag("OK", true).contains("[OK]"));
        assert!(tag("BUSY", false).contains("[BUSY]"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
        print_error("");
    }
}
