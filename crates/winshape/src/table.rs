use winshape_core::window::WindowInfo;

/// Print a formatted table of windows
pub fn print_windows_table(windows: &[WindowInfo]) {
    // Calculate column widths
    let handle_width = windows
        .iter()
        .map(|w| w.handle().to_string().len())
        .max()
        .unwrap_or(6)
        .clamp(6, 20);
    let title_width = windows
        .iter()
        .map(|w| w.display_title().chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 40);
    let size_width = 11; // "1920x1080" format
    let pos_width = 14; // "x:1234 y:1234" format

    // Header
    println!(
        "┌{}┬{}┬{}┬{}┐",
        "─".repeat(handle_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(size_width + 2),
        "─".repeat(pos_width + 2),
    );
    println!(
        "│ {:<handle_width$} │ {:<title_width$} │ {:<size_width$} │ {:<pos_width$} │",
        "Handle",
        "Title",
        "Size",
        "Position",
        handle_width = handle_width,
        title_width = title_width,
        size_width = size_width,
        pos_width = pos_width,
    );
    println!(
        "├{}┼{}┼{}┼{}┤",
        "─".repeat(handle_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(size_width + 2),
        "─".repeat(pos_width + 2),
    );

    // Rows
    for window in windows {
        let size = format!("{}x{}", window.width(), window.height());
        let pos = format!("x:{} y:{}", window.x(), window.y());

        println!(
            "│ {:<handle_width$} │ {:<title_width$} │ {:<size_width$} │ {:<pos_width$} │",
            window.handle(),
            truncate(window.display_title(), title_width),
            truncate(&size, size_width),
            truncate(&pos, pos_width),
            handle_width = handle_width,
            title_width = title_width,
            size_width = size_width,
            pos_width = pos_width,
        );
    }

    // Footer
    println!(
        "└{}┴{}┴{}┴{}┘",
        "─".repeat(handle_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(size_width + 2),
        "─".repeat(pos_width + 2),
    );

    println!("\nTotal: {} window(s)", windows.len());
}

/// Truncate a string to `max` characters, appending an ellipsis when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("Notepad", 10), "Notepad");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        assert_eq!(truncate("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        let result = truncate("A very long window title", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with('…'));
    }

    #[test]
    fn test_print_windows_table_does_not_panic() {
        let windows = vec![
            WindowInfo::new(66062, "Notepad".to_string(), 0, 0, 800, 600),
            WindowInfo::new(131184, String::new(), 100, 50, 1920, 1080),
        ];
        print_windows_table(&windows);
    }

    #[test]
    fn test_print_empty_table_does_not_panic() {
        print_windows_table(&[]);
    }
}
