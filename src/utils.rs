/// Utility helpers for ClipStream

/// Format a view count compactly: 950 stays "950", larger counts collapse
/// to "1.2K", "3.4M", "1.1B". One decimal place, trailing ".0" trimmed.
pub fn format_view_count(views: u64) -> String {
    const STEPS: [(u64, &str); 3] = [
        (1_000_000_000, "B"),
        (1_000_000, "M"),
        (1_000, "K"),
    ];

    for (step, suffix) in STEPS {
        if views >= step {
            let scaled = (views as f64 / step as f64 * 10.0).floor() / 10.0;
            return if scaled.fract() == 0.0 {
                format!("{}{}", scaled as u64, suffix)
            } else {
                format!("{scaled:.1}{suffix}")
            };
        }
    }

    views.to_string()
}

/// "1 view" / "1.2K views" label used wherever a count is displayed.
pub fn views_label(views: u64) -> String {
    if views == 1 {
        "1 view".to_string()
    } else {
        format!("{} views", format_view_count(views))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::format_view_count;

    #[test]
    fn small_counts_stay_verbatim() {
        assert_eq!(format_view_count(0), "0");
        assert_eq!(format_view_count(1), "1");
        assert_eq!(format_view_count(999), "999");
    }

    #[test]
    fn view_labels_pluralize() {
        use super::views_label;
        assert_eq!(views_label(0), "0 views");
        assert_eq!(views_label(1), "1 view");
        assert_eq!(views_label(2_500), "2.5K views");
    }

    #[test]
    fn large_counts_collapse_with_one_decimal() {
        assert_eq!(format_view_count(1_000), "1K");
        assert_eq!(format_view_count(1_234), "1.2K");
        assert_eq!(format_view_count(999_999), "999.9K");
        assert_eq!(format_view_count(3_400_000), "3.4M");
        assert_eq!(format_view_count(1_100_000_000), "1.1B");
    }
}
