//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an optional length, `-` when absent
#[must_use]
pub fn format_length(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Format an optional statistic, `-` when absent
///
/// Whole numbers keep one decimal so `3.0` reads as a mean, not a count.
#[must_use]
pub fn format_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:?}"))
}

/// Join words with commas, eliding everything past `max_shown`
#[must_use]
pub fn word_list(words: &[String], max_shown: usize) -> String {
    if words.len() <= max_shown {
        return words.join(", ");
    }

    format!(
        "{}, … (+{} more)",
        words[..max_shown].join(", "),
        words.len() - max_shown
    )
}

/// `1 word`, `3 words`
#[must_use]
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn optional_values() {
        assert_eq!(format_length(None), "-");
        assert_eq!(format_length(Some(7)), "7");
        assert_eq!(format_stat(None), "-");
        assert_eq!(format_stat(Some(3.0)), "3.0");
        assert_eq!(format_stat(Some(4.375)), "4.375");
    }

    #[test]
    fn word_list_elides() {
        let list = words(&["stop", "pots", "tops", "opts"]);
        assert_eq!(word_list(&list, 4), "stop, pots, tops, opts");
        assert_eq!(word_list(&list, 2), "stop, pots, … (+2 more)");
        assert_eq!(word_list(&[], 3), "");
    }

    #[test]
    fn count_nouns() {
        assert_eq!(count_noun(1, "word", "words"), "1 word");
        assert_eq!(count_noun(0, "word", "words"), "0 words");
        assert_eq!(count_noun(2, "group", "groups"), "2 groups");
    }
}
