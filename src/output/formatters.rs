//! Formatting utilities for terminal output

/// Split `next` around the single letter that differs from `prev`
///
/// Returns `(before, changed, after)`, or `None` if the words are not one
/// substitution apart.
#[must_use]
pub fn split_change<'a>(prev: &str, next: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
    if prev.len() != next.len() || !next.is_ascii() || !prev.is_ascii() {
        return None;
    }

    let mut diffs = prev
        .bytes()
        .zip(next.bytes())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i);

    match (diffs.next(), diffs.next()) {
        (Some(i), None) => Some((&next[..i], &next[i..=i], &next[i + 1..])),
        _ => None,
    }
}

/// Join a ladder with arrows
#[must_use]
pub fn format_path(path: &[String]) -> String {
    path.join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
