//! Formatting utilities for terminal output

/// Uppercase display form of a letter
#[must_use]
pub fn letter_label(letter: u8) -> String {
    char::from(letter.to_ascii_uppercase()).to_string()
}

/// Put a space between the characters of a rendered word
///
/// `"_a_"` becomes `"_ a _"`, which keeps adjacent blanks countable.
#[must_use]
pub fn spaced(rendered: &str) -> String {
    let mut result = String::with_capacity(rendered.len() * 2);
    for (i, ch) in rendered.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
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

/// One mark per allowed wrong guess, filled for those used
#[must_use]
pub fn wrong_meter(wrong: usize, max_wrong: usize) -> String {
    let used = wrong.min(max_wrong);
    format!("{}{}", "✗".repeat(used), "·".repeat(max_wrong - used))
}
