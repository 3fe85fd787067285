//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Feedback};

/// Format feedback as key pegs
///
/// `●` for each exact peg, `○` for each colour-only peg, `·` for the rest.
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback) -> String {
    let exact = usize::from(feedback.exact());
    let color_only = usize::from(feedback.color_only());

    let mut result = String::with_capacity(CODE_LENGTH * 3);
    result.push_str(&"●".repeat(exact));
    result.push_str(&"○".repeat(color_only));
    result.push_str(&"·".repeat(CODE_LENGTH.saturating_sub(exact + color_only)));
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
