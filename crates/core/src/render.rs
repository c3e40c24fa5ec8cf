//! Paragraph splitting for generated story text.
//!
//! The browser client renders the returned story as one block per
//! paragraph, splitting on runs of two or more newlines. This module is
//! the server-side statement of that contract so the observable output
//! can be tested end to end.

/// Text shown in place of a story when generation returned nothing.
pub const NO_STORY_PLACEHOLDER: &str = "No story returned.";

/// Split story text into display paragraphs.
///
/// Runs of two or more consecutive newlines separate paragraphs; single
/// newlines are kept inside a paragraph. Each paragraph is trimmed and
/// empty paragraphs are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut newline_run = 0usize;

    for ch in text.chars() {
        if ch == '\n' {
            newline_run += 1;
            continue;
        }
        if newline_run >= 2 {
            flush(&mut paragraphs, &mut current);
        } else {
            for _ in 0..newline_run {
                current.push('\n');
            }
        }
        newline_run = 0;
        current.push(ch);
    }
    flush(&mut paragraphs, &mut current);

    paragraphs
}

/// Full render contract for story text.
///
/// Non-empty text is split into paragraphs; absent or empty text yields a
/// single [`NO_STORY_PLACEHOLDER`] block. Whitespace-only text splits to
/// zero blocks rather than the placeholder, matching the client's
/// check-before-split order.
pub fn display_blocks(text: Option<&str>) -> Vec<String> {
    match text {
        Some(t) if !t.is_empty() => split_paragraphs(t),
        _ => vec![NO_STORY_PLACEHOLDER.to_string()],
    }
}

/// Push the trimmed paragraph if non-empty and reset the accumulator.
fn flush(paragraphs: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
    current.clear();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
