//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components. It handles text rendering tasks like search match highlighting
//! with proper ANSI escape sequence management.
//!
//! # Features
//!
//! - **Match Highlighting**: Renders text with highlighted character ranges
//! - **Selection Awareness**: Adjusts highlighting based on selection state
//! - **UTF-8 Safe**: Operates on character indices, not byte indices

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use match highlight colors unless the
/// item is selected, in which case selection colors take precedence.
///
/// # Character Indices
///
/// Ranges are `(start, end)` pairs (inclusive start, exclusive end) in UTF-8
/// character indices, not byte indices. Ranges extending past the text (after
/// truncation) are clamped rather than panicking.
///
/// # Selection Behavior
///
/// When `is_selected` is `true`, match highlighting is disabled to avoid
/// conflicting with selection background colors.
///
/// # Output
///
/// Prints to stdout using ANSI escape sequences:
/// - Normal sections: current terminal color
/// - Highlighted sections: `match_highlight_fg` + `match_highlight_bg`
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
