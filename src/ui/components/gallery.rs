//! Gallery component renderer.
//!
//! This module renders the media item list as a four-column table with TITLE,
//! CATEGORY, SIZE, and UPLOADED columns. It supports selection highlighting
//! and search match highlighting in the title column.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Fixed width of the TITLE column, including the separator space.
const TITLE_WIDTH: usize = 38;

/// Fixed width of the CATEGORY column, including the separator space.
const CATEGORY_WIDTH: usize = 13;

/// Fixed width of the SIZE column, including the separator space.
const SIZE_WIDTH: usize = 11;

/// Renders the gallery column headers at the specified row.
///
/// Displays "TITLE", "CATEGORY", "SIZE", and "UPLOADED" column headers with
/// bold styling and theme colors.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_gallery_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<37} {:<12} {:<10} {:<}", "TITLE", "CATEGORY", "SIZE", "UPLOADED");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all gallery rows starting at the specified row.
///
/// Iterates through display items and renders each as a gallery row with
/// proper selection and highlight styling.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_gallery_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_gallery_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single gallery row at the specified row position.
///
/// Displays one media item with:
/// - TITLE column (fixed width, left-aligned, match highlighting)
/// - CATEGORY column (fixed width, left-aligned)
/// - SIZE column (fixed width, left-aligned)
/// - UPLOADED column (remaining width)
/// - Selection highlighting (full row background)
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering.
fn render_gallery_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.title);
    } else {
        helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    }

    let title_len = item.title.chars().count().min(TITLE_WIDTH - 1);
    print!("{}", " ".repeat(TITLE_WIDTH.saturating_sub(title_len)));

    let category_len = item.category.chars().count().min(CATEGORY_WIDTH - 1);
    print!("{}", item.category);
    print!("{}", " ".repeat(CATEGORY_WIDTH.saturating_sub(category_len)));

    let size_len = item.size.chars().count().min(SIZE_WIDTH - 1);
    print!("{}", item.size);
    print!("{}", " ".repeat(SIZE_WIDTH.saturating_sub(size_len)));

    print!("{}", item.uploaded);

    let line_len = TITLE_WIDTH + CATEGORY_WIDTH + SIZE_WIDTH + item.uploaded.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
