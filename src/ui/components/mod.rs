//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with visible/total counts
//! - [`filter_bar`]: Category filter tab row
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`gallery`]: Media item list with columns (TITLE, CATEGORY, SIZE, UPLOADED)
//! - [`empty`]: Empty state message for an empty catalog
//!
//! # Layout Modes
//!
//! The module provides two high-level layout functions:
//!
//! - [`render_normal_mode`]: Header + `FilterBar` + Gallery + Footer
//! - [`render_search_mode`]: Header + `FilterBar` + `SearchBar` + Gallery + Footer

mod empty;
mod filter_bar;
mod footer;
mod gallery;
mod header;
mod search;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use filter_bar::render_filter_bar;
use footer::render_footer;
use gallery::{render_gallery_headers, render_gallery_rows};
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/gallery, gallery/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter Bar]
/// [Gallery Headers]
/// [Gallery Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Line Accounting
///
/// Reserves 7 lines for chrome (blank, header, 2 borders, filter bar, column
/// headers, footer). Fills remaining space with gallery rows and blank lines.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_gallery_headers(current_row, theme);
    let _current_row = render_gallery_rows(current_row, &vm.display_items, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter Bar]
/// [Search Bar - 3 lines]
/// [Gallery Headers]
/// [Gallery Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Line Accounting
///
/// Reserves 10 lines for chrome (blank, header, 2 borders, filter bar, search
/// bar [3 lines], column headers, footer). Fills remaining space with gallery
/// rows and blank lines.
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_gallery_headers(current_row, theme);
    let _current_row = render_gallery_rows(current_row, &vm.display_items, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
