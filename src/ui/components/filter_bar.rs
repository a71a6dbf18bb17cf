//! Category filter tab row renderer.
//!
//! This module renders the row of category tabs below the header. Exactly one
//! tab is active at a time; the active tab is drawn with the theme's filter
//! highlight colors, the rest dimmed.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the filter tab row at the specified row.
///
/// Tabs are drawn in display order (`"all"` first), each padded with one space
/// on either side. Tabs are prefixed with their one-based index so the number
/// keys map visibly onto them.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
///  [1:all] 2:photo 3:video
/// ```
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");
    let mut used = 1;

    for (index, tab) in bar.tabs.iter().enumerate() {
        let label = format!(" {}:{} ", index + 1, tab.label);

        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.filter_active_fg));
            if let Some(bg) = &theme.colors.filter_active_bg {
                print!("{}", Theme::bg(bg));
            }
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }

        print!("{label}");
        print!("{}", Theme::reset());
        print!(" ");

        used += label.chars().count() + 1;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
