//! Panel layout and hit-testing
//!
//! Pure functions: given an allocation, an orientation and the tab labels,
//! compute where every part of the panel goes. Shared by size negotiation,
//! painting and click handling so they always agree.

use super::chrome::TabLabel;
use super::icon::MENU_ICON_SIZE;
use super::notebook::TabPosition;
use super::orientation::Orientation;
use crate::widget::{Rect, SizeRequest};

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the side panel title bar
pub const TITLE_BAR_HEIGHT: f32 = 26.0;
/// Spacing between title bar children
pub const TITLE_SPACING: f32 = 6.0;
/// Edge length of the close button
pub const CLOSE_BUTTON_SIZE: f32 = 18.0;
/// Border around the bottom panel's close column
pub const SIDEBAR_BORDER: f32 = 4.0;
/// Height of the tab strip
pub const TAB_STRIP_HEIGHT: f32 = 26.0;
/// Horizontal padding inside a tab
pub const TAB_PADDING: f32 = 6.0;
/// Spacing between a tab's icon and its text
pub const TAB_LABEL_SPACING: f32 = 4.0;
/// Approximate advance of one label character
pub const CHAR_WIDTH: f32 = 7.0;

const ICON: f32 = MENU_ICON_SIZE as f32;

/// Where each part of the panel is placed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelLayout {
    /// Title bar (side panels only)
    pub title_bar: Option<Rect>,
    /// Icon inside the title bar
    pub title_icon: Option<Rect>,
    /// Label inside the title bar
    pub title_label: Option<Rect>,
    pub close_button: Rect,
    /// Whole notebook, tabs included
    pub notebook: Rect,
    /// Tab strip along one edge of the notebook (empty without pages)
    pub tab_strip: Rect,
    /// Area given to the current page
    pub page_area: Rect,
    /// One rect per tab, in page order
    pub tabs: Vec<Rect>,
}

/// What a point inside the panel lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    CloseButton,
    Tab(usize),
    TitleBar,
    Page,
}

/// Width of a single tab
pub fn tab_width(label: &TabLabel) -> f32 {
    let mut width = 2.0 * TAB_PADDING + ICON;
    if label.text_visible {
        width += TAB_LABEL_SPACING + label.text.chars().count() as f32 * CHAR_WIDTH;
    }
    width
}

/// Width of the bottom panel's close column
#[inline]
pub fn close_column_width() -> f32 {
    CLOSE_BUTTON_SIZE + 2.0 * SIDEBAR_BORDER
}

/// Lay out a panel inside `allocation`
pub fn compute_layout(
    orientation: Orientation,
    tab_position: TabPosition,
    allocation: Rect,
    tabs: &[TabLabel],
) -> PanelLayout {
    let mut layout = PanelLayout::default();

    match orientation {
        Orientation::Vertical => {
            let title_h = TITLE_BAR_HEIGHT.min(allocation.height);
            let title = Rect::new(allocation.x, allocation.y, allocation.width, title_h);
            let center_y = title.y + (title_h - CLOSE_BUTTON_SIZE).max(0.0) / 2.0;

            layout.close_button = Rect::new(
                (title.right() - CLOSE_BUTTON_SIZE - SIDEBAR_BORDER).max(title.x),
                center_y,
                CLOSE_BUTTON_SIZE.min(title.width),
                CLOSE_BUTTON_SIZE.min(title_h),
            );

            let icon_y = title.y + (title_h - ICON).max(0.0) / 2.0;
            let icon = Rect::new(title.x + TITLE_SPACING, icon_y, ICON, ICON.min(title_h));
            let label_x = icon.right() + TITLE_SPACING;
            let label = Rect::new(
                label_x,
                title.y,
                (layout.close_button.x - TITLE_SPACING - label_x).max(0.0),
                title_h,
            );

            layout.title_bar = Some(title);
            layout.title_icon = Some(icon);
            layout.title_label = Some(label);
            layout.notebook = Rect::new(
                allocation.x,
                title.bottom(),
                allocation.width,
                allocation.height - title_h,
            );
        }
        Orientation::Horizontal => {
            let notebook_w = (allocation.width - close_column_width()).max(0.0);
            layout.notebook = Rect::new(allocation.x, allocation.y, notebook_w, allocation.height);
            layout.close_button = Rect::new(
                layout.notebook.right() + SIDEBAR_BORDER,
                allocation.y + SIDEBAR_BORDER,
                CLOSE_BUTTON_SIZE,
                CLOSE_BUTTON_SIZE,
            );
        }
    }

    let notebook = layout.notebook;
    let strip_h = if tabs.is_empty() {
        0.0
    } else {
        TAB_STRIP_HEIGHT.min(notebook.height)
    };
    let page_h = notebook.height - strip_h;
    match tab_position {
        TabPosition::Top => {
            layout.tab_strip = Rect::new(notebook.x, notebook.y, notebook.width, strip_h);
            layout.page_area = Rect::new(notebook.x, notebook.y + strip_h, notebook.width, page_h);
        }
        TabPosition::Bottom => {
            layout.tab_strip = Rect::new(notebook.x, notebook.y + page_h, notebook.width, strip_h);
            layout.page_area = Rect::new(notebook.x, notebook.y, notebook.width, page_h);
        }
    }

    if !tabs.is_empty() {
        let mut x = layout.tab_strip.x;
        for label in tabs {
            let width = tab_width(label);
            layout
                .tabs
                .push(Rect::new(x, layout.tab_strip.y, width, strip_h));
            x += width;
        }
    }

    layout
}

/// Find what lies under a point
///
/// Tabs scrolled past the end of the strip are not hit.
pub fn hit_test(layout: &PanelLayout, x: f32, y: f32) -> Option<HitTarget> {
    if layout.close_button.contains(x, y) {
        return Some(HitTarget::CloseButton);
    }

    if layout.tab_strip.contains(x, y) {
        return layout
            .tabs
            .iter()
            .position(|tab| tab.contains(x, y))
            .map(HitTarget::Tab);
    }

    if layout.title_bar.is_some_and(|title| title.contains(x, y)) {
        return Some(HitTarget::TitleBar);
    }

    if layout.page_area.contains(x, y) {
        return Some(HitTarget::Page);
    }

    None
}

/// Preferred width of the notebook for the given page requests and tabs
///
/// A scrollable tab strip only needs room for the widest single tab; a
/// fixed one needs every tab.
pub fn notebook_width(pages: SizeRequest, tabs: &[TabLabel], scrollable: bool) -> SizeRequest {
    let widths = tabs.iter().map(tab_width);
    let widest = widths.clone().fold(0.0, f32::max);
    let total: f32 = widths.sum();
    let minimum = if scrollable { widest } else { total };
    pages.max(SizeRequest::new(minimum, total))
}

/// Preferred height of the notebook for the given page requests
pub fn notebook_height(pages: SizeRequest, has_tabs: bool) -> SizeRequest {
    if has_tabs {
        pages.add(SizeRequest::fixed(TAB_STRIP_HEIGHT))
    } else {
        pages
    }
}

/// Preferred width of the side panel title bar
///
/// The label ellipsizes, so only the natural width depends on it.
pub fn title_width(label: &str) -> SizeRequest {
    let fixed = 3.0 * TITLE_SPACING + ICON + CLOSE_BUTTON_SIZE;
    SizeRequest::new(fixed, fixed + label.chars().count() as f32 * CHAR_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Icon;

    fn tab(text: &str, text_visible: bool) -> TabLabel {
        TabLabel::new(text, Icon::generic(), text_visible)
    }

    #[test]
    fn test_tab_width_depends_on_text_visibility() {
        assert_eq!(tab_width(&tab("Files", false)), 28.0);
        assert_eq!(tab_width(&tab("Files", true)), 28.0 + 4.0 + 35.0);
    }

    #[test]
    fn test_vertical_layout_stacks_title_above_notebook() {
        let alloc = Rect::new(0.0, 0.0, 200.0, 400.0);
        let layout = compute_layout(
            Orientation::Vertical,
            TabPosition::Bottom,
            alloc,
            &[tab("A", false)],
        );

        let title = layout.title_bar.unwrap();
        assert_eq!(title.height, TITLE_BAR_HEIGHT);
        assert_eq!(layout.notebook.y, TITLE_BAR_HEIGHT);
        assert_eq!(layout.tab_strip.bottom(), 400.0);
        assert_eq!(layout.page_area.height, 400.0 - TITLE_BAR_HEIGHT - TAB_STRIP_HEIGHT);
        assert!(title.contains(layout.close_button.x, layout.close_button.y));
    }

    #[test]
    fn test_tabs_on_top_sit_above_page_area() {
        let alloc = Rect::new(0.0, 0.0, 600.0, 150.0);
        let layout = compute_layout(
            Orientation::Horizontal,
            TabPosition::Top,
            alloc,
            &[tab("Terminal", true), tab("Output", true)],
        );

        assert_eq!(layout.tab_strip.y, 0.0);
        assert_eq!(layout.tab_strip.height, TAB_STRIP_HEIGHT);
        assert_eq!(layout.page_area.y, TAB_STRIP_HEIGHT);
        assert_eq!(layout.page_area.bottom(), 150.0);
        assert!(layout.tabs.iter().all(|t| t.y == 0.0));

        let first = layout.tabs[0];
        assert_eq!(
            hit_test(&layout, first.x + 2.0, first.y + 2.0),
            Some(HitTarget::Tab(0))
        );
    }

    #[test]
    fn test_horizontal_layout_has_close_column() {
        let alloc = Rect::new(0.0, 0.0, 600.0, 150.0);
        let layout = compute_layout(Orientation::Horizontal, TabPosition::Bottom, alloc, &[]);

        assert!(layout.title_bar.is_none());
        assert_eq!(layout.notebook.width, 600.0 - close_column_width());
        assert_eq!(layout.close_button.x, layout.notebook.right() + SIDEBAR_BORDER);
        // No pages: no tab strip
        assert_eq!(layout.tab_strip.height, 0.0);
        assert_eq!(layout.page_area, layout.notebook);
    }

    #[test]
    fn test_hit_test() {
        let alloc = Rect::new(0.0, 0.0, 200.0, 300.0);
        let layout = compute_layout(
            Orientation::Vertical,
            TabPosition::Bottom,
            alloc,
            &[tab("A", false), tab("B", false)],
        );

        let close = layout.close_button;
        assert_eq!(
            hit_test(&layout, close.x + 1.0, close.y + 1.0),
            Some(HitTarget::CloseButton)
        );
        assert_eq!(hit_test(&layout, 2.0, 2.0), Some(HitTarget::TitleBar));
        assert_eq!(hit_test(&layout, 100.0, 100.0), Some(HitTarget::Page));

        let second = layout.tabs[1];
        assert_eq!(
            hit_test(&layout, second.x + 2.0, second.y + 2.0),
            Some(HitTarget::Tab(1))
        );
        // Empty part of the strip
        assert_eq!(hit_test(&layout, 190.0, 290.0), None);
        assert_eq!(hit_test(&layout, 500.0, 500.0), None);
    }

    #[test]
    fn test_notebook_sizes() {
        let tabs = [tab("Alpha", true), tab("Be", true)];
        let width = notebook_width(SizeRequest::ZERO, &tabs, true);
        assert_eq!(width.minimum, tab_width(&tabs[0]));
        assert_eq!(width.natural, tab_width(&tabs[0]) + tab_width(&tabs[1]));

        // A fixed strip cannot shrink below all of its tabs
        let fixed = notebook_width(SizeRequest::ZERO, &tabs, false);
        assert_eq!(fixed.minimum, width.natural);
        assert_eq!(fixed.natural, width.natural);

        let height = notebook_height(SizeRequest::new(50.0, 100.0), true);
        assert_eq!(height, SizeRequest::new(76.0, 126.0));
        assert_eq!(notebook_height(SizeRequest::ZERO, false), SizeRequest::ZERO);
    }
}
