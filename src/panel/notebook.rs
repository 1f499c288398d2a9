//! Tabbed page container
//!
//! An ordered list of pages with at most one current page. Every operation
//! that changes which page is current reports it as a `PageSwitch`, so the
//! owner can react (the panel uses it to sync its title bar).

use serde::{Deserialize, Serialize};

use super::chrome::TabLabel;
use super::item::WidgetId;
use crate::widget::SizeRequest;

/// Which edge of the notebook the tab strip sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPosition {
    Top,
    #[default]
    Bottom,
}

/// Reported whenever the current page changes to a different page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSwitch {
    pub page: usize,
    pub widget: WidgetId,
}

/// One page: the hosted widget plus its tab and menu labels
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub widget: WidgetId,
    pub tab_label: TabLabel,
    /// Label shown in the tab overflow popup menu
    pub menu_label: String,
    pub width_request: SizeRequest,
    pub height_request: SizeRequest,
}

impl Page {
    pub fn new(widget: WidgetId, tab_label: TabLabel, menu_label: impl Into<String>) -> Self {
        Self {
            widget,
            tab_label,
            menu_label: menu_label.into(),
            width_request: SizeRequest::ZERO,
            height_request: SizeRequest::ZERO,
        }
    }
}

/// Ordered, paged container
#[derive(Debug, Clone, Default)]
pub struct Notebook {
    pages: Vec<Page>,
    current: Option<usize>,
    pub tab_position: TabPosition,
    /// Scroll the tab strip instead of growing when tabs overflow
    pub scrollable: bool,
    /// Secondary-clicking the tab strip lists all pages by menu label
    pub popup_enabled: bool,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn current_page(&self) -> Option<usize> {
        self.current
    }

    /// Index of the page hosting `widget`
    pub fn page_num(&self, widget: WidgetId) -> Option<usize> {
        self.pages.iter().position(|page| page.widget == widget)
    }

    pub fn page(&self, widget: WidgetId) -> Option<&Page> {
        self.pages.iter().find(|page| page.widget == widget)
    }

    pub fn page_mut(&mut self, widget: WidgetId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|page| page.widget == widget)
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// The current page, if any
    pub fn current(&self) -> Option<&Page> {
        self.current.and_then(|i| self.pages.get(i))
    }

    /// Append a page at the end; the first page becomes current
    pub fn append_page(&mut self, page: Page) -> Option<PageSwitch> {
        self.pages.push(page);
        if self.current.is_none() {
            self.switch_to(self.pages.len() - 1)
        } else {
            None
        }
    }

    /// Remove the page at `index`
    ///
    /// When the current page is removed, the page after it becomes current,
    /// or the one before it if it was the last page.
    pub fn remove_page(&mut self, index: usize) -> Option<(Page, Option<PageSwitch>)> {
        if index >= self.pages.len() {
            return None;
        }

        let page = self.pages.remove(index);
        let switch = match self.current {
            Some(current) if current == index => {
                self.current = None;
                if self.pages.is_empty() {
                    None
                } else {
                    self.switch_to(index.min(self.pages.len() - 1))
                }
            }
            Some(current) if current > index => {
                // Same page, shifted left
                self.current = Some(current - 1);
                None
            }
            _ => None,
        };

        Some((page, switch))
    }

    /// Make `index` the current page
    ///
    /// Out-of-range indices and the already-current page report nothing.
    pub fn set_current_page(&mut self, index: usize) -> Option<PageSwitch> {
        if index >= self.pages.len() || self.current == Some(index) {
            return None;
        }
        self.switch_to(index)
    }

    /// Cycle to the next page, wrapping around
    pub fn next_page(&mut self) -> Option<PageSwitch> {
        let len = self.pages.len();
        match self.current {
            Some(current) if len > 1 => self.switch_to((current + 1) % len),
            _ => None,
        }
    }

    /// Cycle to the previous page, wrapping around
    pub fn prev_page(&mut self) -> Option<PageSwitch> {
        let len = self.pages.len();
        match self.current {
            Some(current) if len > 1 => self.switch_to((current + len - 1) % len),
            _ => None,
        }
    }

    /// Entries of the tab popup menu, one per page in order
    ///
    /// `None` when the popup is disabled or there are no pages.
    pub fn popup_menu(&self) -> Option<Vec<(WidgetId, &str)>> {
        if !self.popup_enabled || self.pages.is_empty() {
            return None;
        }
        Some(
            self.pages
                .iter()
                .map(|page| (page.widget, page.menu_label.as_str()))
                .collect(),
        )
    }

    fn switch_to(&mut self, index: usize) -> Option<PageSwitch> {
        let widget = self.pages.get(index)?.widget;
        self.current = Some(index);
        Some(PageSwitch {
            page: index,
            widget,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Icon;

    fn page(n: u64) -> Page {
        Page::new(
            WidgetId(n),
            TabLabel::new(format!("Page {}", n), Icon::generic(), true),
            format!("Page {}", n),
        )
    }

    fn notebook_with(n: u64) -> Notebook {
        let mut notebook = Notebook::new();
        for i in 0..n {
            notebook.append_page(page(i));
        }
        notebook
    }

    #[test]
    fn test_first_page_becomes_current() {
        let mut notebook = Notebook::new();
        assert_eq!(notebook.current_page(), None);

        let switch = notebook.append_page(page(1));
        assert_eq!(
            switch,
            Some(PageSwitch {
                page: 0,
                widget: WidgetId(1)
            })
        );

        // Later pages do not steal focus
        assert_eq!(notebook.append_page(page(2)), None);
        assert_eq!(notebook.current_page(), Some(0));
    }

    #[test]
    fn test_remove_current_picks_next_then_previous() {
        let mut notebook = notebook_with(3);
        notebook.set_current_page(1);

        let (removed, switch) = notebook.remove_page(1).unwrap();
        assert_eq!(removed.widget, WidgetId(1));
        assert_eq!(switch.map(|s| s.widget), Some(WidgetId(2)));
        assert_eq!(notebook.current_page(), Some(1));

        // Removing the last page while current falls back to the previous one
        let (_, switch) = notebook.remove_page(1).unwrap();
        assert_eq!(switch.map(|s| s.widget), Some(WidgetId(0)));

        let (_, switch) = notebook.remove_page(0).unwrap();
        assert_eq!(switch, None);
        assert_eq!(notebook.current_page(), None);
    }

    #[test]
    fn test_remove_before_current_keeps_page() {
        let mut notebook = notebook_with(3);
        notebook.set_current_page(2);

        let (_, switch) = notebook.remove_page(0).unwrap();
        assert_eq!(switch, None);
        assert_eq!(notebook.current().map(|p| p.widget), Some(WidgetId(2)));
    }

    #[test]
    fn test_popup_menu_lists_menu_labels() {
        let mut notebook = notebook_with(2);
        assert_eq!(notebook.popup_menu(), None);

        notebook.popup_enabled = true;
        assert_eq!(
            notebook.popup_menu(),
            Some(vec![(WidgetId(0), "Page 0"), (WidgetId(1), "Page 1")])
        );

        let mut empty = Notebook::new();
        empty.popup_enabled = true;
        assert_eq!(empty.popup_menu(), None);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut notebook = notebook_with(1);
        assert!(notebook.remove_page(5).is_none());
        assert_eq!(notebook.n_pages(), 1);
    }

    #[test]
    fn test_set_current_same_page_reports_nothing() {
        let mut notebook = notebook_with(2);
        assert_eq!(notebook.set_current_page(0), None);
        assert!(notebook.set_current_page(1).is_some());
        assert_eq!(notebook.set_current_page(9), None);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut notebook = notebook_with(3);
        notebook.prev_page();
        assert_eq!(notebook.current_page(), Some(2));
        notebook.next_page();
        assert_eq!(notebook.current_page(), Some(0));

        let mut single = notebook_with(1);
        assert_eq!(single.next_page(), None);
    }
}
