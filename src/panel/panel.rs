//! The panel container
//!
//! A `Panel` hosts named items as notebook pages. Side panels (vertical)
//! show a title bar with the active item's icon and name; bottom panels
//! (horizontal) show the item names on the tabs instead and only carry a
//! close button.

use std::collections::HashMap;
use std::rc::Weak;

use super::chrome::{CloseButton, PanelChrome, TabLabel, TitleBar};
use super::error::PanelError;
use super::events::{ListenerId, Listeners, PanelEvent};
use super::geometry::{self, HitTarget, PanelLayout};
use super::icon::Icon;
use super::item::{stable_id, PanelItem, WidgetId};
use super::notebook::{Notebook, Page, PageSwitch};
use super::orientation::Orientation;
use super::paint::{DisplayList, PaintOp};
use crate::config::PanelConfig;
use crate::host::Toplevel;
use crate::keymap::{Command, Keymap, Keystroke};
use crate::widget::{Focusable, Paintable, Rect, SizeRequest, Sizeable};

/// What a keystroke did to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No binding for this keystroke; let the host handle it
    Ignored,
    /// A binding ran
    Handled,
    /// The host should move keyboard focus to this document view
    FocusView(WidgetId),
}

/// Dockable container of named tool views
#[derive(Debug)]
pub struct Panel {
    orientation: Orientation,
    notebook: Notebook,
    /// Identity records, keyed by the hosted widget
    items: HashMap<WidgetId, PanelItem>,
    chrome: PanelChrome,
    default_icon: String,
    visible: bool,
    allocation: Rect,
    layout: PanelLayout,
    toplevel: Option<Weak<dyn Toplevel>>,
    keymap: Keymap,
    listeners: Listeners,
}

impl Panel {
    /// Create an empty panel with default configuration
    pub fn new(orientation: Orientation) -> Self {
        Self::with_config(orientation, &PanelConfig::default())
    }

    pub fn with_config(orientation: Orientation, config: &PanelConfig) -> Self {
        let mut notebook = Notebook::new();
        notebook.tab_position = config.tab_position;
        notebook.scrollable = config.scrollable_tabs;
        notebook.popup_enabled = config.tab_menu;

        let chrome = PanelChrome::build(
            orientation,
            TitleBar::new(config.empty_title.clone(), config.default_icon.clone()),
            CloseButton {
                tooltip: config.close_tooltip.clone(),
            },
        );

        tracing::debug!("Created {} panel", orientation);

        let mut panel = Self {
            orientation,
            notebook,
            items: HashMap::new(),
            chrome,
            default_icon: config.default_icon.clone(),
            visible: false,
            allocation: Rect::default(),
            layout: PanelLayout::default(),
            toplevel: None,
            keymap: Keymap::panel_defaults(),
            listeners: Listeners::new(),
        };
        panel.relayout();
        panel
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Add `widget` as a new item at the end of the tab order
    ///
    /// Uses the default icon when `icon` is `None`. Fails without changing
    /// anything if `id` is empty, already used, or `widget` is already hosted.
    pub fn add_item(
        &mut self,
        widget: WidgetId,
        id: &str,
        display_name: &str,
        icon: Option<Icon>,
    ) -> Result<(), PanelError> {
        if id.is_empty() {
            tracing::error!("add_item called with an empty id");
            return Err(PanelError::InvalidArgument("item id must not be empty"));
        }

        if self.item_exists(id) {
            tracing::error!(
                "Trying to add an item with an id that already exists: {}",
                id
            );
            return Err(PanelError::DuplicateId(id.to_string()));
        }

        if self.items.contains_key(&widget) {
            tracing::error!("{} is already in the panel", widget);
            return Err(PanelError::AlreadyAdded(widget));
        }

        let icon = icon.unwrap_or_else(|| Icon::Named(self.default_icon.clone()));
        let tab_label = TabLabel::new(display_name, icon.clone(), self.orientation.shows_tab_text());
        let page = Page::new(widget, tab_label, display_name);

        self.items
            .insert(widget, PanelItem::new(id, display_name, icon));

        if let Some(switch) = self.notebook.append_page(page) {
            self.page_switched(switch);
        }
        self.relayout();

        tracing::debug!(
            "Added item '{}' ({}) to {} panel",
            id,
            widget,
            self.orientation
        );
        self.listeners.emit(PanelEvent::ItemAdded(widget));

        Ok(())
    }

    /// Add an item whose icon is given by name
    ///
    /// Legacy `gtk-*` stock names are accepted; a missing or blank name
    /// falls back to the default icon.
    pub fn add_item_with_fallback_icon(
        &mut self,
        widget: WidgetId,
        id: &str,
        display_name: &str,
        icon_name: Option<&str>,
    ) -> Result<(), PanelError> {
        let icon = icon_name.and_then(Icon::from_name);
        self.add_item(widget, id, display_name, icon)
    }

    /// Remove `widget` from the panel
    ///
    /// Ownership of the widget stays with the caller. `ItemRemoved` is
    /// emitted after the page is gone.
    pub fn remove_item(&mut self, widget: WidgetId) -> Result<(), PanelError> {
        let page_num = self
            .notebook
            .page_num(widget)
            .ok_or(PanelError::NotFound(widget))?;

        let record = self.items.remove(&widget);

        if let Some((_, Some(switch))) = self.notebook.remove_page(page_num) {
            self.page_switched(switch);
        }

        if self.notebook.is_empty() {
            self.sync_title(None);
        }
        self.relayout();

        tracing::debug!(
            "Removed item '{}' ({}) from {} panel",
            record.as_ref().map(|r| r.id.as_str()).unwrap_or("?"),
            widget,
            self.orientation
        );
        self.listeners.emit(PanelEvent::ItemRemoved(widget));

        Ok(())
    }

    /// Drop bookkeeping for a widget the host has destroyed
    pub fn item_destroyed(&mut self, widget: WidgetId) -> Result<(), PanelError> {
        if self.notebook.page_num(widget).is_none() {
            return Err(PanelError::NotFound(widget));
        }
        tracing::debug!("{} destroyed while hosted, removing it", widget);
        self.remove_item(widget)
    }

    /// Make the page holding `widget` current
    pub fn activate_item(&mut self, widget: WidgetId) -> Result<(), PanelError> {
        let page_num = self
            .notebook
            .page_num(widget)
            .ok_or(PanelError::NotFound(widget))?;

        if let Some(switch) = self.notebook.set_current_page(page_num) {
            self.page_switched(switch);
        }
        Ok(())
    }

    /// Switch to a page by index, as when the user clicks a tab
    ///
    /// Returns true if the current page changed.
    pub fn switch_page(&mut self, index: usize) -> bool {
        match self.notebook.set_current_page(index) {
            Some(switch) => {
                self.page_switched(switch);
                true
            }
            None => false,
        }
    }

    /// Activate the next item, wrapping around
    pub fn next_item(&mut self) -> bool {
        match self.notebook.next_page() {
            Some(switch) => {
                self.page_switched(switch);
                true
            }
            None => false,
        }
    }

    /// Activate the previous item, wrapping around
    pub fn prev_item(&mut self) -> bool {
        match self.notebook.prev_page() {
            Some(switch) => {
                self.page_switched(switch);
                true
            }
            None => false,
        }
    }

    pub fn active_item(&self) -> Option<WidgetId> {
        self.notebook.current().map(|page| page.widget)
    }

    pub fn item_is_active(&self, widget: WidgetId) -> bool {
        match self.notebook.page_num(widget) {
            Some(page_num) => self.notebook.current_page() == Some(page_num),
            None => false,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn item_count(&self) -> usize {
        self.notebook.n_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.notebook.is_empty()
    }

    /// Identity record of a hosted widget
    pub fn item(&self, widget: WidgetId) -> Option<&PanelItem> {
        self.items.get(&widget)
    }

    /// Widget hosting the item with this id
    pub fn item_by_id(&self, id: &str) -> Option<WidgetId> {
        self.items
            .iter()
            .find(|(_, item)| item.id == id)
            .map(|(widget, _)| *widget)
    }

    /// Items in tab order
    pub fn items(&self) -> impl Iterator<Item = (WidgetId, &PanelItem)> {
        self.notebook
            .pages()
            .filter_map(|page| self.items.get(&page.widget).map(|item| (page.widget, item)))
    }

    pub fn tab_label(&self, widget: WidgetId) -> Option<&TabLabel> {
        self.notebook.page(widget).map(|page| &page.tab_label)
    }

    pub fn menu_label(&self, widget: WidgetId) -> Option<&str> {
        self.notebook.page(widget).map(|page| page.menu_label.as_str())
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    fn item_exists(&self, id: &str) -> bool {
        self.items.values().any(|item| item.id == id)
    }

    // ========================================================================
    // Session persistence
    // ========================================================================

    /// Stable id of the active item, 0 when the panel is empty
    pub fn active_item_stable_id(&self) -> u32 {
        self.active_item()
            .and_then(|widget| self.items.get(&widget))
            .map(|item| item.stable_id())
            .unwrap_or(0)
    }

    /// Reactivate the item whose id hashes to `stable`
    ///
    /// 0 and unknown values are ignored.
    pub fn set_active_item_by_stable_id(&mut self, stable: u32) -> bool {
        if stable == 0 {
            return false;
        }

        let index = self.notebook.pages().position(|page| {
            self.items
                .get(&page.widget)
                .is_some_and(|item| stable_id(&item.id) == stable)
        });

        match index {
            Some(index) => {
                self.switch_page(index);
                true
            }
            None => {
                tracing::debug!("No item matches stable id {}", stable);
                false
            }
        }
    }

    // ========================================================================
    // Title bar
    // ========================================================================

    /// Current title bar text (side panels only)
    pub fn title(&self) -> Option<&str> {
        self.chrome.title().map(|title| title.label.as_str())
    }

    /// Current title bar icon (side panels only)
    pub fn title_icon(&self) -> Option<&Icon> {
        self.chrome.title().map(|title| &title.icon)
    }

    pub fn chrome(&self) -> &PanelChrome {
        &self.chrome
    }

    fn page_switched(&mut self, switch: PageSwitch) {
        tracing::trace!(page = switch.page, widget = %switch.widget, "page switched");
        let item = self.items.get(&switch.widget).cloned();
        self.sync_title(item.as_ref());
    }

    fn sync_title(&mut self, item: Option<&PanelItem>) {
        if let Some(title) = self.chrome.title_mut() {
            title.sync(item);
        }
    }

    // ========================================================================
    // Visibility and actions
    // ========================================================================

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the panel and bring the title up to date
    pub fn show(&mut self) {
        self.visible = true;
        if let (Some(page), Some(widget)) = (self.notebook.current_page(), self.active_item()) {
            self.page_switched(PageSwitch { page, widget });
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Close action: notify listeners, then hide
    pub fn close(&mut self) {
        self.listeners.emit(PanelEvent::Close);
        self.hide();
    }

    /// The close button only hides the panel
    pub fn click_close_button(&mut self) {
        self.hide();
    }

    /// Focus-document action: notify listeners, then find the view to focus
    ///
    /// Returns the active document view of the editor window this panel
    /// lives in, if there is one.
    pub fn focus_document(&mut self) -> Option<WidgetId> {
        self.listeners.emit(PanelEvent::FocusDocument);

        let toplevel = self.toplevel.as_ref()?.upgrade()?;
        if !toplevel.is_toplevel() {
            return None;
        }
        let window = toplevel.as_editor_window()?;
        window.active_view()
    }

    /// Link the panel to the toplevel it is embedded in
    pub fn set_toplevel(&mut self, toplevel: Weak<dyn Toplevel>) {
        self.toplevel = Some(toplevel);
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub fn set_keymap(&mut self, keymap: Keymap) {
        self.keymap = keymap;
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Run the binding for a keystroke, if any
    pub fn handle_key(&mut self, keystroke: Keystroke) -> KeyOutcome {
        let Some(command) = self.keymap.lookup(&keystroke) else {
            return KeyOutcome::Ignored;
        };

        tracing::debug!("{} → {:?}", keystroke, command);
        match command {
            Command::ClosePanel => {
                self.close();
                KeyOutcome::Handled
            }
            Command::FocusDocument => match self.focus_document() {
                Some(view) => KeyOutcome::FocusView(view),
                None => KeyOutcome::Handled,
            },
            Command::NextItem => {
                self.next_item();
                KeyOutcome::Handled
            }
            Command::PrevItem => {
                self.prev_item();
                KeyOutcome::Handled
            }
            Command::Unbound => KeyOutcome::Ignored,
        }
    }

    /// What lies under a point of the current layout
    pub fn hit_test(&self, x: f32, y: f32) -> Option<HitTarget> {
        if !self.visible {
            return None;
        }
        geometry::hit_test(&self.layout, x, y)
    }

    /// Handle a primary click at a point
    pub fn click(&mut self, x: f32, y: f32) -> Option<HitTarget> {
        let target = self.hit_test(x, y)?;
        match target {
            HitTarget::CloseButton => self.click_close_button(),
            HitTarget::Tab(index) => {
                self.switch_page(index);
            }
            HitTarget::TitleBar | HitTarget::Page => {}
        }
        Some(target)
    }

    /// Handle a secondary click: on the tab strip this opens the tab menu
    ///
    /// Returns the menu entries to show, one per item in page order.
    pub fn secondary_click(&self, x: f32, y: f32) -> Option<Vec<(WidgetId, &str)>> {
        if !self.visible || !self.layout.tab_strip.contains(x, y) {
            return None;
        }
        self.notebook.popup_menu()
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    pub fn connect(&mut self, listener: impl FnMut(&PanelEvent) + 'static) -> ListenerId {
        self.listeners.connect(listener)
    }

    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        self.listeners.disconnect(id)
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Size the host's view wants for a hosted widget
    pub fn set_item_size_request(
        &mut self,
        widget: WidgetId,
        width: SizeRequest,
        height: SizeRequest,
    ) -> Result<(), PanelError> {
        let page = self
            .notebook
            .page_mut(widget)
            .ok_or(PanelError::NotFound(widget))?;
        page.width_request = width;
        page.height_request = height;
        Ok(())
    }

    pub fn allocation(&self) -> Rect {
        self.allocation
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    fn tab_labels(&self) -> Vec<TabLabel> {
        self.notebook
            .pages()
            .map(|page| page.tab_label.clone())
            .collect()
    }

    fn relayout(&mut self) {
        self.layout = geometry::compute_layout(
            self.orientation,
            self.notebook.tab_position,
            self.allocation,
            &self.tab_labels(),
        );
    }

    fn page_requests(&self) -> (SizeRequest, SizeRequest) {
        self.notebook
            .pages()
            .fold((SizeRequest::ZERO, SizeRequest::ZERO), |(w, h), page| {
                (w.max(page.width_request), h.max(page.height_request))
            })
    }
}

impl Sizeable for Panel {
    fn preferred_width(&self) -> SizeRequest {
        if !self.visible {
            return SizeRequest::ZERO;
        }

        let (pages, _) = self.page_requests();
        let notebook = geometry::notebook_width(pages, &self.tab_labels(), self.notebook.scrollable);
        match self.chrome.title() {
            Some(title) => notebook.max(geometry::title_width(&title.label)),
            None => notebook.add(SizeRequest::fixed(geometry::close_column_width())),
        }
    }

    fn preferred_height(&self) -> SizeRequest {
        if !self.visible {
            return SizeRequest::ZERO;
        }

        let (_, pages) = self.page_requests();
        let notebook = geometry::notebook_height(pages, !self.notebook.is_empty());
        match self.orientation {
            Orientation::Vertical => notebook.add(SizeRequest::fixed(geometry::TITLE_BAR_HEIGHT)),
            Orientation::Horizontal => {
                notebook.max(SizeRequest::fixed(geometry::close_column_width()))
            }
        }
    }

    fn size_allocate(&mut self, allocation: Rect) {
        self.allocation = allocation;
        self.relayout();
    }
}

impl Focusable for Panel {
    /// Focus goes to the current page's widget
    fn grab_focus(&mut self) -> Option<WidgetId> {
        self.active_item()
    }
}

impl Paintable for Panel {
    fn paint(&self, list: &mut DisplayList) {
        if !self.visible {
            return;
        }

        let layout = &self.layout;
        list.push(PaintOp::Frame {
            rect: self.allocation,
            style_class: self.orientation.style_class(),
        });

        if let (Some(title), Some(bar), Some(icon), Some(label)) = (
            self.chrome.title(),
            layout.title_bar,
            layout.title_icon,
            layout.title_label,
        ) {
            list.push(PaintOp::Frame {
                rect: bar,
                style_class: if title.is_empty_state() {
                    "title-empty"
                } else {
                    "title"
                },
            });
            list.push(PaintOp::Icon {
                rect: icon,
                icon: title.icon.clone(),
            });
            list.push(PaintOp::Label {
                rect: label,
                text: title.label.clone(),
            });
        }

        list.push(PaintOp::CloseButton {
            rect: layout.close_button,
            tooltip: self.chrome.close_button().tooltip.clone(),
        });

        list.push(PaintOp::Frame {
            rect: layout.notebook,
            style_class: "notebook",
        });

        let current = self.notebook.current_page();
        for (index, (page, rect)) in self.notebook.pages().zip(&layout.tabs).enumerate() {
            let label = &page.tab_label;
            list.push(PaintOp::Tab {
                rect: *rect,
                text: label.text_visible.then(|| label.text.clone()),
                icon: label.icon.clone(),
                selected: current == Some(index),
            });
        }

        if let Some(page) = self.notebook.current().filter(|_| !layout.page_area.is_empty()) {
            list.push(PaintOp::Page {
                rect: layout.page_area,
                widget: page.widget,
            });
        }
    }
}
