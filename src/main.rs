use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;

use dockpanel::commands::Cmd;
use dockpanel::config::PanelConfig;
use dockpanel::keymap::{load_default_keymap, Keymap};
use dockpanel::messages::PanelMsg;
use dockpanel::panel::{Icon, Orientation, Panel, WidgetId};
use dockpanel::session::PanelSession;
use dockpanel::update::update_panel;

mod cli;

use cli::CliArgs;

/// Final panel state as printed with `--json`
#[derive(Debug, Serialize)]
struct PanelReport {
    orientation: Orientation,
    visible: bool,
    title: Option<String>,
    active: Option<String>,
    active_stable_id: u32,
    items: Vec<ItemReport>,
}

#[derive(Debug, Serialize)]
struct ItemReport {
    id: String,
    name: String,
    icon: Option<String>,
    stable_id: u32,
    active: bool,
}

impl PanelReport {
    fn from_panel(panel: &Panel) -> Self {
        let items: Vec<ItemReport> = panel
            .items()
            .map(|(widget, item)| ItemReport {
                id: item.id.clone(),
                name: item.display_name.clone(),
                icon: item.icon.name().map(str::to_string),
                stable_id: item.stable_id(),
                active: panel.item_is_active(widget),
            })
            .collect();

        Self {
            orientation: panel.orientation(),
            visible: panel.is_visible(),
            title: panel.title().map(str::to_string),
            active: items.iter().find(|i| i.active).map(|i| i.id.clone()),
            active_stable_id: panel.active_item_stable_id(),
            items,
        }
    }

    fn print_text(&self) {
        println!(
            "{} panel ({})",
            self.orientation,
            if self.visible { "shown" } else { "hidden" }
        );
        if let Some(title) = &self.title {
            println!("title: {}", title);
        }
        for item in &self.items {
            let marker = if item.active { "*" } else { " " };
            println!(
                "{} {:<16} {:<24} {:>10}",
                marker, item.id, item.name, item.stable_id
            );
        }
    }
}

/// An icon argument naming an existing file is decoded, anything else is an icon name
fn resolve_icon(icon: Option<&str>) -> Result<Option<Icon>> {
    let Some(icon) = icon else {
        return Ok(None);
    };
    let path = Path::new(icon);
    if path.is_file() {
        return Icon::load(path).map(Some);
    }
    Ok(Icon::from_name(icon))
}

fn apply(panel: &mut Panel, msg: PanelMsg) {
    if let Some(Cmd::GrabFocus(widget)) = update_panel(panel, msg) {
        tracing::debug!("Focus requested for {}", widget);
    }
}

fn main() -> Result<()> {
    dockpanel::tracing::init();

    let args = CliArgs::parse();
    let config = PanelConfig::load();

    let mut panel = Panel::with_config(args.orientation, &config);
    panel.set_keymap(Keymap::with_bindings(load_default_keymap()));
    panel.connect(|event| tracing::info!("panel event: {:?}", event));

    for (i, spec) in args.items.iter().enumerate() {
        let icon = resolve_icon(spec.icon.as_deref())?;
        panel
            .add_item(WidgetId(i as u64 + 1), &spec.id, &spec.display_name, icon)
            .with_context(|| format!("Failed to add item '{}'", spec.id))?;
    }

    let session = PanelSession::load();
    session.restore(&mut panel);

    if let Some(id) = &args.activate {
        let widget = panel
            .item_by_id(id)
            .with_context(|| format!("No item with id '{}'", id))?;
        apply(&mut panel, PanelMsg::ActivateItem(widget));
    }

    if let Some(id) = &args.remove {
        let widget = panel
            .item_by_id(id)
            .with_context(|| format!("No item with id '{}'", id))?;
        apply(&mut panel, PanelMsg::RemoveItem(widget));
    }

    // First run shows the panel; later runs keep the saved visibility
    if args.show || session.visibility(args.orientation).unwrap_or(true) {
        apply(&mut panel, PanelMsg::Show);
    }

    let mut session = session;
    session.capture(&panel);
    if let Err(e) = session.save() {
        tracing::warn!("Failed to save panel session: {}", e);
    }

    let report = PanelReport::from_panel(&panel);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_text();
    }

    Ok(())
}
