//! Command-line argument parsing for the demo binary
//!
//! Supports:
//! - Choosing the panel orientation
//! - Adding items as `id:Name[:icon]`
//! - Activating or removing an item by id after setup
//! - Showing the panel even if the last session hid it
//! - JSON output of the final panel state

use clap::Parser;
use std::str::FromStr;

use dockpanel::panel::Orientation;

/// Script a dockable panel and print its state
#[derive(Parser, Debug)]
#[command(name = "dockpanel", version, about = "Script a dockable editor panel")]
pub struct CliArgs {
    /// Panel orientation: vertical (side) or horizontal (bottom)
    #[arg(short, long, default_value = "vertical")]
    pub orientation: Orientation,

    /// Item to add, as `id:Name` or `id:Name:icon` (repeatable)
    #[arg(short, long = "item", value_name = "SPEC")]
    pub items: Vec<ItemSpec>,

    /// Activate the item with this id after adding
    #[arg(short, long, value_name = "ID")]
    pub activate: Option<String>,

    /// Remove the item with this id after adding
    #[arg(short, long, value_name = "ID")]
    pub remove: Option<String>,

    /// Show the panel even if the saved session had it hidden
    #[arg(long)]
    pub show: bool,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

/// One `--item` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub id: String,
    pub display_name: String,
    pub icon: Option<String>,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let id = parts.next().unwrap_or_default().trim();
        let display_name = parts.next().map(str::trim).unwrap_or_default();

        if id.is_empty() {
            return Err(format!("Item '{}' has an empty id", s));
        }
        if display_name.is_empty() {
            return Err(format!("Item '{}' needs a name (id:Name[:icon])", s));
        }

        let icon = parts
            .next()
            .map(str::trim)
            .filter(|icon| !icon.is_empty())
            .map(str::to_string);

        Ok(Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            icon,
        })
    }
}
