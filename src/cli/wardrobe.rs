//! Wardrobe management commands.
//!
//! Provides commands to list, add, and remove items in a wardrobe file.

use crate::cli::common::{load_config, print_json, CliError, CliResult, StoreArgs};
use crate::models::{CategoryRole, WardrobeItem};
use crate::services::WardrobeStore;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage wardrobe items
#[derive(Debug, Clone, Args)]
pub struct WardrobeArgs {
    /// Wardrobe subcommand
    #[command(subcommand)]
    pub command: WardrobeCommand,
}

/// Wardrobe subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum WardrobeCommand {
    /// List items in the wardrobe
    List(ListItemsArgs),
    /// Add an item to the wardrobe
    Add(AddItemArgs),
    /// Remove an item from the wardrobe
    Remove(RemoveItemArgs),
}

/// List items in the wardrobe
#[derive(Debug, Clone, Args)]
pub struct ListItemsArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Only show items with this board role (top, bottom, footwear, accessory)
    #[arg(long, value_name = "ROLE")]
    pub role: Option<CategoryRole>,

    /// Only show items whose category equals this value exactly
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add an item to the wardrobe
#[derive(Debug, Clone, Args)]
pub struct AddItemArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Item name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Free-text category (e.g., "Tops", "Sneakers")
    #[arg(long, value_name = "CATEGORY")]
    pub category: String,

    /// Photo reference
    #[arg(long, value_name = "URL")]
    pub image: String,

    /// Background-removed photo reference
    #[arg(long, value_name = "URL")]
    pub masked: Option<String>,

    /// Tag (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Use this ID instead of generating one
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,
}

/// Remove an item from the wardrobe
#[derive(Debug, Clone, Args)]
pub struct RemoveItemArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// ID of the item to remove
    #[arg(long, value_name = "ID")]
    pub id: String,
}

#[derive(Debug, Serialize)]
struct ItemRow<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    role: CategoryRole,
    image: &'a str,
}

#[derive(Debug, Serialize)]
struct ListItemsResponse<'a> {
    items: Vec<ItemRow<'a>>,
    count: usize,
}

impl WardrobeArgs {
    /// Execute the wardrobe command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            WardrobeCommand::List(args) => args.execute(),
            WardrobeCommand::Add(args) => args.execute(),
            WardrobeCommand::Remove(args) => args.execute(),
        }
    }
}

impl ListItemsArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let (items, _user) = self.store.load_wardrobe(&load_config()?)?;

        let rows: Vec<ItemRow<'_>> = items
            .iter()
            .filter(|item| self.role.is_none_or(|role| item.role() == role))
            .filter(|item| {
                self.category
                    .as_deref()
                    .is_none_or(|category| item.category == category)
            })
            .map(|item| ItemRow {
                id: &item.id,
                name: &item.name,
                category: &item.category,
                role: item.role(),
                image: item.image_ref(),
            })
            .collect();

        if self.json {
            return print_json(&ListItemsResponse {
                count: rows.len(),
                items: rows,
            });
        }

        if rows.is_empty() {
            println!("No items found.");
        } else {
            println!("Items ({}):", rows.len());
            println!();
            for row in rows {
                println!("  {:<38} {:<30} {:<20} {}", row.id, row.name, row.category, row.role);
            }
        }

        Ok(())
    }
}

impl AddItemArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let (store, user) = self.store.open(&load_config()?)?;

        let id = self
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let mut item = WardrobeItem::new(&id, &user, &self.name, &self.category, &self.image)
            .map_err(|e| CliError::validation(format!("Invalid item: {e}")))?
            .with_tags(self.tags.clone());
        if let Some(masked) = &self.masked {
            item = item.with_masked_url(masked);
        }

        let taken = store
            .contains(&id)
            .map_err(|e| CliError::io(format!("Failed to load wardrobe: {e:#}")))?;
        if taken {
            return Err(CliError::validation(format!(
                "Item with ID '{id}' already exists"
            )));
        }

        let role = item.role();
        store
            .insert(item)
            .map_err(|e| CliError::io(format!("Failed to add item: {e:#}")))?;

        println!("Item '{}' added as {} ({}).", self.name, id, role);
        Ok(())
    }
}

impl RemoveItemArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let (store, user) = self.store.open(&load_config()?)?;

        let exists = store
            .list_items(&user)
            .map_err(|e| CliError::io(format!("Failed to load wardrobe: {e:#}")))?
            .iter()
            .any(|item| item.id == self.id);
        if !exists {
            return Err(CliError::validation(format!("Item '{}' not found", self.id)));
        }

        let removed = store
            .remove(&user, &self.id)
            .map_err(|e| CliError::io(format!("Failed to remove item: {e:#}")))?;

        println!("Item '{}' removed.", removed.name);
        Ok(())
    }
}
