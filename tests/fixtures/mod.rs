//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use styleboard::models::WardrobeItem;
use tempfile::TempDir;

/// Path to the styleboard binary (set by cargo at compile time)
pub fn styleboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_styleboard")
}

/// Isolated workspace: its own config directory plus data files.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn wardrobe_path(&self) -> PathBuf {
        self.dir.path().join("wardrobe.json")
    }

    pub fn saved_boards_path(&self) -> PathBuf {
        self.dir.path().join("saved_boards.json")
    }

    /// Writes a wardrobe file with the given items.
    pub fn write_wardrobe(&self, items: &[WardrobeItem]) {
        write_wardrobe_file(&self.wardrobe_path(), items);
    }

    /// Runs the binary with an isolated config directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(styleboard_bin())
            .env("STYLEBOARD_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs a command that reads the wardrobe, as user "alice".
    pub fn run_with_store(&self, args: &[&str]) -> Output {
        let wardrobe = self.wardrobe_path();
        let mut full: Vec<&str> = args.to_vec();
        full.extend(["--wardrobe", wardrobe.to_str().unwrap(), "--user", "alice"]);
        self.run(&full)
    }
}

pub fn write_wardrobe_file(path: &Path, items: &[WardrobeItem]) {
    let json = serde_json::json!({ "items": items });
    fs::write(path, serde_json::to_string_pretty(&json).unwrap()).unwrap();
}

pub fn item(id: &str, category: &str) -> WardrobeItem {
    owned_item(id, "alice", category)
}

pub fn owned_item(id: &str, user: &str, category: &str) -> WardrobeItem {
    WardrobeItem::new(id, user, format!("{category} {id}"), category, format!("https://img/{id}.jpg"))
        .unwrap()
}

/// Minimal wardrobe: one top, two jeans, one pair of sneakers.
pub fn small_wardrobe() -> Vec<WardrobeItem> {
    vec![
        item("1", "Shirt"),
        item("2", "Jeans"),
        item("3", "Sneakers"),
        item("4", "Jeans"),
    ]
}

/// Wardrobe with at least two items per role, plus another user's item.
pub fn rich_wardrobe() -> Vec<WardrobeItem> {
    vec![
        item("t1", "Tops"),
        item("t2", "Blouse"),
        item("t3", "Jacket"),
        item("b1", "Jeans"),
        item("b2", "Skirt"),
        item("f1", "Sneakers"),
        item("f2", "Boots"),
        item("a1", "Bag"),
        item("a2", "Necklace"),
        owned_item("bob-1", "bob", "Hoodie"),
    ]
}

pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("Invalid JSON ({e}): {stdout}"))
}

pub fn ids_of(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected array")
        .iter()
        .map(|v| v.as_str().expect("expected string").to_string())
        .collect()
}
