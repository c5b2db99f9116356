//! Style board commands.
//!
//! Opens a board from a selection of item IDs, lays it out, shuffles unlocked
//! items, arranges the saved card collage, and saves the result as a style
//! card.

use crate::cli::common::{
    load_config, print_json, resolve_user, saved_board_store, CliError, CliResult, StoreArgs,
};
use crate::constants::DEFAULT_CARD_NAME;
use crate::models::{CategoryRole, CollageLayout, SavedBoard, WardrobeItem};
use crate::parser::{extract_board_tag, parse_id_list};
use crate::services::{seeded_rng, BoardSession, SavedBoardStore};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

/// Work with style boards
#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// Board subcommand
    #[command(subcommand)]
    pub command: BoardCommand,
}

/// Board subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum BoardCommand {
    /// Show the layout of a board
    Show(ShowBoardArgs),
    /// Shuffle the unlocked items of a board
    Shuffle(ShuffleBoardArgs),
    /// Extract a board selection from an assistant reply
    Extract(ExtractBoardArgs),
    /// Show how a board is arranged on a saved style card
    Collage(CollageBoardArgs),
    /// Save a board as a style card
    Save(SaveBoardArgs),
    /// List saved style cards
    Saved(ListSavedArgs),
}

/// Show the layout of a board
#[derive(Debug, Clone, Args)]
pub struct ShowBoardArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Comma-separated item IDs in board order
    #[arg(long, value_name = "IDS")]
    pub ids: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Shuffle the unlocked items of a board
#[derive(Debug, Clone, Args)]
pub struct ShuffleBoardArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Comma-separated item IDs in board order
    #[arg(long, value_name = "IDS")]
    pub ids: String,

    /// Toggle the lock on an item (repeatable; naming an ID twice unlocks it)
    #[arg(long = "lock", value_name = "ID")]
    pub locks: Vec<String>,

    /// Seed for a reproducible shuffle
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Number of consecutive shuffles to apply
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub rounds: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Extract a board selection from an assistant reply
#[derive(Debug, Clone, Args)]
pub struct ExtractBoardArgs {
    /// Reply text (read from stdin when omitted)
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show how a board is arranged on a saved style card
#[derive(Debug, Clone, Args)]
pub struct CollageBoardArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Comma-separated item IDs in board order
    #[arg(long, value_name = "IDS")]
    pub ids: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Save a board as a style card
#[derive(Debug, Clone, Args)]
pub struct SaveBoardArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Comma-separated item IDs in board order
    #[arg(long, value_name = "IDS")]
    pub ids: String,

    /// Reference to the rendered board image
    #[arg(long, value_name = "URL")]
    pub image: String,

    /// Card name
    #[arg(long, value_name = "NAME", default_value = DEFAULT_CARD_NAME)]
    pub name: String,

    /// Saved boards JSON file (defaults to the configured path)
    #[arg(long, value_name = "FILE")]
    pub saved_boards: Option<PathBuf>,
}

/// List saved style cards
#[derive(Debug, Clone, Args)]
pub struct ListSavedArgs {
    /// User ID (defaults to the configured user)
    #[arg(long, value_name = "ID")]
    pub user: Option<String>,

    /// Saved boards JSON file (defaults to the configured path)
    #[arg(long, value_name = "FILE")]
    pub saved_boards: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct SlotItem {
    id: String,
    name: String,
    category: String,
    role: CategoryRole,
    image: String,
    locked: bool,
}

#[derive(Debug, Serialize)]
struct LayoutView {
    main_piece: Option<SlotItem>,
    left: Vec<SlotItem>,
    right: Vec<SlotItem>,
}

#[derive(Debug, Serialize)]
struct BoardResponse {
    items: Vec<String>,
    dropped_ids: Vec<String>,
    locked: Vec<String>,
    layout: LayoutView,
}

#[derive(Debug, Serialize)]
struct CollageResponse {
    items: Vec<String>,
    dropped_ids: Vec<String>,
    left: Vec<SlotItem>,
    right: Vec<SlotItem>,
    omitted: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SavedCardItem {
    id: String,
    name: String,
    item_ids: Vec<String>,
    image_url: String,
    created: String,
}

#[derive(Debug, Serialize)]
struct ListSavedResponse {
    boards: Vec<SavedCardItem>,
    count: usize,
}

impl BoardArgs {
    /// Execute the board command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            BoardCommand::Show(args) => args.execute(),
            BoardCommand::Shuffle(args) => args.execute(),
            BoardCommand::Extract(args) => args.execute(),
            BoardCommand::Collage(args) => args.execute(),
            BoardCommand::Save(args) => args.execute(),
            BoardCommand::Saved(args) => args.execute(),
        }
    }
}

impl ShowBoardArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let session = open_session(&self.store, &self.ids)?;
        render_board(&session, self.json)
    }
}

impl CollageBoardArgs {
    /// Execute the collage command
    pub fn execute(&self) -> CliResult<()> {
        let session = open_session(&self.store, &self.ids)?;
        let collage = session.collage();

        let response = CollageResponse {
            items: session.item_ids(),
            dropped_ids: session.dropped_ids().to_vec(),
            left: collage.left.iter().map(|item| slot(item, &session)).collect(),
            right: collage.right.iter().map(|item| slot(item, &session)).collect(),
            omitted: session
                .items()
                .iter()
                .filter(|item| !collage.contains(&item.id))
                .map(|item| item.id.clone())
                .collect(),
        };

        if self.json {
            return print_json(&response);
        }

        warn_dropped(&response.dropped_ids);
        if collage.is_empty() {
            println!("Card is empty.");
            return Ok(());
        }
        print_collage(&collage);
        if !response.omitted.is_empty() {
            println!("Not shown: {}", response.omitted.join(","));
        }
        Ok(())
    }
}

impl ShuffleBoardArgs {
    /// Execute the shuffle command
    pub fn execute(&self) -> CliResult<()> {
        let mut session = open_session(&self.store, &self.ids)?;
        if session.items().is_empty() {
            return Err(CliError::validation(
                "Nothing to shuffle: none of the IDs are in the wardrobe",
            ));
        }

        for id in &self.locks {
            session.toggle_lock(id);
        }

        let mut rng = seeded_rng(self.seed);
        for _ in 0..self.rounds {
            session.shuffle(&mut rng);
        }

        render_board(&session, self.json)
    }
}

impl ExtractBoardArgs {
    /// Execute the extract command
    pub fn execute(&self) -> CliResult<()> {
        let text = match &self.text {
            Some(text) => text.clone(),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
                buffer
            }
        };

        let reply = extract_board_tag(&text);

        if self.json {
            return print_json(&reply);
        }

        match &reply.ids {
            Some(ids) => println!("Board: {}", ids.join(",")),
            None => println!("No board in reply."),
        }
        if !reply.text.is_empty() {
            println!();
            println!("{}", reply.text);
        }
        Ok(())
    }
}

impl SaveBoardArgs {
    /// Execute the save command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let (wardrobe, user) = self.store.load_wardrobe(&config)?;
        let session = BoardSession::open(&parse_id_list(&self.ids), wardrobe);
        warn_dropped(session.dropped_ids());

        let payload = session.save_payload(&self.name, &self.image);
        let card = SavedBoard::new(&user, payload.name, payload.item_ids, payload.image_ref)
            .map_err(|e| CliError::validation(format!("Invalid style card: {e}")))?;

        saved_board_store(self.saved_boards.as_ref(), &config)
            .save(&card)
            .map_err(|e| CliError::io(format!("Failed to save style card: {e:#}")))?;

        println!("Style card '{}' saved as {}.", card.name, card.id);
        println!();
        print_collage(&session.collage());
        Ok(())
    }
}

impl ListSavedArgs {
    /// Execute the saved command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let user = resolve_user(self.user.as_deref(), &config)?;

        let boards = saved_board_store(self.saved_boards.as_ref(), &config)
            .list(&user)
            .map_err(|e| CliError::io(format!("Failed to load saved boards: {e:#}")))?;

        let response = ListSavedResponse {
            count: boards.len(),
            boards: boards
                .into_iter()
                .map(|board| SavedCardItem {
                    id: board.id,
                    name: board.name,
                    item_ids: board.item_ids,
                    image_url: board.image_url,
                    created: board.created.to_rfc3339(),
                })
                .collect(),
        };

        if self.json {
            return print_json(&response);
        }

        if response.count == 0 {
            println!("No style cards saved yet.");
        } else {
            println!("Style cards ({}):", response.count);
            println!();
            for board in response.boards {
                println!("  {:<38} {:<30} {}", board.id, board.name, board.item_ids.join(","));
            }
        }
        Ok(())
    }
}

/// Loads the wardrobe and opens a board over the given ID list.
fn open_session(store: &StoreArgs, ids: &str) -> CliResult<BoardSession> {
    let selection = parse_id_list(ids);
    if selection.is_empty() {
        return Err(CliError::validation("No item IDs given"));
    }

    let (wardrobe, _user) = store.load_wardrobe(&load_config()?)?;
    Ok(BoardSession::open(&selection, wardrobe))
}

fn slot(item: &WardrobeItem, session: &BoardSession) -> SlotItem {
    SlotItem {
        id: item.id.clone(),
        name: item.name.clone(),
        category: item.category.clone(),
        role: item.role(),
        image: item.image_ref().to_string(),
        locked: session.is_locked(&item.id),
    }
}

fn render_board(session: &BoardSession, json: bool) -> CliResult<()> {
    let layout = session.layout();
    let response = BoardResponse {
        items: session.item_ids(),
        dropped_ids: session.dropped_ids().to_vec(),
        locked: session.state().locked.iter().map(ToString::to_string).collect(),
        layout: LayoutView {
            main_piece: layout.main_piece.as_ref().map(|item| slot(item, session)),
            left: layout.left.iter().map(|item| slot(item, session)).collect(),
            right: layout.right.iter().map(|item| slot(item, session)).collect(),
        },
    };

    if json {
        return print_json(&response);
    }

    warn_dropped(&response.dropped_ids);

    let Some(main) = &response.layout.main_piece else {
        println!("Board is empty.");
        return Ok(());
    };

    let describe = |item: &SlotItem| {
        let lock = if item.locked { " [locked]" } else { "" };
        format!("{} ({}, {}){}", item.name, item.category, item.id, lock)
    };

    println!("Main piece: {}", describe(main));
    println!();
    println!("Left:");
    for item in &response.layout.left {
        println!("  {}", describe(item));
    }
    println!("Right:");
    for item in &response.layout.right {
        println!("  {}", describe(item));
    }
    println!();
    println!("Items: {}", response.items.join(","));
    Ok(())
}

fn warn_dropped(dropped_ids: &[String]) {
    if !dropped_ids.is_empty() {
        eprintln!("Warning: not in wardrobe, skipped: {}", dropped_ids.join(", "));
    }
}

fn print_collage(collage: &CollageLayout) {
    fn names(items: &[WardrobeItem]) -> String {
        items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    println!("Card left:  {}", names(&collage.left));
    println!("Card right: {}", names(&collage.right));
}
