//! End-to-end tests for `styleboard board` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_board_show_layout_json() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());

    let output = ws.run_with_store(&["board", "show", "--ids", "b1,a1,t2,f1,a2", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(ids_of(&result["items"]), vec!["b1", "a1", "t2", "f1", "a2"]);
    assert_eq!(result["layout"]["main_piece"]["id"], "t2");
    assert_eq!(result["layout"]["main_piece"]["role"], "top");

    let left: Vec<&str> = result["layout"]["left"]
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| slot["id"].as_str().unwrap())
        .collect();
    let right: Vec<&str> = result["layout"]["right"]
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| slot["id"].as_str().unwrap())
        .collect();
    assert_eq!(left, vec!["b1", "a1"]);
    assert_eq!(right, vec!["f1", "a2"]);
}

#[test]
fn test_board_show_drops_unknown_and_foreign_ids() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());

    let output = ws.run_with_store(&["board", "show", "--ids", "t1, nope ,bob-1", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(ids_of(&result["items"]), vec!["t1"]);
    assert_eq!(ids_of(&result["dropped_ids"]), vec!["nope", "bob-1"]);
}

#[test]
fn test_board_show_all_unknown_is_empty_board() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());

    let output = ws.run_with_store(&["board", "show", "--ids", "x,y", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert!(result["layout"]["main_piece"].is_null());
    assert_eq!(result["layout"]["left"].as_array().unwrap().len(), 0);
    assert_eq!(result["layout"]["right"].as_array().unwrap().len(), 0);
}

#[test]
fn test_board_show_human_readable() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());

    let output = ws.run_with_store(&["board", "show", "--ids", "2,1,3"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Main piece: Shirt 1"), "stdout: {stdout}");
    assert!(stdout.contains("Items: 2,1,3"));
}

#[test]
fn test_board_show_keeps_selection_order_and_duplicates() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());

    let output = ws.run_with_store(&["board", "show", "--ids", "3,2,3", "--json"]);
    let result = stdout_json(&output);
    assert_eq!(ids_of(&result["items"]), vec!["3", "2", "3"]);
    assert_eq!(result["layout"]["main_piece"]["id"], "3");
}

#[test]
fn test_board_show_requires_ids() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());

    let output = ws.run_with_store(&["board", "show", "--ids", " , "]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_board_show_requires_user() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());
    let wardrobe = ws.wardrobe_path();

    let output = ws.run(&[
        "board",
        "show",
        "--ids",
        "1",
        "--wardrobe",
        wardrobe.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No user"));
}

#[test]
fn test_board_show_corrupt_wardrobe_is_io_error() {
    let ws = Workspace::new();
    std::fs::write(ws.wardrobe_path(), "{ not json").unwrap();

    let output = ws.run_with_store(&["board", "show", "--ids", "1"]);
    assert_eq!(output.status.code(), Some(2));
}

// ============================================================================
// Shuffle Command Tests
// ============================================================================

#[test]
fn test_board_shuffle_no_alternatives_keeps_board() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());

    for seed in ["1", "2", "3", "4", "5"] {
        let output = ws.run_with_store(&[
            "board", "shuffle", "--ids", "1,2,3", "--lock", "2", "--seed", seed, "--json",
        ]);
        assert_eq!(output.status.code(), Some(0));

        let result = stdout_json(&output);
        assert_eq!(ids_of(&result["items"]), vec!["1", "2", "3"]);
        assert_eq!(ids_of(&result["locked"]), vec!["2"]);
    }
}

#[test]
fn test_board_shuffle_fully_locked_is_noop() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());

    let output = ws.run_with_store(&[
        "board", "shuffle", "--ids", "t1,b1,f1,a1", "--lock", "t1", "--lock", "b1", "--lock",
        "f1", "--lock", "a1", "--rounds", "5", "--json",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(ids_of(&result["items"]), vec!["t1", "b1", "f1", "a1"]);
    assert_eq!(result["layout"]["main_piece"]["locked"], true);
}

#[test]
fn test_board_shuffle_replaces_unlocked_with_same_role() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());

    let output = ws.run_with_store(&[
        "board", "shuffle", "--ids", "t1,b1,f1,a1", "--lock", "b1", "--seed", "17", "--json",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let items = ids_of(&stdout_json(&output)["items"]);
    assert_eq!(items.len(), 4);
    assert!(["t2", "t3"].contains(&items[0].as_str()), "{items:?}");
    assert_eq!(items[1], "b1");
    assert_eq!(items[2], "f2");
    assert_eq!(items[3], "a2");
}

#[test]
fn test_board_shuffle_never_uses_other_users_items() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());

    for seed in 0..20 {
        let seed = seed.to_string();
        let output =
            ws.run_with_store(&["board", "shuffle", "--ids", "t1", "--seed", &seed, "--json"]);
        let items = ids_of(&stdout_json(&output)["items"]);
        assert_ne!(items[0], "bob-1");
    }
}

#[test]
fn test_board_shuffle_seed_is_reproducible() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());

    let args = ["board", "shuffle", "--ids", "t1,b1,f1,a1", "--seed", "42", "--json"];
    let first = stdout_json(&ws.run_with_store(&args));
    let second = stdout_json(&ws.run_with_store(&args));
    assert_eq!(first["items"], second["items"]);
}

#[test]
fn test_board_shuffle_double_lock_toggles_off() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());

    let output = ws.run_with_store(&[
        "board", "shuffle", "--ids", "b1", "--lock", "b1", "--lock", "b1", "--seed", "3", "--json",
    ]);
    let result = stdout_json(&output);
    assert!(result["locked"].as_array().unwrap().is_empty());
    assert_eq!(ids_of(&result["items"]), vec!["b2"]);
}

#[test]
fn test_board_shuffle_nothing_resolved_is_validation_error() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());

    let output = ws.run_with_store(&["board", "shuffle", "--ids", "zzz"]);
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Extract Command Tests
// ============================================================================

#[test]
fn test_board_extract_from_text() {
    let ws = Workspace::new();
    let output = ws.run(&[
        "board",
        "extract",
        "--text",
        "Pair these for brunch. [STYLE_BOARD: t1, b2, f1]",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["text"], "Pair these for brunch.");
    assert_eq!(ids_of(&result["ids"]), vec!["t1", "b2", "f1"]);
}

#[test]
fn test_board_extract_without_tag() {
    let ws = Workspace::new();
    let output = ws.run(&["board", "extract", "--text", "Hello there", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert!(result["ids"].is_null());
    assert_eq!(result["text"], "Hello there");
}

// ============================================================================
// Collage Command Tests
// ============================================================================

#[test]
fn test_board_collage_json() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());

    let output = ws.run_with_store(&[
        "board", "collage", "--ids", "f1,a1,t2,b1,t1,f2,a2,ghost", "--json",
    ]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    let column = |name: &str| -> Vec<String> {
        result[name]
            .as_array()
            .unwrap()
            .iter()
            .map(|slot| slot["id"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(column("left"), vec!["t2", "b1"]);
    assert_eq!(column("right"), vec!["a1", "a2", "f1"]);
    assert_eq!(ids_of(&result["omitted"]), vec!["t1", "f2"]);
    assert_eq!(ids_of(&result["dropped_ids"]), vec!["ghost"]);
}

#[test]
fn test_board_collage_accessories_only() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());

    let output = ws.run_with_store(&["board", "collage", "--ids", "a1,a2", "--json"]);
    let result = stdout_json(&output);
    assert!(result["left"].as_array().unwrap().is_empty());
    assert_eq!(result["right"].as_array().unwrap().len(), 2);
    assert!(result["omitted"].as_array().unwrap().is_empty());
}

#[test]
fn test_board_collage_human_readable() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());

    let output = ws.run_with_store(&["board", "collage", "--ids", "1,2,3,4"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Card left:  Shirt 1, Jeans 2"), "stdout: {stdout}");
    assert!(stdout.contains("Card right: Sneakers 3"));
    assert!(stdout.contains("Not shown: 4"));
}

// ============================================================================
// Save / Saved Command Tests
// ============================================================================

#[test]
fn test_board_save_and_list() {
    let ws = Workspace::new();
    ws.write_wardrobe(&rich_wardrobe());
    let saved = ws.saved_boards_path();
    let saved = saved.to_str().unwrap();

    let output = ws.run_with_store(&[
        "board",
        "save",
        "--ids",
        "t1,missing,b1",
        "--image",
        "https://img/card.jpg",
        "--saved-boards",
        saved,
    ]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("My Style Board"));
    assert!(stdout.contains("Card left:  Tops t1, Jeans b1"), "stdout: {stdout}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("skipped: missing"));

    let output = ws.run(&["board", "saved", "--user", "alice", "--saved-boards", saved, "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["count"], 1);
    assert_eq!(result["boards"][0]["name"], "My Style Board");
    assert_eq!(ids_of(&result["boards"][0]["item_ids"]), vec!["t1", "b1"]);
    assert_eq!(result["boards"][0]["image_url"], "https://img/card.jpg");

    let output = ws.run(&["board", "saved", "--user", "bob", "--saved-boards", saved, "--json"]);
    assert_eq!(stdout_json(&output)["count"], 0);
}

#[test]
fn test_board_save_custom_name() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());
    let saved = ws.saved_boards_path();

    let output = ws.run_with_store(&[
        "board",
        "save",
        "--ids",
        "1,2",
        "--image",
        "card.jpg",
        "--name",
        "Monday Office",
        "--saved-boards",
        saved.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let stored = std::fs::read_to_string(&saved).unwrap();
    assert!(stored.contains("Monday Office"));
}

#[test]
fn test_board_save_rejects_empty_board() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());
    let saved = ws.saved_boards_path();

    let output = ws.run_with_store(&[
        "board",
        "save",
        "--ids",
        "ghost",
        "--image",
        "card.jpg",
        "--saved-boards",
        saved.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!saved.exists());
}

#[test]
fn test_board_save_rejects_blank_name() {
    let ws = Workspace::new();
    ws.write_wardrobe(&small_wardrobe());
    let saved = ws.saved_boards_path();

    let output = ws.run_with_store(&[
        "board",
        "save",
        "--ids",
        "1",
        "--image",
        "card.jpg",
        "--name",
        "   ",
        "--saved-boards",
        saved.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
}
