use std::fs;
use std::io::Cursor;

use parlor_cli::run_with_input;

fn run(args: &[&str]) -> (i32, String, String) {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = run_with_input(args, &mut out, &mut err, &mut Cursor::new(""));
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn rank_names_the_category() {
    let (code, out, _) = run(&["parlor", "rank", "--cards", "Ac 2d 3h 4s 5c"]);
    assert_eq!(code, 0);
    assert!(out.contains("Category: Straight"), "{out}");

    let (code, out, _) = run(&["parlor", "rank", "--cards", "Kh Kd Ks 2c 2d 9h 3s"]);
    assert_eq!(code, 0);
    assert!(out.contains("Category: Full house"), "{out}");
    assert!(out.contains("Best five: "));
}

#[test]
fn rank_rejects_bad_input() {
    let (code, _, err) = run(&["parlor", "rank", "--cards", "Ac 2d 3h"]);
    assert_eq!(code, 2);
    assert!(err.contains("expected 5 or 7 cards, got 3"));

    let (code, _, _) = run(&["parlor", "rank", "--cards", "Ac 2d 3h 4s 5x"]);
    assert_eq!(code, 2);
}

#[test]
fn deck_reports_a_full_deck() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.txt");
    let mut text = String::new();
    for suit in ["c", "d", "h", "s"] {
        for rank in ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"] {
            text.push_str(rank);
            text.push_str(suit);
            text.push(' ');
        }
        text.push('\n');
    }
    fs::write(&path, text).unwrap();
    let path_arg = path.to_string_lossy().to_string();

    let (code, out, _) = run(&["parlor", "deck", "--file", &path_arg, "--shuffle", "--seed", "4"]);
    assert_eq!(code, 0);
    assert!(out.contains("Cards: 52"));
    assert!(out.contains("Duplicates: no"));
}

#[test]
fn deck_warns_about_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.txt");
    fs::write(&path, "xx yy\n").unwrap();
    let path_arg = path.to_string_lossy().to_string();
    let (code, out, err) = run(&["parlor", "deck", "--file", &path_arg]);
    assert_eq!(code, 0);
    assert!(out.contains("Cards: 0"));
    assert!(err.contains("WARNING:"));
}

#[test]
fn deck_missing_file_fails() {
    let (code, _, err) = run(&["parlor", "deck", "--file", "/nonexistent/parlor/deck.txt"]);
    assert_eq!(code, 2);
    assert!(err.starts_with("Error: I/O error: cannot read"), "{err}");
}

#[test]
fn cfg_prints_json() {
    let (code, out, _) = run(&["parlor", "cfg"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(json["starting_chips"]["value"].is_u64());
    assert!(json["ai"]["source"].is_string());
}

#[test]
fn version_and_help_exit_zero() {
    assert_eq!(run(&["parlor", "--version"]).0, 0);
    let (code, out, _) = run(&["parlor", "play", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("--players"));
}
