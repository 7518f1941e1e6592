use std::fs;
use std::io::Cursor;
use std::path::Path;

use parlor_cli::run_with_input;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    let mut argv = vec!["parlor", "play"];
    argv.extend_from_slice(args);
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = run_with_input(&argv, &mut out, &mut err, &mut Cursor::new(input.to_string()));
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn record_lines(dir: &Path, name: &str) -> Vec<String> {
    fs::read_to_string(dir.join(name))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn two_humans_check_down_to_showdown() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().to_string_lossy().to_string();
    // a blank line is rejected by action prompts and re-asked, so "\ncheck\n"
    // answers every prompt of a checked-down round
    let input = "\ncheck\n".repeat(40);
    let (code, out, err) = play(
        &[
            "--game", "holdem", "--players", "ann,bob", "--rounds", "1", "--seed", "5",
            "--records-dir", &records,
        ],
        &input,
    );
    assert_eq!(code, 0, "{err}");
    assert!(out.contains("play: game=holdem seed=5"));
    assert!(out.contains("Showdown:"), "{out}");
    assert!(out.contains("Result: "));
    assert!(out.contains("Rounds played: 1"));

    let ann = record_lines(dir.path(), "ann");
    let bob = record_lines(dir.path(), "bob");
    assert_eq!(ann[0], "ann");
    assert_eq!(bob[0], "bob");
    let chips: u64 = ann[3].parse::<u64>().unwrap() + bob[3].parse::<u64>().unwrap();
    assert_eq!(chips, 40);
    let rounds_recorded: u32 = [&ann, &bob]
        .iter()
        .map(|r| r[1].parse::<u32>().unwrap() + r[2].parse::<u32>().unwrap())
        .sum();
    assert_eq!(rounds_recorded, 2);
}

#[test]
fn quit_ends_the_session_after_the_round() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().to_string_lossy().to_string();
    let (code, out, _) = play(
        &[
            "--game", "draw", "--players", "ann", "--bots", "1", "--seed", "3",
            "--records-dir", &records,
        ],
        "q\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("Quitting after this round."));
    assert!(out.contains("Rounds played: 1"));
    assert!(dir.path().join("ann").exists());
    assert!(!dir.path().join("bot1").exists());
}

#[test]
fn closed_input_plays_passively() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().to_string_lossy().to_string();
    let (code, out, _) = play(
        &[
            "--game", "stud", "--players", "ann,bob", "--seed", "1", "--records-dir", &records,
        ],
        "",
    );
    assert_eq!(code, 0);
    // nobody bets, so the round goes to showdown
    assert!(out.contains("Showdown:"), "{out}");
    assert!(out.contains("Rounds played: 1"));
}

#[test]
fn returning_players_get_their_record_back() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ann"), "ann\n3\n4\n25\n").unwrap();
    let records = dir.path().to_string_lossy().to_string();
    let (code, out, _) = play(
        &["--game", "holdem", "--players", "ann", "--bots", "1", "--records-dir", &records],
        "q\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("Welcome back, ann (3 wins, 4 losses, 25 chips)"));
    let ann = record_lines(dir.path(), "ann");
    let played: u32 = ann[1].parse::<u32>().unwrap() + ann[2].parse::<u32>().unwrap();
    assert_eq!(played, 8);
}

#[test]
fn broke_player_can_reset() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ann"), "ann\n0\n9\n0\n").unwrap();
    let records = dir.path().to_string_lossy().to_string();
    let (code, out, _) = play(
        &["--game", "draw", "--players", "ann", "--bots", "1", "--records-dir", &records],
        "r\nq\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("ann has no chips. (r)eset to 20 or (l)eave?"));
    assert!(out.contains("ann starts over with 20 chips"));
    assert!(out.contains("Rounds played: 1"));
}

#[test]
fn broke_player_leaving_can_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ann"), "ann\n0\n9\n0\n").unwrap();
    let records = dir.path().to_string_lossy().to_string();
    let (code, out, _) = play(
        &["--game", "draw", "--players", "ann,bob", "--records-dir", &records],
        "l\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("ann leaves the table with 0 chips"));
    assert!(out.contains("Not enough players to continue."));
    assert!(out.contains("Rounds played: 0"));
}

#[test]
fn names_can_be_typed_when_none_are_given() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().to_string_lossy().to_string();
    let (code, out, _) = play(
        &["--game", "holdem", "--records-dir", &records],
        "ann, bob\nq\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("Player names (comma separated): "));
    assert!(out.contains("=== Round 1: Texas Hold'em (2 players"));
}

#[test]
fn illegal_or_duplicate_names_are_refused() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().to_string_lossy().to_string();
    let (code, _, err) = play(
        &["--game", "draw", "--players", "a/b,bob", "--records-dir", &records],
        "",
    );
    assert_eq!(code, 2);
    assert!(err.contains("Error:"));

    let (code, _, _) = play(
        &["--game", "draw", "--players", "Ann,ann", "--records-dir", &records],
        "",
    );
    assert_eq!(code, 2);
}

#[test]
fn rounds_are_logged_as_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().to_string_lossy().to_string();
    let log = dir.path().join("logs").join("rounds.jsonl");
    let log_arg = log.to_string_lossy().to_string();
    let (code, _, err) = play(
        &[
            "--game", "holdem", "--bots", "3", "--rounds", "2", "--seed", "11", "--log", &log_arg,
            "--records-dir", &records,
        ],
        "",
    );
    assert_eq!(code, 0, "{err}");
    let text = fs::read_to_string(&log).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["variant"], "holdem");
    assert_eq!(lines[0]["seed"], 11);
    assert!(lines[1]["round_id"].as_str().unwrap().ends_with("-000002"));
}
