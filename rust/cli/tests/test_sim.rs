use std::fs;
use std::io::Cursor;

use parlor_cli::run_with_input;

fn sim(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["parlor", "sim"];
    argv.extend_from_slice(args);
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = run_with_input(&argv, &mut out, &mut err, &mut Cursor::new(""));
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn writes_one_record_per_finished_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("stud.jsonl");
    let path_arg = path.to_string_lossy().to_string();
    let (code, out, err) = sim(&[
        "--game", "stud", "--bots", "3", "--rounds", "4", "--seed", "9", "--output", &path_arg,
    ]);
    assert_eq!(code, 0, "{err}");
    assert!(out.starts_with("sim: game=stud bots=3 rounds=4 seed=9 ai=baseline"));

    // "Round N: ..." lines only; the trailer "Round records: <path>" is not a round
    let finished = out
        .lines()
        .filter_map(|l| l.strip_prefix("Round "))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        .count();
    assert!(out.contains(&format!("Round records: {}", path.display())));
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), finished);
    for line in text.lines() {
        let rec: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(rec["variant"], "stud");
        assert!(rec["ts"].as_str().is_some());
        assert!(!rec["actions"].as_array().unwrap().is_empty());
    }
}

#[test]
fn random_bots_are_reproducible_with_a_seed() {
    let args = [
        "--game", "draw", "--bots", "5", "--rounds", "6", "--seed", "21", "--ai", "random",
    ];
    let (code_a, out_a, _) = sim(&args);
    let (code_b, out_b, _) = sim(&args);
    assert_eq!((code_a, code_b), (0, 0));
    assert_eq!(out_a, out_b);
    assert!(out_a.contains("Player"));
}

#[test]
fn unknown_ai_kind_warns_and_falls_back() {
    let (code, out, err) = sim(&["--game", "holdem", "--bots", "2", "--rounds", "1", "--ai", "genius"]);
    assert_eq!(code, 0);
    assert!(err.contains("WARNING: unknown AI kind 'genius', using baseline"));
    assert!(out.contains("Rounds played: 1"));
}

#[test]
fn invalid_arguments_exit_with_2() {
    assert_eq!(sim(&["--game", "holdem", "--bots", "1"]).0, 2);
    assert_eq!(sim(&["--game", "draw", "--bots", "11"]).0, 2);
    assert_eq!(sim(&["--game", "draw", "--rounds", "0"]).0, 2);
    assert_eq!(sim(&["--bots", "3"]).0, 2);
}
