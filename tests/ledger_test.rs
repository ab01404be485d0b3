//! Ledger persistence: the scores file survives process boundaries, so
//! these tests always reopen a fresh `ScoreStore` handle before reading.

use tempfile::TempDir;

use scamper::ScoreStore;

#[test]
fn test_totals_accumulate_across_handles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.txt");

    ScoreStore::new(path.clone()).record("Bob", 7).unwrap();
    ScoreStore::new(path.clone()).record("Bob", 5).unwrap();
    ScoreStore::new(path.clone()).record("Ann", 3).unwrap();

    let snapshot = ScoreStore::new(path).load().unwrap();
    assert_eq!(snapshot.totals.get("Bob"), Some(&12));
    assert_eq!(snapshot.totals.get("Ann"), Some(&3));
    assert_eq!(snapshot.skipped_lines, 0);
}

#[test]
fn test_file_holds_one_line_per_player() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.txt");
    let store = ScoreStore::new(path.clone());

    store.record("Bob", 7).unwrap();
    store.record("Bob", 5).unwrap();
    store.record("Ann", 3).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2, "one merged line per player");
    assert!(contents.contains("- Player: Bob - Score: 12"));
    assert!(contents.contains("- Player: Ann - Score: 3"));
}

#[test]
fn test_hand_edited_garbage_survives_reads_but_not_rewrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.txt");
    std::fs::write(
        &path,
        "oops this line is not a score\n\
         2026-05-01 09:30 - Player: Ann - Score: 4\n",
    )
    .unwrap();

    // Reading tolerates the junk and counts it.
    let snapshot = ScoreStore::new(path.clone()).load().unwrap();
    assert_eq!(snapshot.totals.get("Ann"), Some(&4));
    assert_eq!(snapshot.skipped_lines, 1);

    // A write rewrites the file clean.
    ScoreStore::new(path.clone()).record("Ann", 1).unwrap();
    let snapshot = ScoreStore::new(path).load().unwrap();
    assert_eq!(snapshot.totals.get("Ann"), Some(&5));
    assert_eq!(snapshot.skipped_lines, 0);
}

#[test]
fn test_ranked_view_for_the_menu() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.txt");
    let store = ScoreStore::new(path);

    store.record("Ann", 4).unwrap();
    store.record("Bob", 9).unwrap();
    store.record("Cid", 6).unwrap();

    let snapshot = store.load().unwrap();
    let ranked = snapshot.ranked();
    assert_eq!(ranked, vec![("Bob", 9), ("Cid", 6), ("Ann", 4)]);
}
