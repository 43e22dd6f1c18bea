use game_core::journal::InputJournal;
use game_core::replay::replay_to_end;
use game_core::types::Key;

fn scripted_journal(seed: u64) -> InputJournal {
    let mut journal = InputJournal::new(seed);
    journal.append_start_level(0, 1);
    journal.append_key_down(0, Key::Up);
    journal.append_key_up(90, Key::Up);
    journal.append_key_down(120, Key::Left);
    journal.append_key_up(200, Key::Left);
    journal
}

#[test]
fn identical_journals_produce_identical_hashes() {
    let left = replay_to_end(&scripted_journal(12_345), 2_000).expect("replay failed");
    let right = replay_to_end(&scripted_journal(12_345), 2_000).expect("replay failed");
    assert_eq!(left.final_snapshot_hash, right.final_snapshot_hash);
    assert_eq!(left.final_score, right.final_score);
    assert_eq!(left.final_phase, right.final_phase);
}

#[test]
fn different_seeds_diverge() {
    let left = replay_to_end(&scripted_journal(123), 2_000).expect("replay failed");
    let right = replay_to_end(&scripted_journal(456), 2_000).expect("replay failed");
    assert_ne!(left.final_snapshot_hash, right.final_snapshot_hash);
}

#[test]
fn the_horizon_is_part_of_the_observed_state() {
    let journal = scripted_journal(777);
    let short = replay_to_end(&journal, 500).expect("replay failed");
    let long = replay_to_end(&journal, 1_000).expect("replay failed");
    assert_eq!(short.final_tick, 500);
    assert_eq!(long.final_tick, 1_000);
    assert_ne!(short.final_snapshot_hash, long.final_snapshot_hash);
}
