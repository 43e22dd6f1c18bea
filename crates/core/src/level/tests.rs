//! Rule-pipeline regression tests for a running level.

use super::*;
use crate::cluster::{SAFE_OPACITY, SAFE_THRESHOLD};
use crate::types::{LevelId, Rules};

const DT: f64 = 1.0 / 60.0;
const FAR_AWAY: Vec2 = Vec2 { x: 5000.0, y: 5000.0 };

fn level_one() -> Level {
    Level::new(Rules::for_level(LevelId::One), 12_345, &Layout::standard())
}

fn level_three() -> Level {
    Level::new(Rules::for_level(LevelId::Three), 12_345, &Layout::standard())
}

fn first_cluster(level: &Level) -> ClusterId {
    level.active_clusters[0]
}

/// Move `count` roster guests geometrically out of the zone without touching
/// the roster itself.
fn displace_guests(level: &mut Level, cluster_id: ClusterId, count: usize) {
    let roster = level.clusters[cluster_id].roster.clone();
    for id in roster.into_iter().take(count) {
        level.guests[id].pos = FAR_AWAY;
    }
}

#[test]
fn zones_start_safe_and_fully_populated() {
    let level = level_one();
    assert_eq!(level.active_clusters.len(), 5);
    for id in &level.active_clusters {
        let cluster = &level.clusters[*id];
        assert!(cluster.safe);
        assert_eq!(cluster.guest_count(&level.guests), 10);
    }
}

#[test]
fn zone_below_threshold_is_forced_unsafe() {
    let mut level = level_one();
    let id = first_cluster(&level);

    displace_guests(&mut level, id, 4);
    level.recompute_cluster_safety();
    assert!(level.clusters[id].safe, "six live members still conceal");

    displace_guests(&mut level, id, 5);
    level.recompute_cluster_safety();
    assert!(!level.clusters[id].safe);
    assert_eq!(level.clusters[id].guest_count(&level.guests), SAFE_THRESHOLD - 1);
}

#[test]
fn thirst_trigger_dispatches_exactly_one_guest_and_rearms() {
    let mut level = level_one();
    level.thirst_timer = 0;
    level.tick(DT);
    assert_eq!(level.moving_away.len(), 1);
    // Re-armed to 180 inside the firing tick, then decremented by the same
    // tick's timer pass.
    assert_eq!(level.thirst_timer, THIRST_TIMER_FRAMES - 1);

    let id = *level.moving_away.iter().next().unwrap();
    let guest = &level.guests[id];
    assert!(guest.vel.y > 0.0 || guest.vel.x != 0.0, "guest was aimed somewhere");
}

#[test]
fn player_contact_poisons_the_bowl_and_it_stays_poisoned() {
    let mut level = level_one();
    assert!(!level.bowl_poisoned());
    level.player.pos = level.bowl.center;
    level.tick(DT);
    assert!(level.bowl_poisoned());

    level.player.pos = FAR_AWAY;
    for _ in 0..100 {
        level.tick(DT);
    }
    assert!(level.bowl_poisoned(), "no reset rule below level 3");
}

#[test]
fn bowl_reset_fires_once_per_multiple_of_six_crossing() {
    let mut level = level_three();
    level.bowl_poisoned = true;
    level.score = 6;

    level.reset_bowl_at_multiples_of_six();
    assert!(!level.bowl_poisoned);
    assert!(!level.reset_armed);

    // Stuck at six: no further effect, even if re-poisoned.
    level.bowl_poisoned = true;
    level.reset_bowl_at_multiples_of_six();
    assert!(level.bowl_poisoned);

    // Leaving the multiple re-arms; the next crossing fires again.
    level.score = 7;
    level.reset_bowl_at_multiples_of_six();
    assert!(level.reset_armed);
    level.score = 12;
    level.reset_bowl_at_multiples_of_six();
    assert!(!level.bowl_poisoned);
}

#[test]
fn exposed_player_inside_fov_loses_unless_god_mode() {
    let mut level = level_one();
    level.player.pos = FAR_AWAY;
    level.monitor.pos = FAR_AWAY;
    level.steer_monitor_and_mark_safety();
    assert!(!level.player.safe);
    assert!(level.is_lose());

    level.set_god_mode(true);
    assert!(!level.is_lose());
    level.set_god_mode(false);
    assert!(level.is_lose());
}

#[test]
fn concealed_player_is_marked_safe_and_cannot_be_captured() {
    let mut level = level_one();
    let id = first_cluster(&level);
    level.player.pos = level.clusters[id].center;
    level.monitor.pos = level.player.pos;
    level.steer_monitor_and_mark_safety();
    assert!(level.player.safe);
    assert!(!level.is_lose());
}

#[test]
fn pursuit_reaims_at_the_exposed_player_every_frame() {
    let mut level = level_one();
    level.player.pos = Vec2::new(500.0, 500.0);
    level.monitor.pos = Vec2::new(100.0, 100.0);
    level.steer_monitor_and_mark_safety();
    assert!(level.monitor.vel.x > 0.0 && level.monitor.vel.y > 0.0);

    level.player.pos = Vec2::new(50.0, 500.0);
    level.steer_monitor_and_mark_safety();
    assert!(level.monitor.vel.x < 0.0 && level.monitor.vel.y > 0.0);
}

#[test]
fn guest_reaching_exit_scores_once_and_is_fully_removed() {
    let mut level = level_one();
    let cluster_id = first_cluster(&level);
    let guest_id = level.clusters[cluster_id].roster[0];
    level.guests[guest_id].pos = level.exit.center;
    level.moving_away.insert(guest_id);

    level.update_punch_transit(DT);
    assert_eq!(level.score(), 1);
    assert!(!level.guests.contains_key(guest_id));
    assert!(!level.moving_away.contains(&guest_id));
    assert!(!level.clusters[cluster_id].roster.contains(&guest_id));

    // A second pass has nothing left to act on.
    level.update_punch_transit(DT);
    assert_eq!(level.score(), 1);
}

#[test]
fn unpoisoned_bowl_bounces_guests_back_home() {
    let mut level = level_one();
    let cluster_id = first_cluster(&level);
    let guest_id = level.clusters[cluster_id].roster[0];
    let home = level.guests[guest_id].pos;
    level.guests[guest_id].pos = level.bowl.center;
    level.guests[guest_id].vel = Vec2::new(0.0, 150.0);
    level.moving_away.insert(guest_id);

    level.update_punch_transit(DT);
    assert!(level.moving_back.contains(&guest_id));
    assert!(level.guests[guest_id].vel.y < 0.0, "velocity reversed");

    level.guests[guest_id].pos = home;
    level.update_punch_transit(DT);
    assert!(!level.moving_back.contains(&guest_id));
    assert_eq!(level.guests[guest_id].vel, Vec2::ZERO);
}

#[test]
fn emptied_zone_leaves_the_active_list() {
    let mut level = level_one();
    let id = first_cluster(&level);
    displace_guests(&mut level, id, 10);
    level.drop_cluster_if_empty(id);
    assert!(!level.active_clusters.contains(&id));
    assert!(level.clusters.contains_key(id), "arena entry survives for back-references");
}

#[test]
fn degeneration_cycle_matches_the_level_three_state_machine() {
    let mut level = level_three();
    let id = first_cluster(&level);
    level.player.pos = level.clusters[id].center;

    level.tick(DT);
    assert!(level.clusters[id].degenerating);
    assert!(level.degen.contains(&id));
    assert!(level.clusters[id].safe, "still concealing while degenerating");
    let mut last_opacity = level.clusters[id].opacity;
    assert!(last_opacity < SAFE_OPACITY);

    // No further player contact for the rest of the cycle.
    level.player.pos = Vec2::new(50.0, 580.0);

    for _ in 0..179 {
        level.tick(DT);
        let opacity = level.clusters[id].opacity;
        assert!(opacity <= last_opacity, "opacity never rises while degenerating");
        last_opacity = opacity;
    }
    // Frame 180: the degenerating phase ends.
    assert!(!level.clusters[id].safe);
    assert!(level.clusters[id].opacity.abs() < 1e-9);
    assert!(level.regen.contains(&id));
    assert!(!level.degen.contains(&id));

    for _ in 0..178 {
        level.tick(DT);
        assert!(!level.clusters[id].safe);
    }
    level.tick(DT);
    assert!(level.clusters[id].safe, "regeneration promotes the zone back to safe");
    assert!(!level.clusters[id].degenerating);
    assert!(level.regen.is_empty() && level.degen.is_empty());
    assert_eq!(level.clusters[id].opacity, SAFE_OPACITY);
}

#[test]
fn degeneration_never_starts_below_level_three() {
    let mut level = Level::new(Rules::for_level(LevelId::Two), 9, &Layout::standard());
    let id = first_cluster(&level);
    level.player.pos = level.clusters[id].center;
    for _ in 0..10 {
        level.tick(DT);
    }
    assert!(!level.clusters[id].degenerating);
    assert!(level.degen.is_empty() && level.regen.is_empty());
}

#[test]
fn diagonal_player_movement_is_normalized() {
    let mut level = level_one();
    let start = level.player.pos;
    level.press(Key::Up);
    level.press(Key::Right);
    level.update_player(1.0);
    let moved = start.distance_to(level.player.pos);
    assert!((moved - PLAYER_SPEED).abs() < 1e-9);

    level.release(Key::Right);
    let start = level.player.pos;
    level.update_player(1.0);
    assert!((start.distance_to(level.player.pos) - PLAYER_SPEED).abs() < 1e-9);
}

#[test]
fn score_is_monotonic_across_ticks() {
    let mut level = level_one();
    level.set_god_mode(true);
    level.bowl_poisoned = true;
    let mut last = level.score();
    for _ in 0..2_000 {
        level.tick(DT);
        assert!(level.score() >= last);
        last = level.score();
    }
}
