//! Circle-and-text rendering of the core's read-only snapshot.

use app::format_score;
use game_core::types::{ActorKind, GamePhase};
use game_core::{ActorView, Snapshot};
use macroquad::prelude::*;

const BACKGROUND: Color = Color { r: 0.64, g: 0.76, b: 0.90, a: 1.0 };
const CLUSTER_BLUE: Color = BLUE;
const FOV_COLOR: Color = Color { r: 1.0, g: 1.0, b: 0.0, a: 0.2 };
const GUEST_RADIUS: f32 = 5.0;
const PLAYER_RADIUS: f32 = 6.0;

pub fn draw_frame(snapshot: &Snapshot) {
    clear_background(BACKGROUND);
    match snapshot.phase {
        GamePhase::Menu => draw_menu(),
        GamePhase::Playing(_) => draw_level(snapshot),
    }
}

fn draw_menu() {
    draw_text(app::APP_NAME, 25.0, 50.0, 36.0, BLACK);
    let lines = [
        "Press 1, 2 or 3 to start a level.",
        "Move with WASD or the arrow keys.",
        "Poison the punch bowl by walking into it, then stay hidden",
        "in guest clusters while poisoned guests wander out.",
        "Only clusters with at least 6 guests will hide you.",
        "Don't let the monitor's gaze catch you in the open.",
        "E returns to this menu. G toggles god mode.",
    ];
    let mut y = 110.0;
    for line in lines {
        draw_text(line, 25.0, y, 18.0, DARKGRAY);
        y += 26.0;
    }
}

fn draw_level(snapshot: &Snapshot) {
    for cluster in &snapshot.clusters {
        let mut color = CLUSTER_BLUE;
        color.a = cluster.opacity as f32;
        draw_circle(cluster.center.x as f32, cluster.center.y as f32, cluster.radius as f32, color);
    }

    if let Some(fov) = snapshot.fov {
        draw_circle(fov.center.x as f32, fov.center.y as f32, fov.radius as f32, FOV_COLOR);
    }

    if let Some(bowl) = snapshot.bowl {
        let color = if bowl.poisoned { GREEN } else { RED };
        draw_circle(bowl.center.x as f32, bowl.center.y as f32, bowl.radius as f32, color);
    }

    if let Some(exit) = snapshot.exit {
        draw_circle(exit.center.x as f32, exit.center.y as f32, exit.radius as f32, BLACK);
    }

    for actor in &snapshot.actors {
        draw_actor(actor);
    }

    draw_text(&format_score(snapshot.score, snapshot.win_target), 470.0, 25.0, 22.0, BLACK);
    if let Some(level) = snapshot.level {
        draw_text(&format!("Level {}", level.number()), 25.0, 25.0, 22.0, BLACK);
    }
    if snapshot.god_mode {
        draw_text("god mode", 25.0, 585.0, 18.0, MAROON);
    }
}

fn draw_actor(actor: &ActorView) {
    let x = actor.pos.x as f32;
    let y = actor.pos.y as f32;
    match actor.kind {
        ActorKind::Guest => draw_circle(x, y, GUEST_RADIUS, DARKGRAY),
        ActorKind::Player => draw_circle(x, y, PLAYER_RADIUS, WHITE),
        ActorKind::Monitor => draw_circle(x, y, PLAYER_RADIUS, ORANGE),
    }
}
