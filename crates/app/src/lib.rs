pub mod app_loop;

pub const APP_NAME: &str = "Poison the Punch";

/// Format the score line shown during play.
pub fn format_score(score: u32, target: u32) -> String {
    format!("Score: {score}/{target}")
}
