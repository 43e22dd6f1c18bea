//! Window configuration for the desktop app.

use app::APP_NAME;
use macroquad::window::Conf;

const WINDOW_WIDTH: i32 = 600;
const WINDOW_HEIGHT: i32 = 600;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;

    #[test]
    fn window_matches_the_play_area() {
        let conf = build_window_conf();
        assert_eq!(conf.window_width, 600);
        assert_eq!(conf.window_height, 600);
        assert!(conf.high_dpi);
    }
}
