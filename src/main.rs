//! Headless autoplay demo
//!
//! Drives the simulation at a synthetic 60 Hz and steers the word so the
//! hole tracks the falling letter, logging round outcomes. Useful for
//! eyeballing the difficulty curve without a front end:
//!
//! ```sh
//! RUST_LOG=info cargo run -- 12345
//! ```

use yo_drop::GameSession;
use yo_drop::consts::{DEFAULT_COLS, DEFAULT_ROWS};
use yo_drop::words;

const FRAME_NANOS: u64 = 16_666_667;
/// ~10 minutes of simulated play
const MAX_FRAMES: u64 = 36_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xD00D);

    let mut session = match GameSession::new(words::list(), DEFAULT_COLS, DEFAULT_ROWS, seed) {
        Ok(session) => session,
        Err(err) => {
            log::error!("bad word list: {err}");
            std::process::exit(1);
        }
    };

    log::info!("autoplay starting (seed {seed})");
    session.start_game();

    let mut last_score = 0;
    let mut last_lives = session.ui_state().lives;
    for frame in 1..=MAX_FRAMES {
        session.on_frame(frame * FRAME_NANOS);

        let (game_over, target, drop_col) = {
            let ui = session.ui_state();
            (ui.game_over, ui.target_col(), ui.drop_col)
        };
        if game_over {
            break;
        }

        // Steer the hole toward the drop column, one nudge per frame
        if target < drop_col {
            session.move_right();
        } else if target > drop_col {
            session.move_left();
        }

        let ui = session.ui_state();
        if ui.score != last_score {
            last_score = ui.score;
            log::info!("score {} (speed level {})", ui.score, ui.speed_level);
        }
        if ui.lives != last_lives {
            last_lives = ui.lives;
            log::info!("missed! {} lives left", ui.lives);
        }
    }

    let ui = session.ui_state();
    log::info!("done: score {}, {} lives left", ui.score, ui.lives);
}
