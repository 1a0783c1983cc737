//! Pong entry point
//!
//! Headless host: each stdin line is one frame and lists the keys held during
//! it (e.g. `e down`, or an empty line for none). The clock advances by one
//! nominal frame per line, and each frame is written to stdout as a JSON line.

use std::collections::HashSet;
use std::io::{self, BufRead, BufWriter, Write};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pong::consts::FRAME_DT;
use pong::platform::{InputMapper, Key};
use pong::sim::{GameEvent, GameState, tick};
use pong::settings::KeyBindings;
use pong::{Frame, Settings};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let settings = Settings::default();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let (w, h) = settings.window_size();
    log::info!("{} starting ({}x{}, seed {})", settings.title, w, h, seed);

    let mut state = GameState::new(seed);
    let mut mapper = InputMapper::new(settings.bindings);
    let mut now = Duration::ZERO;

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let held = parse_keys(&line, line_no + 1, &settings.bindings);

        let input = mapper.sample(&held);
        tick(&mut state, &input, now);
        now += FRAME_DT;

        for event in &state.events {
            if let GameEvent::Goal { scorer, .. } = event {
                log::info!(
                    "Goal for player {} ({} - {})",
                    scorer.player_number(),
                    state.left.score,
                    state.right.score
                );
            }
        }

        serde_json::to_writer(&mut out, &Frame::capture(&state))?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    log::info!("Input closed after {} frames", state.frame);
    Ok(())
}

/// Held keys for one frame; unknown names and unbound keys are skipped
fn parse_keys(line: &str, line_no: usize, bindings: &KeyBindings) -> HashSet<Key> {
    line.split_whitespace()
        .filter_map(|name| match Key::from_str(name) {
            Some(key) if bindings.is_bound(key) => Some(key),
            Some(key) => {
                log::debug!("Line {}: {} is not bound, ignoring", line_no, key.as_str());
                None
            }
            None => {
                log::warn!("Line {}: unknown key {:?}", line_no, name);
                None
            }
        })
        .collect()
}
