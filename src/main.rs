//! Nova Strike entry point
//!
//! Headless native runner: plays a session on autopilot as fast as the
//! simulation steps (no frame pacing), routes events to the audio manager,
//! and prints the final HUD.
//!
//! Usage: `nova-strike [settings.json]`

use nova_strike::Settings;
use nova_strike::audio::AudioManager;
use nova_strike::consts::TICKS_PER_SECOND;
use nova_strike::platform::InputState;
use nova_strike::sim::{GamePhase, GameState, default_rng, tick};
use nova_strike::ui::HudView;

/// Levels to play before stopping
const MAX_LEVELS: u32 = 5;

fn main() {
    env_logger::init();
    log::info!("Nova Strike (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut audio = AudioManager::default();
    audio.apply_settings(&settings);

    let mut rng = default_rng();
    let mut state = GameState::new(settings.play_field());
    let mut input = InputState::default();
    input.idle_mode = true;

    state.start_new_game(settings.difficulty);

    loop {
        let events = tick(&mut state, &input.take_tick_input(), &mut rng);
        audio.handle_events(&events);

        match state.phase {
            GamePhase::Playing => {
                if state.time_ticks % TICKS_PER_SECOND as u64 == 0 {
                    let hud = HudView::capture(&state);
                    log::info!(
                        "L{} {}s score={} health={} enemies={}",
                        hud.level,
                        hud.seconds_left,
                        hud.score,
                        hud.health,
                        state.entities.enemies.len()
                    );
                }
            }
            GamePhase::LevelComplete if state.level < MAX_LEVELS => {
                state.next_level();
            }
            _ => break,
        }
    }

    let hud = HudView::capture(&state);
    match serde_json::to_string_pretty(&hud) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize HUD: {}", e),
    }
}
