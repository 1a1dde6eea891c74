use tokio::sync::mpsc;
use tokio::time::interval;

use engine::game::{GameState, TickOutcome};
use engine::{log, GameRng};

use crate::background;
use crate::config::Config;
use crate::state::{ClientCommand, GameView, SharedState};

/// Drives the game: one periodic tick, one input channel, no overlap. Runs
/// until the process exits with the UI.
pub async fn run_game_task(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    config: Config,
) {
    let settings = config.game.to_settings();
    let mut rng = GameRng::from_random();
    log!("Starting game with seed {}", rng.seed());

    let mut game_state = GameState::new(&settings, &mut rng);
    let mut tick: u64 = 0;
    let mut background_generation: u64 = 0;

    change_background(&shared_state, &config, &mut background_generation);
    publish_view(&shared_state, &game_state, tick);

    let mut tick_timer = interval(settings.tick_interval);

    loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                match game_state.tick(&mut rng) {
                    Ok(TickOutcome::Moved) => {}
                    Ok(TickOutcome::AteApple) => {
                        shared_state.add_event(format!(
                            "Apple eaten. Score: {}",
                            game_state.snake.score
                        ));
                        change_background(&shared_state, &config, &mut background_generation);
                    }
                    Err(collision) => {
                        // Game over is the reset path, not a stop: fresh
                        // state, same loop, next tick keeps playing.
                        let final_score = game_state.snake.score;
                        log!(
                            "Game over: ran into itself at ({}, {}). Final score: {}",
                            collision.cell.x,
                            collision.cell.y,
                            final_score
                        );
                        shared_state.add_event(format!(
                            "Game over at score {}. Starting a new game.",
                            final_score
                        ));
                        game_state = GameState::new(&settings, &mut rng);
                        change_background(&shared_state, &config, &mut background_generation);
                    }
                }
                tick += 1;
                publish_view(&shared_state, &game_state, tick);
            }
            Some(command) = command_rx.recv() => {
                match command {
                    ClientCommand::Turn { direction } => {
                        game_state.set_direction(direction);
                    }
                }
            }
        }
    }
}

fn publish_view(shared_state: &SharedState, game_state: &GameState, tick: u64) {
    shared_state.set_view(GameView {
        snake: game_state.snake.body.iter().copied().collect(),
        apple: game_state.apple,
        score: game_state.snake.score,
        mesh_length: game_state.field_size.width,
        tick,
    });
}

fn change_background(shared_state: &SharedState, config: &Config, generation: &mut u64) {
    if !config.background.enabled {
        return;
    }

    *generation += 1;
    let generation = *generation;
    let url = background::pick_background_url();
    log!("Fetching background image from {}", url);

    let shared_state = shared_state.clone();
    tokio::task::spawn_blocking(move || {
        match background::fetch_background(url, generation) {
            Ok(image) => shared_state.set_background(image),
            Err(e) => log!("Background image fetch failed: {}", e),
        }
    });
}
