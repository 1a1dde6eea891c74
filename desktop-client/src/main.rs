mod background;
mod config;
mod constants;
mod game_ui;
mod runner;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use engine::config::ConfigManager;
use engine::logger;

use config::Config;
use runner::run_game_task;
use state::SharedState;
use ui::GameApp;

#[derive(Parser)]
#[command(name = "snake_game_client")]
#[command(version, about = "Desktop snake game")]
struct Cli {
    /// Path to the YAML config file (defaults to snake_game_config.yaml
    /// next to the executable)
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init_logger();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::from_yaml_file(path),
        None => config::get_config_manager(),
    };
    let config: Config = config_manager.get_config()?;

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let config_clone = config.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(run_game_task(shared_state_clone, command_rx, config_clone));
    });

    let canvas_side = config.game.mesh_length as f32 * constants::PIXELS_PER_CELL;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_side + 40.0, canvas_side + 200.0])
            .with_title("Snake Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Game",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}
