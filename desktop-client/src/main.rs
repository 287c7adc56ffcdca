mod app;
mod config;
mod frame_scheduler;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::snake::{GameMode, SnakeSession};
use common::storage::{ProfileStore, YamlFileStore};
use common::{LogLevel, log, logger};
use eframe::egui;

use app::SnakeApp;
use config::{Config, data_file_path, get_config_manager};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Bounded,
    Portal,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Bounded => GameMode::Bounded,
            ModeArg::Portal => GameMode::Portal,
        }
    }
}

#[derive(Parser)]
#[command(name = "neon_snake", version, about = "Grid snake with a persisted best score")]
struct Args {
    /// Board size in tiles per side
    #[arg(long)]
    board_tiles: Option<u32>,
    /// Moves per second
    #[arg(long)]
    speed: Option<f32>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// YAML config file (defaults to one next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,
    /// YAML file holding best score and theme
    #[arg(long)]
    data: Option<PathBuf>,
    /// Fixed food placement seed
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    debug: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let (config, config_error) = match config_manager.get_config() {
        Ok(config) => (config.sanitized(), None),
        Err(e) => (Config::default(), Some(e)),
    };

    let level = if args.debug {
        LogLevel::Debug
    } else {
        config.log_level
    };
    let prefix = args.use_log_prefix.then(|| "Snake".to_string());
    logger::init_logger(prefix, level);

    if let Some(e) = config_error {
        log!("Ignoring config: {}", e);
    }

    let mut settings = config.game;
    if let Some(board_tiles) = args.board_tiles {
        settings.board_tiles = board_tiles;
    }
    if let Some(speed) = args.speed {
        settings.moves_per_second = speed;
    }
    if let Some(mode) = args.mode {
        settings.mode = mode.into();
    }

    let data_path = args.data.unwrap_or_else(|| data_file_path(&config));
    log!("Profile data: {}", data_path.display());
    let profile = ProfileStore::new(Box::new(YamlFileStore::new(&data_path)));

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let session = SnakeSession::new(settings, profile, rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 700.0])
            .with_min_inner_size([320.0, 420.0])
            .with_title("Neon Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Neon Snake",
        options,
        Box::new(move |cc| {
            Ok(Box::new(SnakeApp::new(
                cc.egui_ctx.clone(),
                session,
                config_manager,
            )))
        }),
    )?;

    log!("Bye");
    Ok(())
}
