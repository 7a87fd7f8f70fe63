mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use social_swarm::app::App;
use social_swarm::config::ConfigManager;
use social_swarm::logging::{self, LogConfig};
use social_swarm::seed::SeedData;
use social_swarm::store::GroupStore;
use social_swarm::ui;
use std::path::PathBuf;
use std::time::Duration;
use swarm_types::ColorScheme;

/// Social Swarm - organize your social media profiles into groups
#[derive(Parser)]
#[command(name = "social-swarm")]
#[command(about = "A terminal manager for social media profile groups")]
#[command(version)]
struct Cli {
    /// JSON file with profiles and groups to start from (defaults to the built-in seed)
    #[arg(long, env = "SWARM_SEED_FILE")]
    seed: Option<PathBuf>,

    /// Color theme: default, dark, light or solarized
    #[arg(long, env = "SWARM_THEME")]
    theme: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,

    /// Log file path
    #[arg(long, env = "SWARM_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    no_log: bool,
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        let config = if self.no_log {
            LogConfig::disabled()
        } else if self.verbose {
            LogConfig::verbose()
        } else {
            LogConfig::default()
        };
        config.with_log_file(self.log_file.clone())
    }

    fn load_seed(&self) -> Result<SeedData> {
        match &self.seed {
            Some(path) => SeedData::load(path)
                .with_context(|| format!("Failed to load seed data from {}", path.display())),
            None => SeedData::builtin().context("Built-in seed data is invalid"),
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env before clap reads them
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let log_config = cli.log_config();
    logging::init_logging(&log_config)?;

    let seed = cli.load_seed()?;
    let mut app = App::new(GroupStore::from_seed(seed));
    app.log_config = log_config;

    match ConfigManager::new() {
        Ok(manager) => app = app.with_config_manager(manager),
        Err(e) => log::warn!("Preferences unavailable, using defaults: {:#}", e),
    }

    if let Some(name) = &cli.theme {
        match ColorScheme::parse(name) {
            Some(scheme) => app.color_scheme = scheme,
            None => log::warn!("Unknown theme {:?}, keeping {}", name, app.color_scheme.as_str()),
        }
    }

    let mut tui = terminal::init()?;
    let result = run(&mut tui, &mut app);
    terminal::restore()?;

    log::info!("Exiting with {} groups in memory", app.store.group_count());
    result
}

/// Main event loop
fn run(tui: &mut terminal::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.clear_expired_messages();

        tui.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            // Keyboard-only navigation; mouse and resize events just trigger a redraw
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key)?;
                }
            }
        }
    }

    Ok(())
}
