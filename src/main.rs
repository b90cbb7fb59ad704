//! postit - CLI entry point
//!
//! Runs the sticky-notes board in the terminal, prints the stored notes, and
//! manages the configuration file.

use postit::{
    config::{default, loader::ConfigLoader, schema::Config, xdg},
    logging,
    storage::{self, FileStore, KeyValueStore, MemoryStore},
    tui::{app::App, scale::Scale, ui::board_area},
    Board,
};
use clap::{Parser, Subcommand};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::process::ExitCode;

/// Sticky notes for the terminal
#[derive(Parser)]
#[command(name = "postit")]
#[command(version, about = "Sticky notes board for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the postit CLI
#[derive(Subcommand)]
enum Commands {
    /// Open the board (default when no subcommand is given)
    Tui {
        /// Directory holding the note store (overrides board.store_dir)
        #[arg(long)]
        store_dir: Option<PathBuf>,
        /// Keep notes in memory only; nothing is read or written
        #[arg(long, conflicts_with = "store_dir")]
        ephemeral: bool,
    },

    /// Print the stored notes
    List {
        /// Directory holding the note store (overrides board.store_dir)
        #[arg(long)]
        store_dir: Option<PathBuf>,
        /// Print the stored JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tui {
        store_dir: None,
        ephemeral: false,
    }) {
        Commands::Tui {
            store_dir,
            ephemeral,
        } => run_tui(store_dir, ephemeral),
        Commands::List { store_dir, json } => run_list(store_dir, json),
        Commands::Config { action } => run_config(action),
    }
}

fn load_config() -> Option<Config> {
    match ConfigLoader::load_default() {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Config error: {e}");
            None
        }
    }
}

fn run_tui(store_dir: Option<PathBuf>, ephemeral: bool) -> ExitCode {
    let Some(config) = load_config() else {
        return ExitCode::FAILURE;
    };
    match logging::init(&config.log) {
        Ok(path) => tracing::info!("postit starting, logging to {}", path.display()),
        Err(e) => eprintln!("Warning: could not open log file: {e}"),
    }

    let store: Box<dyn KeyValueStore> = if ephemeral {
        tracing::info!("ephemeral board, notes will not be saved");
        Box::new(MemoryStore::new())
    } else {
        let store = FileStore::new(store_dir.unwrap_or_else(|| config.board.store_dir_path()));
        tracing::info!("note store: {}", store.dir().display());
        Box::new(store)
    };

    // The first frame corrects the viewport if the size query is off
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let scale = Scale::from_config(&config.board);
    let board = Board::load(store, scale.viewport(board_area(Rect::new(0, 0, width, height))));
    let mut app = App::new(board, scale, config.tui.tick_rate_duration());

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime for TUI: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = rt.block_on(app.run()) {
        tracing::error!("TUI error: {}", e);
        eprintln!("TUI error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("postit exiting with {} notes", app.board.notes().len());
    ExitCode::SUCCESS
}

fn run_list(store_dir: Option<PathBuf>, json: bool) -> ExitCode {
    let Some(config) = load_config() else {
        return ExitCode::FAILURE;
    };
    let store = FileStore::new(store_dir.unwrap_or_else(|| config.board.store_dir_path()));
    let notes = match storage::load_notes(&store) {
        Ok(notes) => notes,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&notes) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: failed to encode notes: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if notes.is_empty() {
        println!("No notes");
        return ExitCode::SUCCESS;
    }
    for note in &notes {
        let first_line = note.display_text().lines().next().unwrap_or_default();
        println!(
            "{}  {:<13}  {:>4},{:<4}  {}x{}  {}",
            note.id,
            note.color.token(),
            note.position.x,
            note.position.y,
            note.size.width,
            note.size.height,
            first_line
        );
    }
    ExitCode::SUCCESS
}

fn run_config(action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => default::create_default_config(force).map(|path| {
            println!("Created configuration at {}", path.display());
        }),
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate => ConfigLoader::load_default().map(|config| {
            println!("Configuration is valid");
            println!("{config:#?}");
        }),
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
