// CLI module - command-line argument parsing and handlers
//
// Runs the TUI by default. Subcommands:
// - play: headless mode, reads `name,email` lines from stdin
// - config --show / --reset / --edit / --path: manage the config file

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Arena sign-up board with a live leaderboard
#[derive(Parser, Debug)]
#[command(name = "arena-board")]
#[command(version = VERSION)]
#[command(about = "Arena sign-up board with a live leaderboard", long_about = None)]
pub struct Cli {
    /// Seed the score generator for a reproducible session
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Skip the TUI and read submissions from stdin
    #[arg(long)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read `name,email` lines from stdin and print the final board
    Play {
        /// Print the final board as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// How the board should run after argument parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub seed: Option<u64>,
    /// Force headless mode regardless of config
    pub headless: bool,
    /// Headless output as JSON
    pub json: bool,
}

impl Cli {
    /// Resolve the run mode. Returns None for commands that finish on their own.
    pub fn run_options(&self) -> Option<RunOptions> {
        match self.command {
            Some(Commands::Config { .. }) => None,
            Some(Commands::Play { json }) => Some(RunOptions {
                seed: self.seed,
                headless: true,
                json,
            }),
            None => Some(RunOptions {
                seed: self.seed,
                headless: self.headless,
                json: false,
            }),
        }
    }
}

/// Handle CLI commands. Returns the run options, or None if a command was handled.
pub fn handle_cli() -> Option<RunOptions> {
    let cli = Cli::parse();

    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    {
        if path {
            handle_config_path();
        } else if show {
            handle_config_show();
        } else if reset {
            handle_config_reset();
        } else if edit {
            handle_config_edit();
        } else {
            println!("Usage: arena-board config [--show|--reset|--edit|--path]");
            println!();
            println!("Options:");
            println!("  --show    Display effective configuration");
            println!("  --reset   Reset config file to defaults");
            println!("  --edit    Open config file in $EDITOR");
            println!("  --path    Show config file path");
        }
        return None;
    }

    cli.run_options()
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!("# enable_tui = {} (ARENA_BOARD_NO_TUI)", config.enable_tui);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = Config::default().save() {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => {
            eprintln!("Editor exited with: {}", status);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch {}: {}", editor, e);
            std::process::exit(1);
        }
    }
}
