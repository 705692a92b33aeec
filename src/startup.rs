// Startup module - banner and session settings
//
// Headless runs print the banner to stderr (stdout carries the board).
// TUI runs send the same information to the logs view instead.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// One line of the settings summary
pub struct SettingStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: String,
}

/// Summarize the settings that shape this session
fn get_setting_status(config: &Config, seed: Option<u64>) -> Vec<SettingStatus> {
    vec![
        SettingStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: format!("{} fps, theme {}", config.frame_rate, config.theme),
        },
        SettingStatus {
            name: "seed",
            enabled: seed.is_some(),
            description: match seed {
                Some(seed) => format!("replaying scores from seed {}", seed),
                None => "random scores".to_string(),
            },
        },
        SettingStatus {
            name: "log-files",
            enabled: config.logging.file_enabled,
            description: format!(
                "{} ({})",
                config.logging.file_dir.display(),
                config.logging.file_rotation.as_str()
            ),
        },
    ]
}

/// Print the banner before a headless run
pub fn print_startup(config: &Config, seed: Option<u64>) {
    use colors::*;

    eprintln!();
    eprintln!("  {BOLD}{RED}ARENA BOARD{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!("  {DIM}Enter the arena. Survive the index.{RESET}");
    eprintln!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            eprintln!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            eprintln!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }

    for setting in get_setting_status(config, seed) {
        let icon = if setting.enabled {
            format!("{GREEN}✓{RESET}")
        } else {
            format!("{DIM}○{RESET}")
        };
        eprintln!(
            "    {icon} {:<10} {DIM}{}{RESET}",
            setting.name, setting.description
        );
    }

    eprintln!();
    eprintln!("  {YELLOW}▸{RESET} Reading {BOLD}name,email{RESET} lines from stdin");
    eprintln!();
}

/// Send the banner to the TUI logs view
pub fn log_startup(config: &Config, seed: Option<u64>) {
    tracing::info!("ARENA BOARD v{}", VERSION);
    for setting in get_setting_status(config, seed) {
        let icon = if setting.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, setting.name, setting.description);
    }
    tracing::info!("Gates open. Waiting for challengers...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_setting_reflects_seed() {
        let config = Config::default();
        let settings = get_setting_status(&config, Some(5));
        let seed = settings.iter().find(|s| s.name == "seed").unwrap();
        assert!(seed.enabled);
        assert!(seed.description.contains('5'));

        let settings = get_setting_status(&config, None);
        let seed = settings.iter().find(|s| s.name == "seed").unwrap();
        assert!(!seed.enabled);
    }
}
