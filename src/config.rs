// Configuration for the arena board
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/arena-board/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frame rate bounds for the TUI ticker
const MIN_FRAME_RATE: u32 = 1;
const MAX_FRAME_RATE: u32 = 240;
const DEFAULT_FRAME_RATE: u32 = 60;

/// Log file rotation period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write JSON logs to rolling files
    pub file_enabled: bool,

    pub file_dir: PathBuf,

    pub file_prefix: String,

    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "arena-board.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Arena", "Ember", "Frost", "Mono"
    pub theme: String,

    /// TUI frames per second (drives animations)
    pub frame_rate: u32,

    /// Fixed RNG seed for reproducible score sequences
    pub seed: Option<u64>,

    /// Whether to run the TUI (false = headless line mode)
    pub enable_tui: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file structure
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    frame_rate: Option<u32>,
    seed: Option<u64>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

/// Environment lookup, injectable for tests
type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

impl Config {
    /// Get the config file path: ~/.config/arena-board/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("arena-board").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        let template = r#"# arena-board configuration
# Uncomment and modify options as needed

# Theme: Arena, Ember, Frost, Mono (F4 cycles themes in the TUI)
# theme = "Arena"

# Frames per second for the TUI animations (1-240)
# frame_rate = 60

# Fixed seed for reproducible scores (omit for random)
# seed = 1234

# Logging configuration
# [logging]
# level = "info"            # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false      # Also write JSON logs to files
# file_dir = "./logs"
# file_prefix = "arena-board.log"
# file_rotation = "daily"   # hourly, daily, never
"#;

        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(),
        }
    }

    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        let seed = match self.seed {
            Some(seed) => format!("seed = {}", seed),
            None => "# seed = 1234".to_string(),
        };

        format!(
            r#"# arena-board configuration

# Theme: Arena, Ember, Frost, Mono
theme = "{theme}"

# Frames per second for the TUI animations
frame_rate = {frame_rate}

# Fixed seed for reproducible scores
{seed}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
file_rotation = "{file_rotation}"
"#,
            theme = self.theme,
            frame_rate = self.frame_rate,
            seed = seed,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), &|key: &str| std::env::var(key).ok())
    }

    fn resolve(file: FileConfig, env: EnvLookup<'_>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("ARENA_BOARD_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Frame rate: env > file > default, clamped to a sane range
        let frame_rate = env("ARENA_BOARD_FRAME_RATE")
            .and_then(|v| v.parse().ok())
            .or(file.frame_rate)
            .unwrap_or(DEFAULT_FRAME_RATE)
            .clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);

        // Seed: env > file > none
        let seed = env("ARENA_BOARD_SEED")
            .and_then(|v| v.parse().ok())
            .or(file.seed);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("ARENA_BOARD_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Logging settings: file config only (RUST_LOG handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.logging.level),
            file_enabled: file_logging
                .file_enabled
                .unwrap_or(defaults.logging.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or(defaults.logging.file_prefix),
            file_rotation: file_logging
                .file_rotation
                .as_deref()
                .and_then(LogRotation::parse)
                .unwrap_or(defaults.logging.file_rotation),
        };

        Self {
            theme,
            frame_rate,
            seed,
            enable_tui,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Arena".to_string(),
            frame_rate: DEFAULT_FRAME_RATE,
            seed: None,
            enable_tui: true,
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_config_roundtrip_default() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );
    }

    #[test]
    fn test_config_roundtrip_preserves_values() {
        let mut config = Config::default();
        config.theme = "Frost".to_string();
        config.frame_rate = 30;
        config.seed = Some(77);
        config.logging.level = "debug".to_string();
        config.logging.file_enabled = true;
        config.logging.file_rotation = LogRotation::Hourly;

        let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        let resolved = Config::resolve(file, &no_env);

        assert_eq!(resolved.theme, "Frost");
        assert_eq!(resolved.frame_rate, 30);
        assert_eq!(resolved.seed, Some(77));
        assert_eq!(resolved.logging.level, "debug");
        assert!(resolved.logging.file_enabled);
        assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
    }

    #[test]
    fn test_template_is_valid_toml() {
        // Everything is commented out, so it parses to an empty config
        let file: FileConfig = toml::from_str("# theme = \"Arena\"\n").unwrap();
        assert!(file.theme.is_none());
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = Config::resolve(FileConfig::default(), &no_env);
        assert_eq!(config.theme, "Arena");
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.seed, None);
        assert!(config.enable_tui);
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn test_env_overrides_file() {
        let file: FileConfig = toml::from_str("theme = \"Ember\"\nseed = 5\n").unwrap();
        let env = env_from(&[("ARENA_BOARD_THEME", "Mono"), ("ARENA_BOARD_SEED", "9")]);
        let config = Config::resolve(file, &env);
        assert_eq!(config.theme, "Mono");
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_frame_rate_is_clamped() {
        let env = env_from(&[("ARENA_BOARD_FRAME_RATE", "0")]);
        assert_eq!(Config::resolve(FileConfig::default(), &env).frame_rate, 1);

        let file: FileConfig = toml::from_str("frame_rate = 10000\n").unwrap();
        assert_eq!(Config::resolve(file, &no_env).frame_rate, 240);
    }

    #[test]
    fn test_no_tui_flag() {
        let env = env_from(&[("ARENA_BOARD_NO_TUI", "true")]);
        assert!(!Config::resolve(FileConfig::default(), &env).enable_tui);

        let env = env_from(&[("ARENA_BOARD_NO_TUI", "0")]);
        assert!(Config::resolve(FileConfig::default(), &env).enable_tui);
    }

    #[test]
    fn test_unknown_rotation_falls_back() {
        let file: FileConfig =
            toml::from_str("[logging]\nfile_rotation = \"weekly\"\n").unwrap();
        let config = Config::resolve(file, &no_env);
        assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    }
}
