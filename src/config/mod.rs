//! Configuration module.

pub mod directories;
pub mod keybindings;
pub mod loader;

pub use directories::{resolve_directories, MAX_DIRECTORIES, MAX_DIRECTORY_LEN};
pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, DEFAULT_PROMPT_COUNT, MAX_PROMPT_COUNT,
};

use rand::Rng;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Screen layout used by the interactive loop.
///
/// Modes only change rendering; matching and selection are identical in all
/// three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Load banner, status line and prompt.
    #[default]
    Short,
    /// Status line and prompt, never a banner.
    Line,
    /// Short layout plus a listing of current matches.
    Long,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Short, DisplayMode::Line, DisplayMode::Long];

    /// Pick one of the three modes uniformly at random (`-r`).
    pub fn random() -> Self {
        Self::ALL[rand::thread_rng().gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Short => "short",
            DisplayMode::Line => "line",
            DisplayMode::Long => "long",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(DisplayMode::Short),
            "line" => Ok(DisplayMode::Line),
            "long" => Ok(DisplayMode::Long),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_short() {
        assert_eq!(DisplayMode::default(), DisplayMode::Short);
    }

    #[test]
    fn parses_mode_names_case_insensitively() {
        assert_eq!("short".parse::<DisplayMode>(), Ok(DisplayMode::Short));
        assert_eq!("Line".parse::<DisplayMode>(), Ok(DisplayMode::Line));
        assert_eq!(" LONG ".parse::<DisplayMode>(), Ok(DisplayMode::Long));
    }

    #[test]
    fn rejects_unknown_mode_names() {
        assert_eq!(
            "wide".parse::<DisplayMode>(),
            Err(ConfigError::InvalidMode("wide".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in DisplayMode::ALL {
            assert_eq!(mode.to_string().parse::<DisplayMode>(), Ok(mode));
        }
    }

    #[test]
    fn random_mode_is_one_of_the_three() {
        for _ in 0..32 {
            assert!(DisplayMode::ALL.contains(&DisplayMode::random()));
        }
    }
}
