//! Playback settings layered from defaults, an optional TOML file and flags.

use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result as AnyResult};
use clap::ValueEnum;
use serde::Deserialize;

/// When the board is drawn during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum RenderMode {
    /// Only the score is printed.
    Never,
    /// The board is drawn once after the last command.
    #[default]
    Final,
    /// The board is drawn before the first command and after every command.
    EveryStep,
}

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    playback: PlaybackSection,
    output: OutputSection,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
struct PlaybackSection {
    delay_ms: Option<u64>,
    render: Option<RenderMode>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
struct OutputSection {
    json: Option<bool>,
}

impl FileConfig {
    /// Reads and parses a TOML config file.
    pub(crate) fn load(path: &Path) -> AnyResult<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Values given on the command line; `None` defers to the file or defaults.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) delay_ms: Option<u64>,
    pub(crate) render: Option<RenderMode>,
    pub(crate) json: bool,
}

/// Effective playback settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) delay: Duration,
    pub(crate) render: RenderMode,
    pub(crate) json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            render: RenderMode::default(),
            json: false,
        }
    }
}

impl Settings {
    /// Layers flags over the file over built-in defaults.
    pub(crate) fn resolve(overrides: Overrides, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let delay = overrides
            .delay_ms
            .or(file.playback.delay_ms)
            .map_or(defaults.delay, Duration::from_millis);

        Self {
            delay,
            render: overrides
                .render
                .or(file.playback.render)
                .unwrap_or(defaults.render),
            json: overrides.json || file.output.json.unwrap_or(defaults.json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let settings = Settings::resolve(Overrides::default(), None);

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.render, RenderMode::Final);
    }

    #[test]
    fn file_values_fill_unset_flags() {
        let file = FileConfig::from_toml_str(
            "[playback]\ndelay_ms = 250\nrender = \"every-step\"\n\n[output]\njson = true\n",
        )
        .expect("valid config");

        let settings = Settings::resolve(Overrides::default(), Some(file));

        assert_eq!(settings.delay, Duration::from_millis(250));
        assert_eq!(settings.render, RenderMode::EveryStep);
        assert!(settings.json);
    }

    #[test]
    fn flags_override_file_values() {
        let file = FileConfig::from_toml_str("[playback]\ndelay_ms = 250\nrender = \"never\"\n")
            .expect("valid config");
        let overrides = Overrides {
            delay_ms: Some(0),
            render: Some(RenderMode::EveryStep),
            json: false,
        };

        let settings = Settings::resolve(overrides, Some(file));

        assert_eq!(settings.delay, Duration::ZERO);
        assert_eq!(settings.render, RenderMode::EveryStep);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml_str("[playback]\nspeed = 3\n").is_err());
        assert!(FileConfig::from_toml_str("[network]\n").is_err());
    }

    #[test]
    fn empty_file_is_valid() {
        assert_eq!(
            FileConfig::from_toml_str("").expect("empty config"),
            FileConfig::default()
        );
    }
}
