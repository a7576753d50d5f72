//! Assistant configuration loading from file and environment variables.

use palaver_types::TtsSettings;
use serde::Deserialize;
use thiserror::Error;

use crate::persona;

/// Top-level assistant configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Agent persona settings.
    #[serde(default)]
    pub agent: AgentSettings,

    /// Voice-synthesis settings.
    #[serde(default)]
    pub voice: TtsSettings,
}

/// Persona settings for the conversational agent.
///
/// Defaults are the shipped constants from [`crate::persona`]; a
/// configuration file may override any subset of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentSettings {
    /// Display name the runtime reports.
    #[serde(default = "default_name")]
    pub name: String,

    /// Model identifier the conversation runs on.
    #[serde(default = "default_model")]
    pub model: String,

    /// Persona prompt.
    #[serde(default = "default_instructions")]
    pub instructions: String,

    /// Conversational-style prompt appended to the persona.
    #[serde(default = "default_style_instructions")]
    pub style_instructions: String,
}

fn default_name() -> String {
    persona::AGENT_NAME.to_string()
}

fn default_model() -> String {
    persona::AGENT_MODEL.to_string()
}

fn default_instructions() -> String {
    persona::AGENT_INSTRUCTIONS.to_string()
}

fn default_style_instructions() -> String {
    persona::STYLE_INSTRUCTIONS.to_string()
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            model: default_model(),
            instructions: default_instructions(),
            style_instructions: default_style_instructions(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `PALAVER_AGENT_NAME` overrides `agent.name`
/// - `PALAVER_AGENT_MODEL` overrides `agent.model`
/// - `PALAVER_VOICE_ID` overrides `voice.voice`
/// - `PALAVER_VOICE_SPEED` overrides `voice.speed`
/// - `PALAVER_VOICE_BUFFER_SIZE` overrides `voice.buffer_size`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(name) = std::env::var("PALAVER_AGENT_NAME") {
        config.agent.name = name;
    }
    if let Ok(model) = std::env::var("PALAVER_AGENT_MODEL") {
        config.agent.model = model;
    }
    if let Ok(voice) = std::env::var("PALAVER_VOICE_ID") {
        config.voice.voice = voice;
    }
    if let Ok(speed) = std::env::var("PALAVER_VOICE_SPEED") {
        if let Ok(parsed) = speed.parse() {
            config.voice.speed = parsed;
        }
    }
    if let Ok(buffer) = std::env::var("PALAVER_VOICE_BUFFER_SIZE") {
        if let Ok(parsed) = buffer.parse() {
            config.voice.buffer_size = parsed;
        }
    }

    Ok(config)
}
