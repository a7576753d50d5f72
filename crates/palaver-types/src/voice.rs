//! Voice-synthesis settings for the assistant's speech pipeline.
//!
//! The external pipeline reads these values as-is; nothing in this
//! workspace transforms them. Defaults are the shipped voice
//! configuration of the assistant.

use serde::{Deserialize, Serialize};

/// Voice preset the synthesizer renders speech with.
pub const VOICE_ID: &str = "ballad";

/// Minimum length, in characters, of a text chunk handed to the
/// synthesizer at once. The pipeline feeds the synthesizer partial
/// sentences; this bounds how small those pieces get.
pub const VOICE_BUFFER_SIZE: usize = 512;

/// Playback speed multiplier (1.0 is the synthesizer's natural pace).
pub const VOICE_SPEED: f32 = 1.5;

/// Delivery prompt for the synthesizer: how the voice should sound,
/// independent of what the agent says.
pub const VOICE_INSTRUCTIONS: &str = r#"You will receive partial sentences. Do not complete the sentence just read out the text.

Voice: Old, strained and gravelly.

Tone: The voice should be raw and delightfully theatrical, reminiscent of a 1800s era gold miner.

Pacing: The speech should flow smoothly at a steady cadence, neither rushed nor sluggish, allowing for clarity and a touch of grandeur.

Pronunciation: As though speaking with loose false teeth, the voice should have trouble with S's.

Emotion: Reminiscent of a bygone era, the voice should convey a sense of nostalgia and wisdom, with a hint of wicked playfulness.

Inflection: The voice should rise and fall in a melodramatic manner, as if reciting a grand tale of adventure and mischief.

Word Choice: The script should incorporate vintage expressions like splendid, marvelous, posthaste, and ta-ta for now, avoiding modern slang.
"#;

fn default_voice() -> String {
    VOICE_ID.to_string()
}

fn default_instructions() -> String {
    VOICE_INSTRUCTIONS.to_string()
}

fn default_buffer_size() -> usize {
    VOICE_BUFFER_SIZE
}

fn default_speed() -> f32 {
    VOICE_SPEED
}

/// Settings for text-to-speech rendering of the agent's replies.
///
/// A plain value: constructed from the constants above (or a `[voice]`
/// configuration section) and handed unchanged to the external speech
/// pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsSettings {
    /// Voice preset identifier.
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Delivery prompt shaping how the voice sounds.
    #[serde(default = "default_instructions")]
    pub instructions: String,
    /// Minimum text chunk size, in characters, per synthesis call.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
    /// Playback speed multiplier (1.0 is normal).
    #[serde(default = "default_speed")]
    pub speed: f32,
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            instructions: default_instructions(),
            buffer_size: default_buffer_size(),
            speed: default_speed(),
        }
    }
}
