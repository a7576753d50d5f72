//! Shared types and constants for the Palaver voice assistant.
//!
//! This crate provides the value types used across the Palaver workspace:
//! serializable tool descriptors, the approximate-location value consumed
//! by the hosted web-search tool, and the voice-synthesis settings handed
//! to the speech pipeline.
//!
//! Everything here is a plain value with serde derives and no behavior
//! of its own; `palaver-agent` builds on these types without this crate
//! ever depending back on it.

use serde::{Deserialize, Serialize};

/// Granularity of a user location hint.
///
/// The hosted web-search tool only accepts coarse locations, so this is a
/// closed set with a single member today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// City/region-level location, never a precise position.
    #[default]
    Approximate,
}

/// A coarse user location forwarded to the hosted web-search tool.
///
/// All fields other than the kind are optional; an empty location is
/// valid and simply gives the provider nothing to bias results with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserLocation {
    /// Location granularity. Serializes as the `type` tag.
    #[serde(rename = "type")]
    pub kind: LocationKind,
    /// Free-form city name (e.g. "Tokyo").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Free-form region or state name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Two-letter ISO country code (e.g. "JP").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// IANA timezone name (e.g. "Asia/Tokyo").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl UserLocation {
    /// Builds an approximate location from a city name, the only field
    /// the assistant configuration ever sets.
    pub fn approximate(city: impl Into<String>) -> Self {
        Self {
            kind: LocationKind::Approximate,
            city: Some(city.into()),
            ..Self::default()
        }
    }
}

/// Serializable descriptor for one entry in an agent's tool list.
///
/// This is the shape the hosting runtime forwards to the model API:
/// function tools carry a name, description, and JSON-schema parameters
/// and are executed in-process; hosted tools carry provider-side
/// configuration only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolSpec {
    /// A function tool the runtime dispatches back into this process.
    Function {
        /// Name the model invokes the tool by.
        name: String,
        /// What the tool does, surfaced to the model.
        description: String,
        /// JSON schema for the tool's arguments object.
        parameters: serde_json::Value,
    },
    /// The provider-hosted web-search tool. Executed on the provider
    /// side; contributes no local callable.
    WebSearch {
        /// Optional coarse location used to bias search results.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_location: Option<UserLocation>,
    },
}

impl ToolSpec {
    /// Returns the name this entry occupies in the tool list.
    pub fn name(&self) -> &str {
        match self {
            Self::Function { name, .. } => name,
            Self::WebSearch { .. } => "web_search",
        }
    }
}

pub mod voice;
pub use voice::TtsSettings;
