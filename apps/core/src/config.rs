//! Conversation configuration.
//!
//! Timing is expressed as a base unit plus the fixed per-step multiples used by
//! the sequencer, so slowing the whole conversation down is a single knob.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use validator::Validate;

use crate::brain::{Delay, TriggerMatch};
use crate::error::AppError;

/// Runtime settings for one conversation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChatConfig {
    /// Length of one delay unit in milliseconds.
    #[validate(range(min = 1, max = 60000))]
    pub delay_unit_ms: u64,
    /// How long the thinking indicator stays up, in units.
    #[validate(range(min = 0.0, max = 10.0))]
    pub thinking_delay_units: f64,
    /// Trigger matching strategy.
    pub trigger_match: TriggerMatch,
    /// Capacity of the conversation actor's mailbox.
    #[validate(range(min = 1, max = 1024))]
    pub mailbox_capacity: usize,
    /// How long a handle waits for the actor to answer.
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,
    /// Fixed seed for reply selection. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            delay_unit_ms: 1000,
            thinking_delay_units: 1.5,
            trigger_match: TriggerMatch::Substring,
            mailbox_capacity: 32,
            request_timeout_secs: 30,
            rng_seed: None,
        }
    }
}

impl ChatConfig {
    pub fn delay_unit(&self) -> Duration {
        Duration::from_millis(self.delay_unit_ms)
    }

    pub fn thinking_delay(&self) -> Delay {
        Delay::units(self.thinking_delay_units)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let config: ChatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
