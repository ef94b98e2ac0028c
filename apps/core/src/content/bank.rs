//! Content bank and its accessors.
//!
//! The bank is plain data: it can come from the built-in tables or from a JSON
//! file with the same shape. Whether it is usable is decided by the preflight
//! checks, not here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use validator::Validate;

use super::defaults;
use crate::brain::Category;
use crate::error::AppError;

/// Triggers and canned lines for one category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryContent {
    /// Lowercase substrings that select this category.
    #[validate(length(min = 1))]
    pub triggers: Vec<String>,
    /// Primary replies, one is picked per utterance.
    #[validate(length(min = 1))]
    pub responses: Vec<String>,
    /// Second-step prompts. Empty for crisis.
    #[serde(default)]
    pub follow_ups: Vec<String>,
}

/// A named therapeutic technique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Exercise {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub steps: String,
}

/// Self-care suggestions, split into quick relief and daily habits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopingStrategies {
    pub immediate: Vec<String>,
    pub daily: Vec<String>,
}

/// All static content the conversation core reads from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBank {
    /// First bot message of a conversation.
    pub greeting: String,
    pub anxiety: CategoryContent,
    pub depression: CategoryContent,
    pub crisis: CategoryContent,
    pub exercises: Vec<Exercise>,
    pub coping: CopingStrategies,
    /// Validation sentences used for general replies.
    pub validation: Vec<String>,
    /// Supportive follow-up sentences used for general replies.
    pub supportive: Vec<String>,
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

impl Default for ContentBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentBank {
    /// The content shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            greeting: defaults::GREETING.to_string(),
            anxiety: CategoryContent {
                triggers: owned(defaults::ANXIETY_TRIGGERS),
                responses: owned(defaults::ANXIETY_RESPONSES),
                follow_ups: owned(defaults::ANXIETY_FOLLOW_UPS),
            },
            depression: CategoryContent {
                triggers: owned(defaults::DEPRESSION_TRIGGERS),
                responses: owned(defaults::DEPRESSION_RESPONSES),
                follow_ups: owned(defaults::DEPRESSION_FOLLOW_UPS),
            },
            crisis: CategoryContent {
                triggers: owned(defaults::CRISIS_TRIGGERS),
                responses: owned(defaults::CRISIS_RESPONSES),
                follow_ups: Vec::new(),
            },
            exercises: defaults::EXERCISES
                .iter()
                .map(|(name, description, steps)| Exercise {
                    name: name.to_string(),
                    description: description.to_string(),
                    steps: steps.to_string(),
                })
                .collect(),
            coping: CopingStrategies {
                immediate: owned(defaults::COPING_IMMEDIATE),
                daily: owned(defaults::COPING_DAILY),
            },
            validation: owned(defaults::VALIDATION),
            supportive: owned(defaults::SUPPORTIVE),
        }
    }

    /// Parse a bank from JSON with the same shape as the serialized struct.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a bank from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)?;
        let bank = Self::from_json_str(&contents)?;
        info!("Loaded content bank from {:?}", path);
        Ok(bank)
    }

    /// Content for a keyword category. `General` has no trigger table.
    pub fn category(&self, category: Category) -> Option<&CategoryContent> {
        match category {
            Category::Crisis => Some(&self.crisis),
            Category::Anxiety => Some(&self.anxiety),
            Category::Depression => Some(&self.depression),
            Category::General => None,
        }
    }

    /// Look up an exercise by its exact name.
    pub fn exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }
}
