//! Category classification using trigger substrings.
//!
//! Trigger groups are checked in priority order: crisis, anxiety, depression.
//! The first group with a matching trigger wins, so a crisis trigger suppresses
//! every other check for that utterance.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use super::picker::Picker;
use crate::content::{ContentBank, Exercise};
use crate::error::AppError;

/// Exercise offered after an anxiety reply.
pub const GROUNDING_EXERCISE: &str = "Grounding Techniques";
/// Exercise offered after a depression reply.
pub const THOUGHT_CHALLENGING_EXERCISE: &str = "Thought Challenging";

/// Response category for an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Self-harm or suicide language. Always wins.
    Crisis,
    Anxiety,
    Depression,
    /// Nothing matched
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Crisis => "crisis",
            Category::Anxiety => "anxiety",
            Category::Depression => "depression",
            Category::General => "general",
        }
    }

    /// Name of the exercise offered for this category, if any.
    pub fn exercise_name(&self) -> Option<&'static str> {
        match self {
            Category::Anxiety => Some(GROUNDING_EXERCISE),
            Category::Depression => Some(THOUGHT_CHALLENGING_EXERCISE),
            Category::Crisis | Category::General => None,
        }
    }
}

/// How trigger strings are matched against the lowercased utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMatch {
    /// Plain containment anywhere in the text ("hardware" matches "hard").
    #[default]
    Substring,
    /// Trigger must start and end on a word boundary.
    WordBoundary,
}

/// A raw input line and the lowercased form used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    raw: String,
    lowered: String,
}

impl Utterance {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lowered: raw.to_lowercase(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Which trigger fired, and for which category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerHit {
    pub category: Category,
    pub trigger: String,
}

/// Content chosen for an anxiety or depression reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub response: String,
    pub follow_up: String,
    pub exercise: Exercise,
}

/// Outcome of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ClassificationResult {
    Crisis { response: String },
    Anxiety(Guidance),
    Depression(Guidance),
    General,
}

impl ClassificationResult {
    pub fn category(&self) -> Category {
        match self {
            ClassificationResult::Crisis { .. } => Category::Crisis,
            ClassificationResult::Anxiety(_) => Category::Anxiety,
            ClassificationResult::Depression(_) => Category::Depression,
            ClassificationResult::General => Category::General,
        }
    }

    pub fn guidance(&self) -> Option<&Guidance> {
        match self {
            ClassificationResult::Anxiety(g) | ClassificationResult::Depression(g) => Some(g),
            _ => None,
        }
    }
}

/// Trigger table for one category
struct TriggerGroup {
    category: Category,
    triggers: Vec<String>,
    /// One compiled pattern per trigger, only in word-boundary mode.
    patterns: Vec<Regex>,
}

impl TriggerGroup {
    fn build(category: Category, triggers: &[String], mode: TriggerMatch) -> Result<Self, AppError> {
        let triggers: Vec<String> = triggers.iter().map(|t| t.to_lowercase()).collect();
        let patterns = match mode {
            TriggerMatch::Substring => Vec::new(),
            TriggerMatch::WordBoundary => triggers
                .iter()
                .map(|t| Regex::new(&format!(r"\b{}\b", regex::escape(t))))
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(Self {
            category,
            triggers,
            patterns,
        })
    }

    fn find(&self, lowered: &str) -> Option<&str> {
        if self.patterns.is_empty() {
            self.triggers
                .iter()
                .find(|t| lowered.contains(t.as_str()))
                .map(String::as_str)
        } else {
            self.patterns
                .iter()
                .position(|p| p.is_match(lowered))
                .map(|i| self.triggers[i].as_str())
        }
    }
}

/// Keyword classifier over the content bank's trigger tables
pub struct Classifier {
    bank: Arc<ContentBank>,
    groups: Vec<TriggerGroup>,
    mode: TriggerMatch,
}

impl Classifier {
    /// Build the trigger groups in priority order.
    pub fn new(bank: Arc<ContentBank>, mode: TriggerMatch) -> Result<Self, AppError> {
        let groups = vec![
            TriggerGroup::build(Category::Crisis, &bank.crisis.triggers, mode)?,
            TriggerGroup::build(Category::Anxiety, &bank.anxiety.triggers, mode)?,
            TriggerGroup::build(Category::Depression, &bank.depression.triggers, mode)?,
        ];
        Ok(Self { bank, groups, mode })
    }

    pub fn mode(&self) -> TriggerMatch {
        self.mode
    }

    /// Find the first matching trigger. Pure: no randomness involved.
    pub fn detect(&self, utterance: &Utterance) -> Option<TriggerHit> {
        let lowered = utterance.lowered();
        self.groups.iter().find_map(|group| {
            group.find(lowered).map(|trigger| TriggerHit {
                category: group.category,
                trigger: trigger.to_string(),
            })
        })
    }

    /// Category decision only.
    pub fn category(&self, text: &str) -> Category {
        self.detect(&Utterance::new(text))
            .map(|hit| hit.category)
            .unwrap_or(Category::General)
    }

    /// Classify an utterance and pick the content for its category.
    pub fn classify(&self, text: &str, picker: &mut Picker) -> Result<ClassificationResult, AppError> {
        let hit = self.detect(&Utterance::new(text));
        self.resolve(hit.as_ref(), picker)
    }

    /// Pick content for an already detected trigger hit.
    pub fn resolve(
        &self,
        hit: Option<&TriggerHit>,
        picker: &mut Picker,
    ) -> Result<ClassificationResult, AppError> {
        let Some(hit) = hit else {
            debug!("No category trigger found");
            return Ok(ClassificationResult::General);
        };

        match hit.category {
            Category::Crisis => {
                warn!("Crisis detected: trigger '{}'", hit.trigger);
                let response = picker.pick_required(&self.bank.crisis.responses, "crisis responses")?;
                Ok(ClassificationResult::Crisis {
                    response: response.clone(),
                })
            }
            Category::Anxiety => Ok(ClassificationResult::Anxiety(self.guidance(Category::Anxiety, picker)?)),
            Category::Depression => Ok(ClassificationResult::Depression(
                self.guidance(Category::Depression, picker)?,
            )),
            Category::General => Err(AppError::Internal(
                "general category has no trigger table".to_string(),
            )),
        }
    }

    fn guidance(&self, category: Category, picker: &mut Picker) -> Result<Guidance, AppError> {
        let content = self
            .bank
            .category(category)
            .ok_or_else(|| AppError::Internal(format!("no content for category {}", category)))?;
        let exercise_name = category
            .exercise_name()
            .ok_or_else(|| AppError::Internal(format!("no exercise for category {}", category)))?;
        let exercise = self
            .bank
            .exercise(exercise_name)
            .ok_or_else(|| AppError::Internal(format!("exercise '{}' missing from content bank", exercise_name)))?;

        debug!("{} indicators found", category);
        Ok(Guidance {
            response: picker.pick_required(&content.responses, "category responses")?.clone(),
            follow_up: picker.pick_required(&content.follow_ups, "category follow-ups")?.clone(),
            exercise: exercise.clone(),
        })
    }
}
