//! Canned prompts behind the quick-action buttons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    Anxiety,
    Coping,
    Mindfulness,
    Thoughts,
    Talk,
    Crisis,
}

impl QuickAction {
    pub const ALL: [QuickAction; 6] = [
        QuickAction::Anxiety,
        QuickAction::Coping,
        QuickAction::Mindfulness,
        QuickAction::Thoughts,
        QuickAction::Talk,
        QuickAction::Crisis,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuickAction::Anxiety => "anxiety",
            QuickAction::Coping => "coping",
            QuickAction::Mindfulness => "mindfulness",
            QuickAction::Thoughts => "thoughts",
            QuickAction::Talk => "talk",
            QuickAction::Crisis => "crisis",
        }
    }

    /// The user line sent on the user's behalf.
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::Anxiety => "I'm feeling really anxious right now and could use some help.",
            QuickAction::Coping => "I need some coping strategies to help me get through this.",
            QuickAction::Mindfulness => "Can you help me with some mindfulness exercises?",
            QuickAction::Thoughts => "I'm having a lot of negative thoughts and they're really bothering me.",
            QuickAction::Talk => "I just need someone to talk to right now.",
            QuickAction::Crisis => "I'm in crisis and need immediate support.",
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuickAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        QuickAction::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| AppError::Validation(format!("Unknown quick action: {}", s)))
    }
}
