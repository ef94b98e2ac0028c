//! Response Plan - Output structure for Brain analysis.
//!
//! Everything the scheduler needs to deliver one reply.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classifier::Category;
use super::sequencer::{Delay, Emission};

/// Complete reply plan for one user utterance
#[derive(Debug, Clone, Serialize)]
pub struct ResponsePlan {
    /// Original user text
    pub utterance: String,

    /// Chosen category
    pub category: Category,

    /// Trigger that selected the category, `None` for general replies
    pub matched_trigger: Option<String>,

    /// How long the thinking indicator stays up before the first emission
    pub thinking: Delay,

    /// Ordered bot output with relative delays
    pub emissions: Vec<Emission>,

    /// Processing time in microseconds
    pub processing_time_us: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl ResponsePlan {
    /// Thinking delay plus every emission delay.
    pub fn total_delay(&self) -> Delay {
        self.thinking + self.emissions.iter().map(|e| e.delay).sum::<Delay>()
    }

    pub fn is_crisis(&self) -> bool {
        self.category == Category::Crisis
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Category: {}, Trigger: {}, Emissions: {}, Total delay: {:.1} units",
            self.category,
            self.matched_trigger.as_deref().unwrap_or("-"),
            self.emissions.len(),
            self.total_delay().as_units()
        )
    }
}
