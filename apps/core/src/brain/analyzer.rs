//! Brain Analyzer - Main orchestrator for the Brain module.
//!
//! Runs classification and sequencing for one utterance and packages the
//! result as a `ResponsePlan`.

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::classifier::{Category, Classifier, Utterance};
use super::picker::Picker;
use super::response_plan::ResponsePlan;
use super::sequencer::{Delay, Sequencer};
use crate::config::ChatConfig;
use crate::content::ContentBank;
use crate::error::AppError;

/// Main Brain analyzer that orchestrates classification and sequencing
pub struct BrainAnalyzer {
    classifier: Classifier,
    sequencer: Sequencer,
    picker: Picker,
    thinking: Delay,
}

impl BrainAnalyzer {
    /// Create an analyzer over a content bank. Uses `config.rng_seed` when set.
    pub fn new(bank: Arc<ContentBank>, config: &ChatConfig) -> Result<Self, AppError> {
        let picker = match config.rng_seed {
            Some(seed) => Picker::seeded(seed),
            None => Picker::from_entropy(),
        };
        Self::with_picker(bank, config, picker)
    }

    pub fn with_picker(bank: Arc<ContentBank>, config: &ChatConfig, picker: Picker) -> Result<Self, AppError> {
        Ok(Self {
            classifier: Classifier::new(bank.clone(), config.trigger_match)?,
            sequencer: Sequencer::new(bank),
            picker,
            thinking: config.thinking_delay(),
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Analyze a user line. Blank input yields `Ok(None)` and is never classified.
    pub fn analyze(&mut self, text: &str) -> Result<Option<ResponsePlan>, AppError> {
        let start = Instant::now();

        let utterance = Utterance::new(text.trim());
        if utterance.is_blank() {
            debug!("Ignoring blank utterance");
            return Ok(None);
        }

        // 1. Find the category trigger
        let hit = self.classifier.detect(&utterance);

        // 2. Pick category content
        let result = self.classifier.resolve(hit.as_ref(), &mut self.picker)?;

        // 3. Lay out the timed emissions
        let emissions = self.sequencer.sequence(&result, &mut self.picker)?;

        let plan = ResponsePlan {
            utterance: utterance.raw().to_string(),
            category: result.category(),
            matched_trigger: hit.map(|h| h.trigger),
            thinking: self.thinking,
            emissions,
            processing_time_us: start.elapsed().as_micros() as u64,
            timestamp: Utc::now(),
        };

        info!("{}", plan.summary());
        Ok(Some(plan))
    }

    /// Category decision only, without picking any content.
    pub fn category(&self, text: &str) -> Category {
        self.classifier.category(text)
    }
}
