//! # Brain Module
//!
//! Scripted reply engine. Classifies a user line by trigger substrings and lays
//! out the timed bot replies for it.
//!
//! ## Components
//! - `classifier`: category detection with crisis priority
//! - `picker`: seedable uniform selection from content pools
//! - `sequencer`: category → ordered `(delay, action)` emissions
//! - `response_plan`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod classifier;
pub mod picker;
pub mod response_plan;
pub mod sequencer;

pub use analyzer::BrainAnalyzer;
pub use classifier::{
    Category, ClassificationResult, Classifier, Guidance, TriggerHit, TriggerMatch, Utterance,
    GROUNDING_EXERCISE, THOUGHT_CHALLENGING_EXERCISE,
};
pub use picker::Picker;
pub use response_plan::ResponsePlan;
pub use sequencer::{crisis_resources_card, Delay, Emission, EmissionAction, Sequencer, CRISIS_RESOURCES};
