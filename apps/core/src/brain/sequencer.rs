//! Response sequencing.
//!
//! Turns a classification into an ordered list of emissions. Each emission
//! carries the delay to wait after the previous one, expressed in abstract
//! units; the scheduler converts units to wall-clock time.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::classifier::{ClassificationResult, Guidance};
use super::picker::Picker;
use crate::content::ContentBank;
use crate::error::AppError;
use crate::models::{Card, CardKind, Message, MessageContent, Sender};

const CRISIS_TITLE: &str = "Immediate Support Available";
const CRISIS_CLOSING: &str = "Please know that you are not alone, and these feelings can change. While you're getting professional help, I'm here to talk if you need support. Your life has value and meaning.";

/// Literal crisis contacts. Never picked at random.
pub const CRISIS_RESOURCES: &[&str] = &[
    "National Suicide Prevention Lifeline: 988",
    "Crisis Text Line: Text HOME to 741741",
    "Emergency Services: 911",
];

const EXERCISE_INTRO: &str = "Here's a therapeutic exercise that might help:";
const EXERCISE_CLOSING: &str =
    "Take your time with this. There's no pressure to do it perfectly. How does that feel to try?";

const COPING_INTRO: &str = "Here are some coping strategies that many people find helpful:";
const COPING_CLOSING: &str = "Which of these resonates with you, or would you like to try one together?";
const IMMEDIATE_TITLE: &str = "Immediate Relief Strategies";
const DAILY_TITLE: &str = "Daily Wellness Practices";
const COPING_ITEMS_SHOWN: usize = 3;

const FOLLOW_UP_DELAY: Delay = Delay(2.0);
const OFFER_LEAD_IN: Delay = Delay(1.0);
const SUPPORTIVE_DELAY: Delay = Delay(1.5);
const COPING_OFFER_DELAY: Delay = Delay(2.0);
const CRISIS_CLOSING_DELAY: Delay = Delay(3.0);

/// A relative delay in abstract units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delay(f64);

impl Delay {
    pub const ZERO: Delay = Delay(0.0);

    /// Negative and non-finite values clamp to zero.
    pub fn units(units: f64) -> Self {
        if units.is_finite() && units > 0.0 {
            Delay(units)
        } else {
            Delay::ZERO
        }
    }

    pub fn as_units(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Wall-clock duration for a given unit length.
    pub fn to_duration(self, unit: Duration) -> Duration {
        unit.mul_f64(self.0)
    }
}

impl std::ops::Add for Delay {
    type Output = Delay;

    fn add(self, rhs: Delay) -> Delay {
        Delay(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Delay {
    fn sum<I: Iterator<Item = Delay>>(iter: I) -> Delay {
        iter.fold(Delay::ZERO, |acc, d| acc + d)
    }
}

/// What to show when an emission fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EmissionAction {
    EmitText { sender: Sender, text: String },
    EmitCard { sender: Sender, card: Card },
}

impl EmissionAction {
    pub fn sender(&self) -> Sender {
        match self {
            EmissionAction::EmitText { sender, .. } | EmissionAction::EmitCard { sender, .. } => *sender,
        }
    }

    pub fn content(&self) -> MessageContent {
        match self {
            EmissionAction::EmitText { text, .. } => MessageContent::text(text.clone()),
            EmissionAction::EmitCard { card, .. } => card.clone().into(),
        }
    }

    pub fn into_message(self) -> Message {
        match self {
            EmissionAction::EmitText { sender, text } => Message::new(MessageContent::Text { text }, sender),
            EmissionAction::EmitCard { sender, card } => Message::new(card.into(), sender),
        }
    }
}

/// One timed unit of bot output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emission {
    /// Wait after the previous emission (or after the thinking indicator).
    pub delay: Delay,
    pub action: EmissionAction,
}

impl Emission {
    fn text(delay: Delay, text: impl Into<String>) -> Self {
        Self {
            delay,
            action: EmissionAction::EmitText {
                sender: Sender::Bot,
                text: text.into(),
            },
        }
    }

    fn card(delay: Delay, card: Card) -> Self {
        Self {
            delay,
            action: EmissionAction::EmitCard {
                sender: Sender::Bot,
                card,
            },
        }
    }
}

/// The crisis resource card, optionally headed by a chosen response.
pub fn crisis_resources_card(response: Option<&str>) -> Card {
    Card {
        kind: CardKind::Crisis,
        title: CRISIS_TITLE.to_string(),
        body: response.map(|r| vec![r.to_string()]).unwrap_or_default(),
        items: CRISIS_RESOURCES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Builds emission sequences from classification results
pub struct Sequencer {
    bank: Arc<ContentBank>,
}

impl Sequencer {
    pub fn new(bank: Arc<ContentBank>) -> Self {
        Self { bank }
    }

    pub fn sequence(
        &self,
        result: &ClassificationResult,
        picker: &mut Picker,
    ) -> Result<Vec<Emission>, AppError> {
        match result {
            ClassificationResult::Crisis { response } => Ok(vec![
                Emission::card(Delay::ZERO, crisis_resources_card(Some(response))),
                Emission::text(CRISIS_CLOSING_DELAY, CRISIS_CLOSING),
            ]),
            ClassificationResult::Anxiety(guidance) | ClassificationResult::Depression(guidance) => {
                Ok(self.guided(guidance))
            }
            ClassificationResult::General => self.general(picker),
        }
    }

    fn guided(&self, guidance: &Guidance) -> Vec<Emission> {
        let exercise = &guidance.exercise;
        let card = Card {
            kind: CardKind::Exercise,
            title: exercise.name.clone(),
            body: vec![exercise.description.clone(), exercise.steps.clone()],
            items: Vec::new(),
        };

        vec![
            Emission::text(Delay::ZERO, guidance.response.clone()),
            Emission::text(FOLLOW_UP_DELAY, guidance.follow_up.clone()),
            Emission::text(OFFER_LEAD_IN, EXERCISE_INTRO),
            Emission::card(Delay::ZERO, card),
            Emission::text(Delay::ZERO, EXERCISE_CLOSING),
        ]
    }

    fn general(&self, picker: &mut Picker) -> Result<Vec<Emission>, AppError> {
        let validation = picker.pick_required(&self.bank.validation, "validation sentences")?;
        let supportive = picker.pick_required(&self.bank.supportive, "supportive sentences")?;

        let lists = [
            (IMMEDIATE_TITLE, &self.bank.coping.immediate),
            (DAILY_TITLE, &self.bank.coping.daily),
        ];
        let (title, list) = picker.pick_required(&lists, "coping strategy lists")?;
        if list.is_empty() {
            return Err(AppError::Internal(format!("coping list '{}' is empty", title)));
        }

        let card = Card {
            kind: CardKind::CopingStrategies,
            title: title.to_string(),
            body: Vec::new(),
            items: list.iter().take(COPING_ITEMS_SHOWN).cloned().collect(),
        };

        Ok(vec![
            Emission::text(Delay::ZERO, validation.clone()),
            Emission::text(SUPPORTIVE_DELAY, supportive.clone()),
            Emission::text(COPING_OFFER_DELAY + OFFER_LEAD_IN, COPING_INTRO),
            Emission::card(Delay::ZERO, card),
            Emission::text(Delay::ZERO, COPING_CLOSING),
        ])
    }
}
