//! Brain Module Tests
//!
//! Classification priority, reply selection and the timed emission layout
//! produced by the analyzer.

use crate::brain::{
    BrainAnalyzer, Category, ClassificationResult, Classifier, EmissionAction, Picker, Sequencer,
    TriggerMatch, Utterance, GROUNDING_EXERCISE, THOUGHT_CHALLENGING_EXERCISE,
};
use crate::config::ChatConfig;
use crate::content::ContentBank;
use crate::models::CardKind;
use std::collections::HashSet;
use std::sync::Arc;

fn bank() -> Arc<ContentBank> {
    Arc::new(ContentBank::builtin())
}

fn classifier(mode: TriggerMatch) -> Classifier {
    Classifier::new(bank(), mode).unwrap()
}

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn test_crisis_wins_over_other_triggers() {
        let classifier = classifier(TriggerMatch::Substring);
        let mut picker = Picker::seeded(1);

        let inputs = vec![
            "I feel so anxious I want to die",
            "I'm depressed and thinking about suicide",
            "So stressed and lonely I could hurt myself",
            "NOT WORTH LIVING anymore, so sad",
        ];

        for input in inputs {
            let result = classifier.classify(input, &mut picker).unwrap();
            assert_eq!(result.category(), Category::Crisis, "Expected Crisis for '{}'", input);
        }
    }

    #[test]
    fn test_every_crisis_trigger_is_detected() {
        let bank = bank();
        let classifier = Classifier::new(bank.clone(), TriggerMatch::Substring).unwrap();

        for trigger in &bank.crisis.triggers {
            let text = format!("lately I {} and I don't know", trigger.to_uppercase());
            assert_eq!(classifier.category(&text), Category::Crisis, "Expected Crisis for '{}'", text);
        }
    }

    #[test]
    fn test_anxiety_uses_grounding_exercise() {
        let classifier = classifier(TriggerMatch::Substring);
        let mut picker = Picker::seeded(2);

        for input in ["I'm really anxious today", "Work is so much STRESS", "I had a panic attack"] {
            let result = classifier.classify(input, &mut picker).unwrap();
            let ClassificationResult::Anxiety(guidance) = result else {
                panic!("Expected Anxiety for '{}'", input);
            };
            assert_eq!(guidance.exercise.name, GROUNDING_EXERCISE);
        }
    }

    #[test]
    fn test_anxiety_wins_over_depression() {
        let classifier = classifier(TriggerMatch::Substring);
        assert_eq!(classifier.category("I'm sad and worried"), Category::Anxiety);
    }

    #[test]
    fn test_depression_uses_thought_challenging() {
        let classifier = classifier(TriggerMatch::Substring);
        let mut picker = Picker::seeded(3);

        let result = classifier.classify("I feel so empty and tired", &mut picker).unwrap();
        let ClassificationResult::Depression(guidance) = result else {
            panic!("Expected Depression");
        };
        assert_eq!(guidance.exercise.name, THOUGHT_CHALLENGING_EXERCISE);

        let bank = bank();
        assert!(bank.depression.responses.contains(&guidance.response));
        assert!(bank.depression.follow_ups.contains(&guidance.follow_up));
    }

    #[test]
    fn test_general_fallback() {
        let classifier = classifier(TriggerMatch::Substring);
        let mut picker = Picker::seeded(4);

        for input in ["I want to talk about my day", "What's the weather like?", "hello"] {
            let result = classifier.classify(input, &mut picker).unwrap();
            assert_eq!(result, ClassificationResult::General, "Expected General for '{}'", input);
        }
    }

    #[test]
    fn test_substring_mode_matches_inside_words() {
        let classifier = classifier(TriggerMatch::Substring);

        assert_eq!(classifier.category("this homework is hard"), Category::Depression);
        assert_eq!(classifier.category("my hardware broke"), Category::Depression);
    }

    #[test]
    fn test_word_boundary_mode() {
        let classifier = classifier(TriggerMatch::WordBoundary);
        assert_eq!(classifier.mode(), TriggerMatch::WordBoundary);

        assert_eq!(classifier.category("this homework is hard"), Category::Depression);
        assert_eq!(classifier.category("my hardware broke"), Category::General);
        assert_eq!(classifier.category("I want to end it all"), Category::Crisis);
    }

    #[test]
    fn test_detect_reports_trigger() {
        let classifier = classifier(TriggerMatch::Substring);
        let hit = classifier.detect(&Utterance::new("So Overwhelmed right now")).unwrap();

        assert_eq!(hit.category, Category::Anxiety);
        assert_eq!(hit.trigger, "overwhelmed");
        assert!(classifier.detect(&Utterance::new("nice day")).is_none());
    }
}

#[cfg(test)]
mod picker_tests {
    use super::*;

    #[test]
    fn test_single_element_always_returned() {
        let mut picker = Picker::from_entropy();
        let items = ["only"];

        for _ in 0..100 {
            assert_eq!(picker.pick(&items), Some(&"only"));
        }
    }

    #[test]
    fn test_every_element_eventually_returned() {
        let mut picker = Picker::seeded(99);
        let items = ["a", "b", "c", "d", "e"];

        let seen: HashSet<&str> = (0..1000).filter_map(|_| picker.pick(&items).copied()).collect();
        assert_eq!(seen.len(), items.len());
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let mut picker = Picker::seeded(0);
        let items: Vec<String> = Vec::new();

        assert!(picker.pick(&items).is_none());
        assert!(picker.pick_required(&items, "test pool").is_err());
    }
}

#[cfg(test)]
mod sequencer_tests {
    use super::*;

    #[test]
    fn test_crisis_card_always_lists_hotlines() {
        let bank = bank();
        let classifier = Classifier::new(bank.clone(), TriggerMatch::Substring).unwrap();
        let sequencer = Sequencer::new(bank);

        for seed in 0..20 {
            let mut picker = Picker::seeded(seed);
            let result = classifier.classify("thinking about suicide", &mut picker).unwrap();
            let emissions = sequencer.sequence(&result, &mut picker).unwrap();

            let card = emissions
                .iter()
                .find_map(|e| match &e.action {
                    EmissionAction::EmitCard { card, .. } => Some(card),
                    _ => None,
                })
                .unwrap();
            assert_eq!(card.kind, CardKind::Crisis);
            assert!(card.contains("988"));
            assert!(card.contains("911"));
        }
    }

    #[test]
    fn test_general_card_shows_three_strategies() {
        let bank = bank();
        let sequencer = Sequencer::new(bank.clone());
        let mut picker = Picker::seeded(8);

        let emissions = sequencer.sequence(&ClassificationResult::General, &mut picker).unwrap();
        let card = emissions[3].action.content();
        let card = card.as_card().unwrap();

        assert_eq!(card.kind, CardKind::CopingStrategies);
        assert_eq!(card.items.len(), 3);
        let source = if card.title == "Immediate Relief Strategies" {
            &bank.coping.immediate
        } else {
            &bank.coping.daily
        };
        assert_eq!(card.items[..], source[..3]);
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    fn analyzer(mode: TriggerMatch) -> BrainAnalyzer {
        let config = ChatConfig {
            rng_seed: Some(5),
            trigger_match: mode,
            ..ChatConfig::default()
        };
        BrainAnalyzer::new(bank(), &config).unwrap()
    }

    #[test]
    fn test_plan_delays_per_category() {
        let mut analyzer = analyzer(TriggerMatch::Substring);

        let cases = vec![
            ("I'm really anxious today", Category::Anxiety, vec![0.0, 2.0, 1.0, 0.0, 0.0]),
            ("I feel so empty and tired", Category::Depression, vec![0.0, 2.0, 1.0, 0.0, 0.0]),
            ("I want to talk about my day", Category::General, vec![0.0, 1.5, 3.0, 0.0, 0.0]),
            ("I want to end it all", Category::Crisis, vec![0.0, 3.0]),
        ];

        for (input, category, delays) in cases {
            let plan = analyzer.analyze(input).unwrap().unwrap();
            assert_eq!(plan.category, category, "Wrong category for '{}'", input);
            let actual: Vec<f64> = plan.emissions.iter().map(|e| e.delay.as_units()).collect();
            assert_eq!(actual, delays, "Wrong delays for '{}'", input);
            assert_eq!(plan.thinking.as_units(), 1.5);
        }
    }

    #[test]
    fn test_blank_input_is_not_classified() {
        let mut analyzer = analyzer(TriggerMatch::Substring);

        assert!(analyzer.analyze("").unwrap().is_none());
        assert!(analyzer.analyze("  \t\n ").unwrap().is_none());
    }

    #[test]
    fn test_same_seed_same_replies() {
        let mut first = analyzer(TriggerMatch::Substring);
        let mut second = analyzer(TriggerMatch::Substring);

        for input in ["I'm nervous", "I feel down", "tell me something"] {
            let a = first.analyze(input).unwrap().unwrap();
            let b = second.analyze(input).unwrap().unwrap();
            assert_eq!(a.emissions, b.emissions);
        }
    }

    #[test]
    fn test_category_lookup_matches_analysis() {
        let mut analyzer = analyzer(TriggerMatch::WordBoundary);
        assert_eq!(analyzer.classifier().mode(), TriggerMatch::WordBoundary);

        for input in ["I feel hopeless", "so nervous", "I might die", "hardware question"] {
            let category = analyzer.category(input);
            let plan = analyzer.analyze(input).unwrap().unwrap();
            assert_eq!(category, plan.category, "Mismatch for '{}'", input);
        }
        assert_eq!(analyzer.category("hardware question"), Category::General);
    }

    #[test]
    fn test_plan_records_trigger() {
        let mut analyzer = analyzer(TriggerMatch::WordBoundary);

        let plan = analyzer.analyze("I feel hopeless").unwrap().unwrap();
        assert_eq!(plan.matched_trigger.as_deref(), Some("hopeless"));

        let plan = analyzer.analyze("hardware question").unwrap().unwrap();
        assert_eq!(plan.category, Category::General);
        assert!(plan.matched_trigger.is_none());
    }
}
