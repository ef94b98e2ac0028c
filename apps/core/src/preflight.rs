//! Preflight Check System
//!
//! Verifies the content bank and configuration before a conversation starts.
//! A failed critical check is fatal: the conversation refuses to start.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use crate::brain::{GROUNDING_EXERCISE, THOUGHT_CHALLENGING_EXERCISE};
use crate::config::ChatConfig;
use crate::content::{CategoryContent, ContentBank};
use crate::error::AppError;

/// Result of a single check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub details: Option<String>,
}

impl CheckResult {
    fn pass(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.to_string(),
            details: None,
        }
    }

    fn fail(name: &str, message: &str, details: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.to_string(),
            details,
        }
    }
}

/// Complete preflight check report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreflightReport {
    pub all_passed: bool,
    pub checks: Vec<CheckResult>,
    pub summary: String,
}

impl PreflightReport {
    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// `Ok(())` when everything passed, otherwise a config error listing the failures.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.all_passed {
            Ok(())
        } else {
            Err(AppError::Config(self.summary))
        }
    }
}

/// Performs all preflight checks and returns a report
pub fn run_preflight_checks(bank: &ContentBank, config: &ChatConfig) -> PreflightReport {
    info!("Running preflight checks");

    let checks = vec![
        check_config(config),
        check_category("crisis", &bank.crisis, false),
        check_category("anxiety", &bank.anxiety, true),
        check_category("depression", &bank.depression, true),
        check_exercises(bank),
        check_pool("validation_pool", &bank.validation),
        check_pool("supportive_pool", &bank.supportive),
        check_pool("coping_immediate", &bank.coping.immediate),
        check_pool("coping_daily", &bank.coping.daily),
        check_greeting(bank),
    ];

    let all_passed = checks.iter().all(|c| c.passed);
    let summary = if all_passed {
        "All checks passed. Content ready.".to_string()
    } else {
        let failed: Vec<String> = checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| format!("{}: {}", c.name, c.message))
            .collect();
        format!("Preflight failed: {}", failed.join("; "))
    };

    if all_passed {
        info!("{}", summary);
    } else {
        warn!("{}", summary);
    }

    PreflightReport {
        all_passed,
        checks,
        summary,
    }
}

fn check_config(config: &ChatConfig) -> CheckResult {
    match config.validate() {
        Ok(()) => CheckResult::pass("config", "Configuration valid"),
        Err(e) => CheckResult::fail("config", "Configuration invalid", Some(e.to_string())),
    }
}

fn check_category(name: &str, content: &CategoryContent, needs_follow_ups: bool) -> CheckResult {
    if let Err(e) = content.validate() {
        return CheckResult::fail(name, "Triggers or responses missing", Some(e.to_string()));
    }
    if needs_follow_ups && content.follow_ups.is_empty() {
        return CheckResult::fail(name, "No follow-up prompts", None);
    }
    if let Some(bad) = content
        .triggers
        .iter()
        .find(|t| t.trim().is_empty() || t.to_lowercase() != **t)
    {
        return CheckResult::fail(
            name,
            "Triggers must be lowercase and non-blank",
            Some(format!("offending trigger: {:?}", bad)),
        );
    }
    if content.responses.iter().any(|r| r.trim().is_empty()) {
        return CheckResult::fail(name, "Blank response line", None);
    }
    CheckResult::pass(
        name,
        &format!(
            "{} triggers, {} responses, {} follow-ups",
            content.triggers.len(),
            content.responses.len(),
            content.follow_ups.len()
        ),
    )
}

fn check_exercises(bank: &ContentBank) -> CheckResult {
    if let Some(invalid) = bank.exercises.iter().find(|e| e.validate().is_err()) {
        return CheckResult::fail(
            "exercises",
            "Exercise with empty fields",
            Some(format!("exercise: {:?}", invalid.name)),
        );
    }
    let missing: Vec<&str> = [GROUNDING_EXERCISE, THOUGHT_CHALLENGING_EXERCISE]
        .into_iter()
        .filter(|name| bank.exercise(name).is_none())
        .collect();
    if missing.is_empty() {
        CheckResult::pass("exercises", &format!("{} exercises", bank.exercises.len()))
    } else {
        CheckResult::fail(
            "exercises",
            "Required exercises missing",
            Some(missing.join(", ")),
        )
    }
}

fn check_pool(name: &str, pool: &[String]) -> CheckResult {
    if pool.is_empty() {
        CheckResult::fail(name, "Pool is empty", None)
    } else if pool.iter().any(|s| s.trim().is_empty()) {
        CheckResult::fail(name, "Pool contains a blank line", None)
    } else {
        CheckResult::pass(name, &format!("{} entries", pool.len()))
    }
}

fn check_greeting(bank: &ContentBank) -> CheckResult {
    if bank.greeting.trim().is_empty() {
        CheckResult::fail("greeting", "Greeting is blank", None)
    } else {
        CheckResult::pass("greeting", "Greeting present")
    }
}
