//! Ordered rule evaluation

use super::{builtin_rules, Rule, RuleContext, Signal};
use crate::classifier::cap_score;
use refundshield_core::RedFlag;
use tracing::debug;

/// Accumulated output of all rules for one report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Uncapped sum of all deltas
    pub raw_score: u32,
    pub red_flags: Vec<RedFlag>,
    pub warnings: Vec<String>,
    /// Ids of rules that fired, in order
    pub triggered_rules: Vec<&'static str>,
}

impl Evaluation {
    /// Score clamped to the 0-100 display range
    pub fn score(&self) -> u8 {
        cap_score(self.raw_score)
    }
}

/// Runs an ordered list of independent rules
pub struct RuleEvaluator {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEvaluator {
    /// Evaluator with the built-in rules
    pub fn new() -> Self {
        Self::with_rules(builtin_rules())
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Append a rule; it runs after all existing rules
    pub fn push(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and collect the results
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for rule in &self.rules {
            let Some(hit) = rule.evaluate(ctx) else {
                continue;
            };

            debug!("Rule {} triggered (+{})", rule.id(), hit.score);
            evaluation.raw_score = evaluation.raw_score.saturating_add(hit.score);
            evaluation.triggered_rules.push(rule.id());
            match hit.signal {
                Signal::Flag(flag) => evaluation.red_flags.push(flag),
                Signal::Warning(message) => evaluation.warnings.push(message),
            }
        }

        evaluation
    }
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
