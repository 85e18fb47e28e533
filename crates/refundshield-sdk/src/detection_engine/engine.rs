//! Core DetectionEngine implementation

use crate::classifier::classify;
use crate::recommendations;
use crate::rules::{RuleContext, RuleEvaluator};
use refundshield_core::validator::{is_legitimate_bank, is_valid_indian_phone, is_valid_upi};
use refundshield_core::{AnalysisResult, AnalysisSummary, PatternStore, ScamReport};
use tracing::debug;

/// Stateless scam detector
///
/// Holds the pattern store and the ordered rule list; both are read-only after
/// construction, so one engine can serve any number of concurrent callers.
pub struct DetectionEngine {
    store: PatternStore,
    evaluator: RuleEvaluator,
}

impl DetectionEngine {
    /// Engine with the built-in rules over the given pattern store
    pub fn new(store: PatternStore) -> Self {
        Self::with_evaluator(store, RuleEvaluator::new())
    }

    pub(crate) fn with_evaluator(store: PatternStore, evaluator: RuleEvaluator) -> Self {
        Self { store, evaluator }
    }

    /// Pattern store used by this engine
    pub fn patterns(&self) -> &PatternStore {
        &self.store
    }

    /// Ids of the rules in evaluation order
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.evaluator.rule_ids()
    }

    /// Analyse one report
    pub fn analyze(&self, report: &ScamReport) -> AnalysisResult {
        let ctx = RuleContext::new(report, &self.store);
        let evaluation = self.evaluator.evaluate(&ctx);

        let risk_level = classify(evaluation.raw_score);
        let recommendations = recommendations::generate(risk_level, &evaluation.red_flags);

        let analysis = AnalysisSummary {
            platform: ctx.platform.to_string(),
            phone_verified: ctx.phone.map(is_valid_indian_phone).unwrap_or(false),
            upi_verified: ctx.upi_id.map(is_valid_upi),
            bank_recognized: ctx
                .bank_name
                .map(|name| is_legitimate_bank(name, &self.store.banks)),
        };

        debug!(
            "Analysed report for platform '{}': score={} level={} rules={:?}",
            analysis.platform,
            evaluation.raw_score,
            risk_level,
            evaluation.triggered_rules
        );

        AnalysisResult {
            risk_score: evaluation.score(),
            risk_level,
            risk_color: risk_level.color().to_string(),
            risk_message: risk_level.message().to_string(),
            red_flags: evaluation.red_flags,
            warnings: evaluation.warnings,
            recommendations,
            analysis,
        }
    }
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new(PatternStore::default())
    }
}
