//! Report assembly and rendering.

use std::fmt::Write as _;

use credence_core::traits::CreditScorer;
use credence_core::types::{Assessment, FactorAnalysis, ImprovementSuggestion, ScoreBreakdown};
use serde::Serialize;

/// Everything derived from one assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub assessment: Assessment,
    pub percentile: u8,
    pub factors: Vec<FactorAnalysis>,
    pub suggestions: Vec<ImprovementSuggestion>,
    pub breakdown: ScoreBreakdown,
}

impl Report {
    pub fn build(scorer: &dyn CreditScorer, assessment: Assessment) -> Self {
        Self {
            percentile: scorer.percentile(assessment.final_score),
            factors: scorer.analyze(&assessment),
            suggestions: scorer.suggest(&assessment),
            breakdown: scorer.breakdown(&assessment),
            assessment,
        }
    }

    /// Human-readable multi-line rendering.
    pub fn render_text(&self) -> String {
        let a = &self.assessment;
        let mut out = String::new();

        let _ = writeln!(out, "Subject:    {}", a.subject_id);
        let _ = writeln!(
            out,
            "Score:      {} / {} ({} risk, top {}%)",
            a.final_score,
            self.breakdown.max_possible,
            a.risk_level,
            100u8.saturating_sub(self.percentile)
        );
        let _ = writeln!(out, "Base/bonus: {} + {}", a.base_score, a.bonus_points);
        let _ = writeln!(out, "Percentile: {}", self.percentile);

        let _ = writeln!(out, "\nFactors:");
        for (f, b) in self.factors.iter().zip(&self.breakdown.factors) {
            let _ = writeln!(
                out,
                "  {:<18} {:>5.1}  x{:<4}  +{:<3} pts  {:<9}  {}",
                f.name, f.raw_score, f.weight, b.contribution_points, f.rating, f.description
            );
        }

        if self.suggestions.is_empty() {
            let _ = writeln!(out, "\nNo improvements needed.");
        } else {
            let _ = writeln!(out, "\nSuggestions:");
            for s in &self.suggestions {
                let _ = writeln!(
                    out,
                    "  [{:<6}] {} (+{} pts): {}",
                    s.priority, s.name, s.potential_gain, s.suggestion
                );
            }
        }

        out
    }
}

/// A batch record that failed to parse or validate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub index: usize,
    pub subject_id: Option<String>,
    pub reason: String,
}

/// Result of scoring a batch of metrics records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub accepted: Vec<Report>,
    pub rejected: Vec<Rejection>,
}

impl BatchReport {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for report in &self.accepted {
            let a = &report.assessment;
            let _ = writeln!(
                out,
                "{}  {}  {:<6}  p{}",
                a.subject_id, a.final_score, a.risk_level, report.percentile
            );
        }
        for r in &self.rejected {
            let _ = writeln!(
                out,
                "#{} {}  rejected: {}",
                r.index,
                r.subject_id.as_deref().unwrap_or("<unknown>"),
                r.reason
            );
        }
        let _ = writeln!(
            out,
            "\n{} scored, {} rejected",
            self.accepted.len(),
            self.rejected.len()
        );
        out
    }
}
