use crate::workflow::config::ScenarioConfig;
use anyhow::Context;
use dilemmacore::analysis::{evaluate, Decision, Evaluation};
use dilemmacore::telemetry::{LogManager, MetricsRecorder};
use std::collections::HashMap;
use std::sync::Arc;

/// Decision counts over a batch, with the scenarios that failed validation.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub decisions: HashMap<Decision, usize>,
    pub rejected: Vec<String>,
}

impl BatchSummary {
    pub fn count(&self, decision: Decision) -> usize {
        self.decisions.get(&decision).copied().unwrap_or(0)
    }

    pub fn evaluated(&self) -> usize {
        self.decisions.values().sum()
    }
}

#[derive(Clone)]
pub struct Runner {
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(metrics: Arc<MetricsRecorder>) -> Self {
        Self { metrics }
    }

    pub fn execute(&self, config: &ScenarioConfig) -> anyhow::Result<Evaluation> {
        let logger = LogManager::with_target("planner");
        let params = match config.to_params() {
            Ok(params) => params,
            Err(err) => {
                self.metrics.record_rejection();
                logger.reject(&format!("{}: {:#}", config.label(), err));
                return Err(err).with_context(|| format!("scenario '{}'", config.label()));
            }
        };

        let evaluation = evaluate(&params);
        self.metrics.record_evaluation();
        logger.record(&format!(
            "{} -> {:?}",
            config.label(),
            evaluation.assessment.decision
        ));
        Ok(evaluation)
    }

    /// Evaluates every scenario; invalid ones are counted, not fatal.
    pub fn execute_batch(&self, scenarios: &[ScenarioConfig]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for scenario in scenarios {
            match self.execute(scenario) {
                Ok(evaluation) => {
                    *summary
                        .decisions
                        .entry(evaluation.assessment.decision)
                        .or_insert(0) += 1;
                }
                Err(_) => summary.rejected.push(scenario.label().to_string()),
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> (Runner, Arc<MetricsRecorder>) {
        let metrics = Arc::new(MetricsRecorder::new());
        (Runner::new(metrics.clone()), metrics)
    }

    #[test]
    fn runner_evaluates_valid_scenario() {
        let (runner, metrics) = runner();
        let cfg = ScenarioConfig::from_args(40.0, 12.0, 2.0, -3.0, 3.0, 54.0, 72.0);
        let evaluation = runner.execute(&cfg).unwrap();
        assert_eq!(evaluation.assessment.decision, Decision::OptionZone);
        assert_eq!(metrics.snapshot(), (1, 0));
    }

    #[test]
    fn runner_counts_rejections_in_batch() {
        let (runner, metrics) = runner();
        let valid = ScenarioConfig::from_args(10.0, 12.0, 2.0, -3.0, 3.0, 54.0, 72.0);
        let mut invalid = valid.clone();
        invalid.name = Some("too far".into());
        invalid.distance = 500.0;

        let summary = runner.execute_batch(&[valid.clone(), invalid, valid]);
        assert_eq!(summary.evaluated(), 2);
        assert_eq!(summary.count(Decision::MustGo), 2);
        assert_eq!(summary.rejected, vec!["too far".to_string()]);
        assert_eq!(metrics.snapshot(), (2, 1));
    }
}
