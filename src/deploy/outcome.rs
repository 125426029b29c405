use std::collections::BTreeMap;
use std::fmt;

use console::style;

/// Terminal state of one template after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOutcome {
    /// Copied to its target, or would have been in a dry run.
    Deployed,
    /// No target was found, the operator declined, or the target already existed.
    Skipped,
    /// The copy itself failed.
    Failed,
}

impl TemplateOutcome {
    pub fn is_success(self) -> bool {
        self == TemplateOutcome::Deployed
    }
}

impl fmt::Display for TemplateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TemplateOutcome::Deployed => "deployed",
            TemplateOutcome::Skipped => "skipped",
            TemplateOutcome::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// One outcome per discovered template, keyed by template key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeploymentResults {
    outcomes: BTreeMap<String, TemplateOutcome>,
}

impl DeploymentResults {
    pub fn record(&mut self, key: impl Into<String>, outcome: TemplateOutcome) {
        self.outcomes.insert(key.into(), outcome);
    }

    pub fn get(&self, key: &str) -> Option<TemplateOutcome> {
        self.outcomes.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TemplateOutcome)> {
        self.outcomes.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Template key to whether it was deployed.
    pub fn success_map(&self) -> BTreeMap<String, bool> {
        self.outcomes
            .iter()
            .map(|(k, v)| (k.clone(), v.is_success()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successful(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_success()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// True when nothing was skipped or failed. Vacuously true for an empty run.
    pub fn all_succeeded(&self) -> bool {
        self.successful() == self.total()
    }

    pub fn print_summary(&self) {
        println!("\n{} Deployment summary", style("==>").cyan().bold());

        for (key, outcome) in self.iter() {
            let label = match outcome {
                TemplateOutcome::Deployed => style(outcome.to_string()).green(),
                TemplateOutcome::Skipped => style(outcome.to_string()).yellow(),
                TemplateOutcome::Failed => style(outcome.to_string()).red(),
            };
            println!("  {label:<10} {key}");
        }

        let total = self.total();
        let successful = self.successful();
        println!(
            "\n{} Successful: {successful}/{total}",
            style("✓").green().bold()
        );
        if successful < total {
            println!(
                "{} Failed/Skipped: {}/{total}",
                style("✗").red().bold(),
                total - successful
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_success_map() {
        let mut results = DeploymentResults::default();
        results.record("hf-spaces", TemplateOutcome::Deployed);
        results.record("hf-models", TemplateOutcome::Skipped);
        results.record("for-gh-docs-base", TemplateOutcome::Failed);

        assert_eq!(results.total(), 3);
        assert_eq!(results.successful(), 1);
        assert!(!results.all_succeeded());

        let map = results.success_map();
        assert!(map["hf-spaces"]);
        assert!(!map["hf-models"]);
        assert!(!map["for-gh-docs-base"]);
    }

    #[test]
    fn test_empty_results_all_succeeded() {
        let results = DeploymentResults::default();
        assert!(results.is_empty());
        assert!(results.all_succeeded());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(TemplateOutcome::Deployed.to_string(), "deployed");
        assert_eq!(TemplateOutcome::Skipped.to_string(), "skipped");
        assert_eq!(TemplateOutcome::Failed.to_string(), "failed");
    }
}
