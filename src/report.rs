//! Human-readable rendering of the estimated transition probabilities.

use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use crate::error::Result;
use crate::estimator::TransitionEstimator;

impl<S: Clone + Eq + Hash + Ord + Display> TransitionEstimator<S> {
    /// Writes a summary of the estimated process to `out`.
    ///
    /// The report lists the sorted state space and the episode total,
    /// then one block per state that was observed as an origin, with
    /// each observed destination's probability (three decimals) and raw
    /// count. States never seen as an origin are skipped from the
    /// per-state breakdown but still appear in the state-space line.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> Result<()> {
        let states = self.sorted_states();

        let labels: Vec<String> = states.iter().map(|s| format!("'{}'", s)).collect();
        writeln!(out, "State Space: [{}]", labels.join(", "))?;
        writeln!(out, "Total Episodes: {}", self.episode_count())?;
        writeln!(out)?;
        writeln!(out, "Transition Probabilities:")?;
        writeln!(out, "{}", "-".repeat(60))?;

        for from in &states {
            let observed = self.origin_count(from);
            if observed == 0 {
                continue;
            }

            writeln!(out)?;
            writeln!(out, "From '{}' (observed {} times):", from, observed)?;

            for to in &states {
                let count = self.transition_count(from, to);
                if count == 0 {
                    continue;
                }
                let prob = self.transition_probability(from, to);
                writeln!(out, "  → '{}': {:.3} ({} times)", to, prob, count)?;
            }
        }

        Ok(())
    }

    /// Prints the summary to standard output.
    pub fn print_summary(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_summary(&mut stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use crate::TransitionEstimator;

    #[test]
    fn test_summary_layout() {
        let mut estimator = TransitionEstimator::new();
        estimator.add_episode(vec!["Home", "Coffee", "Chat"]);

        let mut out = Vec::new();
        estimator.write_summary(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        let expected = concat!(
            "State Space: ['Chat', 'Coffee', 'Home']\n",
            "Total Episodes: 1\n",
            "\n",
            "Transition Probabilities:\n",
            "------------------------------------------------------------\n",
            "\n",
            "From 'Coffee' (observed 1 times):\n",
            "  → 'Chat': 1.000 (1 times)\n",
            "\n",
            "From 'Home' (observed 1 times):\n",
            "  → 'Coffee': 1.000 (1 times)\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_summary_skips_states_never_seen_as_origin() {
        let mut estimator = TransitionEstimator::new();
        estimator.add_episode(vec!["Coffee", "Coffee", "Chat"]);

        let mut out = Vec::new();
        estimator.write_summary(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        // Chat is a destination only: listed in the state space, absent
        // from the breakdown.
        assert!(rendered.starts_with("State Space: ['Chat', 'Coffee']\n"));
        assert!(rendered.contains("From 'Coffee' (observed 2 times):"));
        assert!(!rendered.contains("From 'Chat'"));
        assert!(rendered.contains("  → 'Chat': 0.500 (1 times)"));
        assert!(rendered.contains("  → 'Coffee': 0.500 (1 times)"));
    }

    #[test]
    fn test_summary_of_empty_estimator() {
        let estimator: TransitionEstimator<&str> = TransitionEstimator::new();

        let mut out = Vec::new();
        estimator.write_summary(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        let expected = concat!(
            "State Space: []\n",
            "Total Episodes: 0\n",
            "\n",
            "Transition Probabilities:\n",
            "------------------------------------------------------------\n",
        );
        assert_eq!(rendered, expected);
    }
}
