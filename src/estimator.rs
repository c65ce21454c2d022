//! This module provides an empirical estimator of Markov-chain transition
//! probabilities. Observed trajectories (episodes) are folded into
//! transition and origin counts, from which maximum-likelihood estimates
//! are derived on demand.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use ndarray::Array2;
use rand::Rng;

/// Estimates transition probabilities of a Markov process from observed
/// episodes.
///
/// States are opaque labels; the estimator only relies on equality and
/// hashing to accumulate counts (and on ordering for the sorted views).
/// The accumulator is append-only: counts never decrease and there is no
/// reset or merge.
///
/// # Examples
///
/// ```
/// use markov_estimator::TransitionEstimator;
///
/// let mut estimator = TransitionEstimator::new();
/// estimator.add_episode(vec!["Sunny", "Rainy", "Sunny"]);
/// estimator.add_episode(vec!["Sunny", "Sunny"]);
///
/// assert_eq!(estimator.transition_probability(&"Sunny", &"Rainy"), 0.5);
/// assert_eq!(estimator.transition_probability(&"Rainy", &"Sunny"), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct TransitionEstimator<S> {
    states: HashSet<S>,
    transition_counts: HashMap<S, HashMap<S, usize>>,
    state_counts: HashMap<S, usize>,
    episodes: Vec<Vec<S>>,
}

/// Per-state summary produced by [`TransitionEstimator::state_statistics`].
#[derive(Debug, Clone, PartialEq)]
pub struct StateStatistics<S: Eq + Hash> {
    /// Times the state was observed as the origin of a transition.
    pub total_occurrences: usize,
    /// Observed destinations only; never contains a zero count.
    pub transitions: HashMap<S, TransitionStat>,
}

/// Count and maximum-likelihood probability of one observed transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionStat {
    pub count: usize,
    pub probability: f64,
}

impl<S> Default for TransitionEstimator<S> {
    fn default() -> Self {
        Self {
            states: HashSet::new(),
            transition_counts: HashMap::new(),
            state_counts: HashMap::new(),
            episodes: Vec::new(),
        }
    }
}

impl<S: Clone + Eq + Hash> TransitionEstimator<S> {
    /// Creates an empty estimator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an episode (ordered sequence of states) to the estimator.
    ///
    /// Every adjacent pair in the episode counts as one transition from
    /// the earlier state to the later one; self-loops are ordinary
    /// transitions. An episode with fewer than two states carries no
    /// transitions and is dropped entirely, leaving the accumulator
    /// untouched.
    pub fn add_episode(&mut self, episode: Vec<S>) {
        if episode.len() < 2 {
            log::debug!(
                "skipping episode of length {}: a transition needs two states",
                episode.len()
            );
            return;
        }

        for pair in episode.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);

            self.states.insert(from.clone());
            self.states.insert(to.clone());

            *self
                .transition_counts
                .entry(from.clone())
                .or_default()
                .entry(to.clone())
                .or_insert(0) += 1;
            *self.state_counts.entry(from.clone()).or_insert(0) += 1;
        }

        log::trace!("ingested episode with {} transitions", episode.len() - 1);
        self.episodes.push(episode);
    }

    /// Returns the estimated probability of transitioning from `from`
    /// to `to`.
    ///
    /// This is the maximum-likelihood estimate: the observed count of
    /// `from → to` divided by the number of times `from` was observed as
    /// an origin. If `from` was never observed as an origin the result
    /// is 0.0 for any `to`, as a defined fallback rather than an error.
    pub fn transition_probability(&self, from: &S, to: &S) -> f64 {
        let total = self.origin_count(from);
        if total == 0 {
            return 0.0;
        }

        self.transition_count(from, to) as f64 / total as f64
    }

    /// Observed count of the `from → to` transition, zero if never seen.
    pub fn transition_count(&self, from: &S, to: &S) -> usize {
        self.transition_counts
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0)
    }

    /// Times `state` was observed as the origin of a transition.
    pub fn origin_count(&self, state: &S) -> usize {
        self.state_counts.get(state).copied().unwrap_or(0)
    }

    /// All distinct states seen as a source or destination so far.
    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    /// The retained episodes, in ingestion order.
    pub fn episodes(&self) -> &[Vec<S>] {
        &self.episodes
    }

    /// Number of retained episodes.
    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    /// Builds the full transition probability matrix over the current
    /// state set.
    ///
    /// The result is dense: every `(from, to)` pair over the known
    /// states gets an entry, including unobserved ones at 0.0. Rows for
    /// states with at least one outgoing transition sum to 1.0 up to
    /// floating-point rounding. The matrix is recomputed on every call
    /// since the accumulator can grow between calls.
    pub fn transition_matrix(&self) -> HashMap<S, HashMap<S, f64>> {
        let mut matrix = HashMap::with_capacity(self.states.len());

        for from in &self.states {
            let mut row = HashMap::with_capacity(self.states.len());
            for to in &self.states {
                row.insert(to.clone(), self.transition_probability(from, to));
            }
            matrix.insert(from.clone(), row);
        }

        matrix
    }

    /// Per-state counts and probabilities, keeping only observed
    /// destinations (unlike the dense [`transition_matrix`]).
    ///
    /// [`transition_matrix`]: TransitionEstimator::transition_matrix
    pub fn state_statistics(&self) -> HashMap<S, StateStatistics<S>> {
        let mut stats = HashMap::with_capacity(self.states.len());

        for state in &self.states {
            let mut transitions = HashMap::new();
            if let Some(row) = self.transition_counts.get(state) {
                for (next, &count) in row {
                    transitions.insert(
                        next.clone(),
                        TransitionStat {
                            count,
                            probability: self.transition_probability(state, next),
                        },
                    );
                }
            }

            stats.insert(
                state.clone(),
                StateStatistics {
                    total_occurrences: self.origin_count(state),
                    transitions,
                },
            );
        }

        stats
    }

    /// Most probable successor of `from`, with its estimated
    /// probability. Returns `None` if `from` was never observed as an
    /// origin; ties are broken arbitrarily.
    pub fn most_likely_next(&self, from: &S) -> Option<(&S, f64)> {
        let total = self.origin_count(from);
        if total == 0 {
            return None;
        }
        let row = self.transition_counts.get(from)?;

        let mut best_next = None;
        let mut best_count = 0;
        for (next, &count) in row {
            if count > best_count {
                best_count = count;
                best_next = Some(next);
            }
        }

        best_next.map(|next| (next, best_count as f64 / total as f64))
    }

    /// Draws a successor of `from` at random, weighted by the observed
    /// transition counts. Returns `None` if `from` was never observed
    /// as an origin.
    pub fn sample_next<R: Rng>(&self, from: &S, rng: &mut R) -> Option<S> {
        let total = self.origin_count(from);
        if total == 0 {
            return None;
        }
        let row = self.transition_counts.get(from)?;

        let mut draw = rng.gen_range(0..total);
        for (next, &count) in row {
            if draw < count {
                return Some(next.clone());
            }
            draw -= count;
        }

        // Row counts sum to `total`, so the loop above always returns.
        None
    }
}

impl<S: Clone + Eq + Hash + Ord> TransitionEstimator<S> {
    /// The current state set in sorted order.
    pub fn sorted_states(&self) -> Vec<S> {
        let mut states: Vec<S> = self.states.iter().cloned().collect();
        states.sort();
        states
    }

    /// Builds the transition probability matrix as a dense `ndarray`
    /// array, together with the sorted state index it is keyed by:
    /// entry `[i, j]` is the probability of moving from `states[i]` to
    /// `states[j]`.
    pub fn transition_matrix_dense(&self) -> (Vec<S>, Array2<f64>) {
        let states = self.sorted_states();
        let n = states.len();
        let mut matrix = Array2::zeros((n, n));

        for (i, from) in states.iter().enumerate() {
            for (j, to) in states.iter().enumerate() {
                matrix[[i, j]] = self.transition_probability(from, to);
            }
        }

        (states, matrix)
    }
}
