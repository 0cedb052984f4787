// Greedy, single-pass phrase grouping.
//
// Each phrase is compared against every existing group: the number of
// qualifying word pairs it shares with each member is summed and divided by
// the group size. The phrase joins the group with the highest average, as
// long as that average reaches `min_similar_words`; otherwise it founds a new
// group at the end of the list.
//
// Assignment is final. Groups are never merged or split, so the result
// depends on input order. Cost is roughly N^2 phrase comparisons, each of
// them words^2 word scores.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::keywords::extract_keywords;
use crate::config::GroupingConfig;
use crate::similarity::pairs;

/// A group of similar phrases and the keywords they were grouped on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Union of the keyword sets of every member, sorted
    pub keywords: BTreeSet<String>,
    /// Member phrases in the order they were assigned, case preserved
    pub phrases: Vec<String>,
}

impl Cluster {
    fn founded_by(phrase: &str) -> Self {
        Self {
            keywords: extract_keywords(phrase),
            phrases: vec![phrase.to_string()],
        }
    }

    fn absorb(&mut self, phrase: &str) {
        self.keywords.extend(extract_keywords(phrase));
        self.phrases.push(phrase.to_string());
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false for clusters produced by the engine.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Where a phrase ended up after [`Grouping::assign`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Assignment {
    /// Joined the existing cluster at this index with this average score
    Joined { cluster: usize, average: f64 },
    /// Started a new cluster at this index
    Founded { cluster: usize },
}

impl Assignment {
    pub fn cluster(&self) -> usize {
        match *self {
            Assignment::Joined { cluster, .. } | Assignment::Founded { cluster } => cluster,
        }
    }
}

/// Groups phrases with an immutable configuration.
///
/// The engine holds no cluster state itself; every call to
/// [`GroupingEngine::group_phrases`] (or [`GroupingEngine::start`]) gets its
/// own.
#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    config: GroupingConfig,
}

impl GroupingEngine {
    pub fn new(config: GroupingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Qualifying word pairs between two phrases under this engine's threshold.
    pub fn count_similar_pairs(&self, phrase_a: &str, phrase_b: &str) -> usize {
        pairs::count_similar_pairs(phrase_a, phrase_b, self.config.similarity_threshold())
    }

    /// Whether two phrases are similar enough to be grouped on their own.
    pub fn are_similar(&self, phrase_a: &str, phrase_b: &str) -> bool {
        pairs::are_similar(phrase_a, phrase_b, &self.config)
    }

    /// Begin an incremental grouping run.
    pub fn start(&self) -> Grouping<'_> {
        Grouping {
            engine: self,
            clusters: Vec::new(),
        }
    }

    /// Group an ordered list of phrases.
    ///
    /// Callers are expected to have removed blank lines and exact duplicates.
    /// Clusters come back in the order their first phrase was seen.
    pub fn group_phrases<S: AsRef<str>>(&self, phrases: &[S]) -> Vec<Cluster> {
        let mut grouping = self.start();
        for phrase in phrases {
            grouping.assign(phrase.as_ref());
        }
        grouping.finish()
    }

    /// Average number of qualifying word pairs between `phrase` and each
    /// member of `cluster`.
    fn cluster_average(&self, phrase: &str, cluster: &Cluster) -> f64 {
        let total: usize = cluster
            .phrases
            .iter()
            .map(|member| self.count_similar_pairs(phrase, member))
            .sum();
        // Clusters always have at least one member
        total as f64 / cluster.len() as f64
    }
}

/// Cluster state for one grouping run. Only ever grows.
#[derive(Debug)]
pub struct Grouping<'a> {
    engine: &'a GroupingEngine,
    clusters: Vec<Cluster>,
}

impl Grouping<'_> {
    /// Assign one phrase to the best qualifying cluster, or found a new one.
    pub fn assign(&mut self, phrase: &str) -> Assignment {
        let min_similar_words = self.engine.config.min_similar_words() as f64;

        let mut best: Option<(usize, f64)> = None;
        for (idx, cluster) in self.clusters.iter().enumerate() {
            let average = self.engine.cluster_average(phrase, cluster);
            if average < min_similar_words {
                continue;
            }
            // Strict > so the earliest cluster wins a tie
            if best.map_or(true, |(_, best_average)| average > best_average) {
                best = Some((idx, average));
            }
        }

        let assignment = match best {
            Some((cluster, average)) => {
                self.clusters[cluster].absorb(phrase);
                Assignment::Joined { cluster, average }
            }
            None => {
                self.clusters.push(Cluster::founded_by(phrase));
                Assignment::Founded {
                    cluster: self.clusters.len() - 1,
                }
            }
        };

        debug!(phrase, ?assignment, "Assigned phrase");
        assignment
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// End the run and hand back the clusters.
    pub fn finish(self) -> Vec<Cluster> {
        let phrases: usize = self.clusters.iter().map(Cluster::len).sum();
        info!(
            phrases,
            clusters = self.clusters.len(),
            threshold = self.engine.config.similarity_threshold(),
            min_similar_words = self.engine.config.min_similar_words(),
            "Grouping complete"
        );
        self.clusters
    }
}
