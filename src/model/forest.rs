//! Isolation forest. Anomalies separate from the reference bulk in fewer
//! random splits, so they end up with shorter average path lengths.
//!
//! Scoring convention follows the common library semantics: `score_samples`
//! is the negated isolation score, always in [-1, 0), lower ⇒ more anomalous.
//! The binary decision boundary is calibrated at fit time from the
//! contamination fraction and is independent of any threshold a caller might
//! apply to the raw score.

use crate::config::ModelConfig;
use ndarray::ArrayView2;
use rand::rngs::StdRng;
use rand::Rng;

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

pub struct IsolationForest {
    trees: Vec<IsolationTree>,
    sample_size: usize,
    /// Contamination quantile of the training scores; `score_samples` below
    /// this is classified anomalous.
    offset: f64,
}

impl IsolationForest {
    /// Build the ensemble from the reference matrix and calibrate the
    /// decision offset. Rows are subsampled without replacement per tree.
    pub fn fit(config: &ModelConfig, data: ArrayView2<'_, f64>, rng: &mut StdRng) -> Self {
        let n_rows = data.nrows();
        let n_features = data.ncols();
        let sample_size = config.sample_size.min(n_rows).max(2);
        let max_depth = (sample_size as f64).log2().ceil() as usize;

        let mut trees = Vec::with_capacity(config.num_trees);
        for _ in 0..config.num_trees {
            let rows = rand::seq::index::sample(rng, n_rows, sample_size).into_vec();
            trees.push(IsolationTree::build(data, &rows, n_features, max_depth, rng));
        }

        let mut forest = Self {
            trees,
            sample_size,
            offset: 0.0,
        };

        let mut train_scores: Vec<f64> = (0..n_rows)
            .map(|i| forest.score_samples(&data.row(i).to_vec()))
            .collect();
        train_scores.sort_by(f64::total_cmp);
        forest.offset = quantile(&train_scores, config.contamination);
        forest
    }

    /// Negated isolation score: `-2^(-E[h(x)] / c(sample_size))`.
    /// Pure function of the fitted trees; no randomness at scoring time.
    pub fn score_samples(&self, sample: &[f64]) -> f64 {
        let total: f64 = self
            .trees
            .iter()
            .map(|tree| tree.path_length(sample))
            .sum();
        let mean_path = total / self.trees.len() as f64;
        -(2.0_f64.powf(-mean_path / average_path_length(self.sample_size)))
    }

    /// Binary verdict from the fit-time calibrated boundary.
    pub fn predict(&self, sample: &[f64]) -> bool {
        self.score_samples(sample) < self.offset
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

/// Expected path length of an unsuccessful BST search over n nodes, c(n).
/// Normalizes tree depths so scores are comparable across sample sizes.
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

/// Linear-interpolated quantile of an ascending-sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let w = pos - lo as f64;
        sorted[lo] * (1.0 - w) + sorted[hi] * w
    }
}

struct IsolationTree {
    root: Node,
}

enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        size: usize,
    },
}

impl IsolationTree {
    fn build(
        data: ArrayView2<'_, f64>,
        rows: &[usize],
        n_features: usize,
        max_depth: usize,
        rng: &mut StdRng,
    ) -> Self {
        Self {
            root: build_node(data, rows, n_features, 0, max_depth, rng),
        }
    }

    fn path_length(&self, sample: &[f64]) -> f64 {
        let mut node = &self.root;
        let mut depth = 0usize;
        loop {
            match node {
                Node::Leaf { size } => {
                    return depth as f64 + average_path_length(*size);
                }
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = sample.get(*feature).copied().unwrap_or(0.0);
                    node = if value < *threshold { left } else { right };
                    depth += 1;
                }
            }
        }
    }
}

fn build_node(
    data: ArrayView2<'_, f64>,
    rows: &[usize],
    n_features: usize,
    depth: usize,
    max_depth: usize,
    rng: &mut StdRng,
) -> Node {
    if depth >= max_depth || rows.len() <= 1 {
        return Node::Leaf { size: rows.len() };
    }

    let feature = rng.gen_range(0..n_features);
    let mut min_val = f64::INFINITY;
    let mut max_val = f64::NEG_INFINITY;
    for &r in rows {
        let v = data[[r, feature]];
        min_val = min_val.min(v);
        max_val = max_val.max(v);
    }

    // Degenerate column in this partition: nothing left to split on.
    if !(max_val > min_val) {
        return Node::Leaf { size: rows.len() };
    }

    let threshold = rng.gen_range(min_val..max_val);
    let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
        .iter()
        .copied()
        .partition(|&r| data[[r, feature]] < threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(build_node(data, &left_rows, n_features, depth + 1, max_depth, rng)),
        right: Box::new(build_node(data, &right_rows, n_features, depth + 1, max_depth, rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use rand::SeedableRng;

    fn fit_reference(seed: u64) -> (IsolationForest, Array2<f64>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = Array2::from_shape_fn((500, 4), |_| {
            rng.sample::<f64, _>(rand_distr::StandardNormal)
        });
        let config = ModelConfig {
            num_trees: 50,
            sample_size: 128,
            contamination: 0.1,
            seed,
        };
        let forest = IsolationForest::fit(&config, data.view(), &mut rng);
        (forest, data)
    }

    #[test]
    fn scores_are_negative_unit_interval() {
        let (forest, data) = fit_reference(7);
        for i in 0..data.nrows() {
            let s = forest.score_samples(&data.row(i).to_vec());
            assert!(s >= -1.0 && s < 0.0, "score out of range: {s}");
        }
    }

    #[test]
    fn outlier_scores_lower_than_inlier() {
        let (forest, _) = fit_reference(7);
        let inlier = forest.score_samples(&[0.0, 0.0, 0.0, 0.0]);
        let outlier = forest.score_samples(&[50.0, -50.0, 50.0, -50.0]);
        assert!(outlier < inlier, "outlier {outlier} vs inlier {inlier}");
    }

    #[test]
    fn far_outlier_is_predicted_anomalous() {
        let (forest, _) = fit_reference(7);
        assert!(forest.predict(&[100.0, 100.0, 100.0, 100.0]));
        assert!(!forest.predict(&[0.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn offset_flags_roughly_contamination_fraction_of_training() {
        let (forest, data) = fit_reference(11);
        let flagged = (0..data.nrows())
            .filter(|&i| forest.predict(&data.row(i).to_vec()))
            .count();
        let fraction = flagged as f64 / data.nrows() as f64;
        assert!(forest.offset() > -1.0 && forest.offset() < 0.0);
        assert!(
            (0.02..=0.2).contains(&fraction),
            "flagged fraction {fraction} far from configured 0.1"
        );
    }

    #[test]
    fn average_path_length_matches_known_values() {
        assert_eq!(average_path_length(0), 0.0);
        assert_eq!(average_path_length(1), 0.0);
        assert_eq!(average_path_length(2), 1.0);
        assert!(average_path_length(256) > average_path_length(32));
    }

    #[test]
    fn quantile_interpolates() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&v, 0.0), 1.0);
        assert_eq!(quantile(&v, 1.0), 5.0);
        assert_eq!(quantile(&v, 0.5), 3.0);
        assert!((quantile(&v, 0.1) - 1.4).abs() < 1e-12);
    }
}
