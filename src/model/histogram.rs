use serde::Serialize;

/// Equal-width histogram of scores over [0,1], split by ground-truth class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreHistogram {
    pub edges: Vec<f64>,
    pub negatives: Vec<usize>,
    pub positives: Vec<usize>,
}

impl ScoreHistogram {
    pub fn build(scores: &[f64], labels: &[u8], bins: usize) -> Self {
        let bins = bins.max(1);
        let edges = (0..=bins).map(|i| i as f64 / bins as f64).collect();
        let mut negatives = vec![0usize; bins];
        let mut positives = vec![0usize; bins];

        for (&score, &label) in scores.iter().zip(labels.iter()) {
            let idx = bin_index(score, bins);
            if label == 1 {
                positives[idx] += 1;
            } else {
                negatives[idx] += 1;
            }
        }

        Self {
            edges,
            negatives,
            positives,
        }
    }

    pub fn n_bins(&self) -> usize {
        self.negatives.len()
    }

    pub fn total(&self) -> usize {
        self.negatives.iter().sum::<usize>() + self.positives.iter().sum::<usize>()
    }

    pub fn max_count(&self) -> usize {
        self.negatives
            .iter()
            .zip(self.positives.iter())
            .map(|(n, p)| n + p)
            .max()
            .unwrap_or(0)
    }
}

pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

fn bin_index(score: f64, bins: usize) -> usize {
    let idx = (clip01(score) * bins as f64).floor() as usize;
    idx.min(bins - 1)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/histogram.rs"]
mod tests;
