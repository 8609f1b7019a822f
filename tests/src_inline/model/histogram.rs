use crate::model::histogram::{ScoreHistogram, clip01};

#[test]
fn test_histogram_bins_and_edges() {
    let scores = vec![0.0, 0.05, 0.15, 0.5, 0.95, 1.0];
    let labels = vec![0, 0, 1, 1, 0, 1];
    let h = ScoreHistogram::build(&scores, &labels, 10);

    assert_eq!(h.n_bins(), 10);
    assert_eq!(h.edges.len(), 11);
    assert_eq!(h.edges[0], 0.0);
    assert_eq!(h.edges[10], 1.0);
    assert_eq!(h.negatives[0], 2);
    assert_eq!(h.positives[1], 1);
    assert_eq!(h.positives[5], 1);
    assert_eq!(h.negatives[9], 1);
    assert_eq!(h.positives[9], 1);
    assert_eq!(h.total(), scores.len());
    assert_eq!(h.max_count(), 2);
}

#[test]
fn test_histogram_clamps_out_of_range() {
    let h = ScoreHistogram::build(&[-0.3, 1.7], &[0, 1], 4);
    assert_eq!(h.negatives[0], 1);
    assert_eq!(h.positives[3], 1);
    assert_eq!(clip01(-1.0), 0.0);
    assert_eq!(clip01(2.0), 1.0);
}

#[test]
fn test_histogram_zero_bins_becomes_one() {
    let h = ScoreHistogram::build(&[0.2, 0.8], &[0, 1], 0);
    assert_eq!(h.n_bins(), 1);
    assert_eq!(h.total(), 2);
}
