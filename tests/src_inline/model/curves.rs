use crate::model::curves::{pr_curve, roc_curve};

#[test]
fn test_roc_perfect_and_reversed_ranking() {
    let labels = vec![1, 1, 0, 0];

    let perfect = roc_curve(&[0.9, 0.8, 0.2, 0.1], &labels).unwrap();
    assert!((perfect.auc - 1.0).abs() < 1e-12);
    assert_eq!(perfect.points.len(), 5);
    assert!(perfect.points[0].threshold.is_infinite());
    let last = perfect.points.last().unwrap();
    assert_eq!((last.fpr, last.tpr), (1.0, 1.0));

    let reversed = roc_curve(&[0.1, 0.2, 0.8, 0.9], &labels).unwrap();
    assert!(reversed.auc.abs() < 1e-12);
}

#[test]
fn test_roc_ties_collapse_to_diagonal() {
    let roc = roc_curve(&[0.5, 0.5, 0.5, 0.5], &[1, 0, 1, 0]).unwrap();
    assert_eq!(roc.points.len(), 2);
    assert!((roc.auc - 0.5).abs() < 1e-12);
}

#[test]
fn test_roc_requires_both_classes() {
    assert!(roc_curve(&[0.1, 0.9], &[1, 1]).is_none());
    assert!(roc_curve(&[0.1, 0.9], &[0, 0]).is_none());
    assert!(roc_curve(&[], &[]).is_none());
}

#[test]
fn test_pr_average_precision() {
    let perfect = pr_curve(&[0.9, 0.8, 0.2, 0.1], &[1, 1, 0, 0]).unwrap();
    assert!((perfect.average_precision - 1.0).abs() < 1e-12);

    // ranks: pos, neg, pos -> AP = 0.5 * 1.0 + 0.5 * (2/3)
    let mixed = pr_curve(&[0.9, 0.6, 0.3], &[1, 0, 1]).unwrap();
    let expected = 0.5 + 0.5 * (2.0 / 3.0);
    assert!((mixed.average_precision - expected).abs() < 1e-12);
    assert_eq!(mixed.points[0].precision, 1.0);
    assert_eq!(mixed.points[0].recall, 0.0);

    assert!(pr_curve(&[0.3, 0.4], &[0, 0]).is_none());
}
