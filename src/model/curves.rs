use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub threshold: f64,
    pub fpr: f64,
    pub tpr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocCurve {
    pub points: Vec<RocPoint>,
    pub auc: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrPoint {
    pub threshold: f64,
    pub precision: f64,
    pub recall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrCurve {
    pub points: Vec<PrPoint>,
    pub average_precision: f64,
}

/// Cumulative (threshold, tp, fp) at every distinct score, highest first.
/// Tied scores form a single step.
fn ranked_steps(scores: &[f64], labels: &[u8]) -> Vec<(f64, usize, usize)> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut steps = Vec::new();
    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0usize;
    while i < order.len() {
        let current = scores[order[i]];
        while i < order.len() && scores[order[i]] == current {
            if labels[order[i]] == 1 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        steps.push((current, tp, fp));
    }
    steps
}

/// `None` when either class is absent.
pub fn roc_curve(scores: &[f64], labels: &[u8]) -> Option<RocCurve> {
    let n_pos = labels.iter().filter(|&&l| l == 1).count();
    let n_neg = labels.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return None;
    }
    let p = n_pos as f64;
    let n = n_neg as f64;

    let mut points = vec![RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    }];
    for (threshold, tp, fp) in ranked_steps(scores, labels) {
        points.push(RocPoint {
            threshold,
            fpr: fp as f64 / n,
            tpr: tp as f64 / p,
        });
    }

    let auc = points
        .windows(2)
        .map(|w| (w[1].fpr - w[0].fpr) * (w[1].tpr + w[0].tpr) * 0.5)
        .sum();

    Some(RocCurve { points, auc })
}

/// `None` when there are no positive samples.
pub fn pr_curve(scores: &[f64], labels: &[u8]) -> Option<PrCurve> {
    let n_pos = labels.iter().filter(|&&l| l == 1).count();
    if n_pos == 0 {
        return None;
    }
    let p = n_pos as f64;

    let mut points = vec![PrPoint {
        threshold: f64::INFINITY,
        precision: 1.0,
        recall: 0.0,
    }];
    let mut average_precision = 0.0;
    let mut prev_recall = 0.0;
    for (threshold, tp, fp) in ranked_steps(scores, labels) {
        let precision = tp as f64 / (tp + fp) as f64;
        let recall = tp as f64 / p;
        average_precision += (recall - prev_recall) * precision;
        prev_recall = recall;
        points.push(PrPoint {
            threshold,
            precision,
            recall,
        });
    }

    Some(PrCurve {
        points,
        average_precision,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/curves.rs"]
mod tests;
