use crate::model::histogram::ScoreHistogram;
use crate::model::result::StoredMetrics;
use crate::report::{SummaryData, format_f64_4, format_opt_f64_4};

const HIST_BAR_WIDTH: usize = 30;

/// The four stored scalar metrics, one per line, 4 decimals.
pub fn render_stored_metrics(metrics: &StoredMetrics) -> String {
    let mut out = String::new();
    for (name, value) in metrics.named() {
        out.push_str(&format!("{name}: {}\n", format_f64_4(value)));
    }
    out
}

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Binary Classifier Evaluation Report\n");
    out.push_str("===================================\n\n");

    out.push_str(&format!("Source: {}\n", source_line(data)));
    out.push_str(&format!(
        "Samples: {} (positives: {}, negatives: {})\n\n",
        data.n_samples, data.n_positives, data.n_negatives
    ));

    out.push_str("1. Stored metrics\n");
    out.push_str(&render_stored_metrics(&data.stored));
    out.push('\n');

    out.push_str(&format!(
        "2. Recomputed at threshold {}\n",
        format_f64_4(data.threshold)
    ));
    let m = &data.recomputed;
    out.push_str(&format!("Accuracy: {}\n", format_f64_4(m.accuracy)));
    out.push_str(&format!("Precision: {}\n", format_f64_4(m.precision)));
    out.push_str(&format!("Recall: {}\n", format_f64_4(m.recall)));
    out.push_str(&format!("Specificity: {}\n", format_f64_4(m.specificity)));
    out.push_str(&format!("F1 Score: {}\n\n", format_f64_4(m.f1_score)));

    out.push_str("3. Confusion matrix (rows: actual, columns: predicted)\n");
    let c = &data.confusion;
    let width = [c.tn, c.fp, c.fn_, c.tp]
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        .max(3);
    out.push_str(&format!("{:>8} {:>width$} {:>width$}\n", "", "0", "1"));
    out.push_str(&format!("{:>8} {:>width$} {:>width$}\n", "0", c.tn, c.fp));
    out.push_str(&format!("{:>8} {:>width$} {:>width$}\n\n", "1", c.fn_, c.tp));

    out.push_str("4. Ranking quality\n");
    out.push_str(&format!("ROC AUC: {}\n", format_opt_f64_4(data.roc_auc)));
    out.push_str(&format!(
        "Average precision: {}\n\n",
        format_opt_f64_4(data.average_precision)
    ));

    out.push_str("5. Prediction distribution\n");
    out.push_str(&render_histogram(&data.histogram));

    if data.source.kind == "synthetic" {
        out.push_str("\nNote: synthetic placeholder data; stored metrics are not measurements.\n");
    }

    out
}

fn source_line(data: &SummaryData) -> String {
    match (data.source.format, data.source.seed) {
        (Some(format), _) => format!("{} ({format})", data.source.path),
        (None, Some(seed)) => format!(
            "synthetic, seed {seed} (artifact {} not found)",
            data.source.path
        ),
        (None, None) => data.source.path.clone(),
    }
}

fn render_histogram(h: &ScoreHistogram) -> String {
    let mut out = String::new();
    let max = h.max_count();
    let last = h.n_bins().saturating_sub(1);
    for i in 0..h.n_bins() {
        let close = if i == last { ']' } else { ')' };
        let neg = h.negatives[i];
        let pos = h.positives[i];
        out.push_str(&format!(
            "[{:.2}, {:.2}{close} neg {:>4} pos {:>4} |{}{}\n",
            h.edges[i],
            h.edges[i + 1],
            neg,
            pos,
            "-".repeat(bar_len(neg, max)),
            "+".repeat(bar_len(pos, max)),
        ));
    }
    out
}

fn bar_len(count: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    (count * HIST_BAR_WIDTH).div_ceil(max)
}
