use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::model::confusion::ConfusionCounts;
use crate::model::curves::{PrCurve, RocCurve};
use crate::model::histogram::ScoreHistogram;
use crate::model::result::EvaluationResult;
use crate::pipeline::stage2_evaluate::Stage2Output;
use crate::report::SummaryData;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// What goes to stdout.
pub fn render_stdout(summary: &SummaryData, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_report_text(summary)),
        ReportFormat::Json => render_summary_json(summary),
    }
}

pub fn write_reports(
    result: &EvaluationResult,
    summary: &SummaryData,
    stage2: &Stage2Output,
    out_dir: &Path,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_text(&out_dir.join("report.txt"), &render_report_text(summary))?;
    write_text(&out_dir.join("summary.json"), &render_summary_json(summary)?)?;
    write_samples_tsv(result, &stage2.predicted, &out_dir.join("predictions.tsv"))?;
    write_confusion_tsv(&stage2.confusion, &out_dir.join("confusion.tsv"))?;
    write_histogram_tsv(&stage2.histogram, &out_dir.join("histogram.tsv"))?;

    // Curves are undefined for single-class inputs; their files are then header-only.
    write_roc_tsv(stage2.roc.as_ref(), &out_dir.join("roc.tsv"))?;
    write_pr_tsv(stage2.pr.as_ref(), &out_dir.join("pr.tsv"))?;

    info!("wrote reports to {}", out_dir.display());
    Ok(())
}

fn write_samples_tsv(
    result: &EvaluationResult,
    predicted: &[u8],
    path: &Path,
) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "index\tscore\tlabel\tpredicted")?;
    for (i, ((score, label), pred)) in result
        .predictions()
        .iter()
        .zip(result.labels())
        .zip(predicted)
        .enumerate()
    {
        writeln!(w, "{i}\t{score:.6}\t{label}\t{pred}")?;
    }
    w.flush()
}

fn write_confusion_tsv(c: &ConfusionCounts, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "actual\tpredicted_0\tpredicted_1")?;
    writeln!(w, "0\t{}\t{}", c.tn, c.fp)?;
    writeln!(w, "1\t{}\t{}", c.fn_, c.tp)?;
    w.flush()
}

fn write_roc_tsv(roc: Option<&RocCurve>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "threshold\tfpr\ttpr")?;
    if let Some(roc) = roc {
        for p in &roc.points {
            writeln!(w, "{:.6}\t{:.6}\t{:.6}", p.threshold, p.fpr, p.tpr)?;
        }
    }
    w.flush()
}

fn write_pr_tsv(pr: Option<&PrCurve>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "threshold\tprecision\trecall")?;
    if let Some(pr) = pr {
        for p in &pr.points {
            writeln!(w, "{:.6}\t{:.6}\t{:.6}", p.threshold, p.precision, p.recall)?;
        }
    }
    w.flush()
}

fn write_histogram_tsv(h: &ScoreHistogram, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "bin_start\tbin_end\tnegatives\tpositives")?;
    for i in 0..h.n_bins() {
        writeln!(
            w,
            "{:.6}\t{:.6}\t{}\t{}",
            h.edges[i],
            h.edges[i + 1],
            h.negatives[i],
            h.positives[i]
        )?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
