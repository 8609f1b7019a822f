use crate::report::SummaryData;

/// Pretty JSON for `summary.json` and `--format json`. Undefined curve
/// scores serialize as `null`.
pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}
