pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Strict rule: a score equal to the threshold is class 0.
pub fn binarize(predictions: &[f64], threshold: f64) -> Vec<u8> {
    predictions
        .iter()
        .map(|&p| if p > threshold { 1 } else { 0 })
        .collect()
}

#[allow(dead_code)]
pub fn binarize_as_float(predictions: &[f64], threshold: f64) -> Vec<f64> {
    predictions
        .iter()
        .map(|&p| if p > threshold { 1.0 } else { 0.0 })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/threshold.rs"]
mod tests;
