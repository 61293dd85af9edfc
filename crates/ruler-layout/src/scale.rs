//! Scale selection
//!
//! Picks the coarsest scale whose major ticks leave enough room for their
//! labels. The label width is estimated from the number of digits in the
//! largest value the ruler can show rather than measured per label, so a
//! horizontal ruler picks the same scale as an accompanying vertical one.

use crate::metric::RulerMetric;

/// Estimated pixel size of the widest label for `max_size`
fn label_text_size(max_size: f64, digit_height: f64) -> f64 {
    let widest = format!("{}", max_size.ceil() as i64);
    widest.len() as f64 * digit_height + 1.0
}

/// Select the index into `metric.scales` to lay ticks out with.
///
/// Returns the smallest index whose major-tick spacing in pixels exceeds
/// twice the estimated label size, which guarantees adjacent major labels
/// never overlap. Falls back to the coarsest scale when even that is too
/// dense.
///
/// `increment` is pixels per value unit; its sign is ignored so reversed
/// ranges select the same scale as forward ones.
pub fn select_scale(metric: &RulerMetric, max_size: f64, increment: f64, digit_height: f64) -> usize {
    let text_size = label_text_size(max_size, digit_height);

    for (index, scale) in metric.scales.iter().enumerate() {
        if scale * increment.abs() > 2.0 * text_size {
            return index;
        }
    }

    metric.scales.len() - 1
}
