//! Bounded, time-ordered usage history

use super::MetricResult;
use crate::error::{ModelError, Result};

/// Append `sample` to `history`, keeping at most `limit` of the newest samples.
///
/// Samples must arrive in non-decreasing timestamp order; an older sample is
/// rejected and `history` is left untouched. A `limit` of zero retains nothing.
pub fn push_sample(history: &mut Vec<MetricResult>, sample: MetricResult, limit: usize) -> Result<()> {
    if let Some(last) = history.last() {
        if sample.timestamp < last.timestamp {
            return Err(ModelError::OutOfOrderSample {
                previous: last.timestamp,
                sample: sample.timestamp,
            });
        }
    }

    history.push(sample);

    // Evict oldest entries past the bound
    if history.len() > limit {
        let excess = history.len() - limit;
        history.drain(..excess);
    }

    Ok(())
}
