//! Summaries produced by [`MetricsLogger::summarize`](super::MetricsLogger::summarize).
use std::{fmt, slice::Iter, vec::IntoIter};

/// Selects what [`MetricsLogger::summarize`](super::MetricsLogger::summarize)
/// reduces.
///
/// By default every registered attribute is summarized, in registration
/// order, over the values logged since the previous incremental summary.
///
/// ```rust
/// use rlkit_core::logger::SummaryQuery;
///
/// let query = SummaryQuery::default()
///     .attributes(["reward", "loss"])
///     .from_beginning(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryQuery {
    pub(super) attributes: Vec<String>,
    pub(super) from_beginning: bool,
}

impl SummaryQuery {
    /// Restricts the summary to the given attributes, in the given order.
    ///
    /// An empty list means every registered attribute.
    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// If `true`, reduces whole logs and leaves the incremental cursors as
    /// they are.
    pub fn from_beginning(mut self, v: bool) -> Self {
        self.from_beginning = v;
        self
    }
}

/// Ordered `(label, value)` pairs, one per attribute and reducer.
///
/// The [`Display`](fmt::Display) form joins `label=value` entries, with four
/// decimals, by `"; "`, e.g. `reward_mean=2.0000; reward_max=3.0000`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary(Vec<(String, f32)>);

impl Summary {
    pub(super) fn push(&mut self, label: String, value: f32) {
        self.0.push((label, value));
    }

    /// Returns the value with the given label.
    pub fn get(&self, label: &str) -> Option<f32> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    /// Returns an iterator over the pairs.
    pub fn iter(&self) -> Iter<'_, (String, f32)> {
        self.0.iter()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the summary has no pair.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw pairs.
    pub fn into_pairs(self) -> Vec<(String, f32)> {
        self.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}={:.4}", label, value)?;
        }
        Ok(())
    }
}

impl IntoIterator for Summary {
    type Item = (String, f32);
    type IntoIter = IntoIter<(String, f32)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let mut summary = Summary::default();
        assert_eq!(summary.to_string(), "");

        summary.push("reward_mean".to_string(), 2.0);
        summary.push("loss_max".to_string(), 0.123456);
        assert_eq!(summary.to_string(), "reward_mean=2.0000; loss_max=0.1235");
        assert_eq!(summary.get("loss_max"), Some(0.123456));
        assert_eq!(summary.get("loss_min"), None);
    }

    #[test]
    fn test_display_nan() {
        let mut summary = Summary::default();
        summary.push("reward_mean".to_string(), f32::NAN);
        assert_eq!(summary.to_string(), "reward_mean=NaN");
    }
}
