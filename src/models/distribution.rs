//! Chart-ready distribution series models.

use serde::{Deserialize, Serialize};

/// One category bucket in a distribution series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSlice {
    /// The category label (e.g., "present", "approved", "productive").
    pub category: String,
    /// The non-negative count (or floored percentage) for the category.
    pub count: u32,
}

/// A named mapping from category label to count, ready for rendering.
///
/// Categories with a zero count are omitted from `slices`; the aggregator
/// still computes them so callers can validate totals.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{DistributionSeries, DistributionSlice};
///
/// let series = DistributionSeries {
///     name: "attendance".to_string(),
///     slices: vec![DistributionSlice { category: "present".to_string(), count: 20 }],
/// };
/// assert_eq!(series.count_for("present"), 20);
/// assert_eq!(series.count_for("absent"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSeries {
    /// The name of the series.
    pub name: String,
    /// The non-zero category buckets, in fixed category order.
    pub slices: Vec<DistributionSlice>,
}

impl DistributionSeries {
    /// Builds a series from `(label, count)` pairs, dropping zero counts.
    pub fn from_counts<I>(name: &str, counts: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, u32)>,
    {
        Self {
            name: name.to_string(),
            slices: counts
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(category, count)| DistributionSlice {
                    category: category.to_string(),
                    count,
                })
                .collect(),
        }
    }

    /// Returns the count for a category, zero if the category was dropped.
    pub fn count_for(&self, category: &str) -> u32 {
        self.slices
            .iter()
            .find(|slice| slice.category == category)
            .map(|slice| slice.count)
            .unwrap_or(0)
    }

    /// Returns the sum of all emitted counts.
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|slice| slice.count).sum()
    }
}
