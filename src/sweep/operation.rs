//! Filter-then-transform operation over a collection.

use crate::logging::{debug, warn};

use super::config::SweepConfig;

/// What a sweep produced: survivors transformed, rejects counted, failures kept by index.
#[derive(Debug)]
pub struct SweepReport<U, E> {
    /// Transformed values of the elements that passed the predicate, in input order.
    pub values: Vec<U>,
    /// Count of elements rejected by the predicate.
    pub filtered_count: usize,
    /// Errors recorded when not failing fast: (element index, error).
    pub errors: Vec<(usize, E)>,
}

impl<U, E> SweepReport<U, E> {
    /// Report for a sweep that has not visited anything yet.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            filtered_count: 0,
            errors: Vec::new(),
        }
    }

    /// Whether any element failed while the sweep kept going.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of elements the sweep looked at.
    pub fn visited(&self) -> usize {
        self.values.len() + self.filtered_count + self.errors.len()
    }

    /// One-line tally of mapped, filtered and failed elements.
    pub fn summary(&self) -> String {
        format!(
            "Processed: {} mapped, {} filtered out, {} errors",
            self.values.len(),
            self.filtered_count,
            self.errors.len()
        )
    }
}

impl<U, E> Default for SweepReport<U, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Select elements with a predicate and transform the survivors, in one pass.
///
/// ```
/// use collection_closures::{Record, Sweep, parse_horde};
///
/// let horde = parse_horde("A:brainless, B, C:brainless").unwrap();
/// let report = Sweep::new(&horde)
///     .execute(|z| Ok::<_, ()>(z.is_brainless()), |z| Ok(z.name().to_string()))
///     .unwrap();
/// assert_eq!(report.values, vec!["A", "C"]);
/// assert_eq!(report.filtered_count, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Sweep<'a, T> {
    items: &'a [T],
    config: SweepConfig,
}

impl<'a, T> Sweep<'a, T> {
    /// Create a sweep with the default configuration.
    pub fn new(items: &'a [T]) -> Self {
        Self::with_config(items, SweepConfig::default())
    }

    /// Create a sweep with an explicit configuration.
    pub fn with_config(items: &'a [T], config: SweepConfig) -> Self {
        Self { items, config }
    }

    /// Visit at most `limit` elements.
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    /// Choose between returning the first error and recording every error.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.fail_fast = fail_fast;
        self
    }

    /// Settings this sweep will run with.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Execute the sweep.
    ///
    /// When failing fast, the first error from either closure is returned
    /// unchanged. Otherwise the error is recorded with the element's index and
    /// the sweep moves on, so the result is always `Ok`.
    pub fn execute<U, E, P, F>(
        &self,
        mut predicate: P,
        mut transform: F,
    ) -> Result<SweepReport<U, E>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
        F: FnMut(&T) -> Result<U, E>,
    {
        let mut report = SweepReport::new();
        let limit = self.config.limit.unwrap_or(usize::MAX);

        debug!(
            len = self.items.len(),
            limit = ?self.config.limit,
            fail_fast = self.config.fail_fast,
            "starting sweep"
        );

        for (index, item) in self.items.iter().enumerate().take(limit) {
            let outcome = match predicate(item) {
                Ok(true) => transform(item).map(Some),
                Ok(false) => Ok(None),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(Some(value)) => report.values.push(value),
                Ok(None) => report.filtered_count += 1,
                Err(e) if self.config.fail_fast => {
                    debug!(index, "sweep stopped on error");
                    return Err(e);
                }
                Err(e) => {
                    warn!(index, "sweep recorded error");
                    report.errors.push((index, e));
                }
            }
        }

        debug!(summary = %report.summary(), "sweep finished");
        Ok(report)
    }
}
