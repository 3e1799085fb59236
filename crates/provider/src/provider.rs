//! Catalog of generated series addressed by configuration key and index.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use rnd_calendar::{Frequency, NaiveDate, Period};

use crate::batch::{Batch, compute_batch};
use crate::cache::{BatchCache, CacheStats};
use crate::error::{AddressingError, ProviderError};
use crate::key::{ChildRef, ConfigKey};
use crate::spec::ModelSpecification;

/// Identifier of this provider.
pub const SOURCE: &str = "RND";
/// Provider format version, bumped when generated values change.
pub const VERSION: &str = "20140527";
/// Year of the first period of every resolved series.
pub const ANCHOR_YEAR: i32 = 2000;

/// One resolved series with its display metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedSeries {
    /// Child display name, `"<configuration> - <index>"`.
    pub name: String,
    /// Index as text.
    pub node_name: String,
    /// Child moniker, `"<key>#<index>"`.
    pub moniker: String,
    pub frequency: Frequency,
    /// First period of the series.
    pub start: Period,
    pub values: Vec<f64>,
}

impl ResolvedSeries {
    /// Calendar date at which the first period starts.
    pub fn anchor_date(&self) -> Result<NaiveDate, ProviderError> {
        Ok(self.start.start_date()?)
    }
}

/// Serves the series of synthetic batches, generating each batch once.
///
/// A configuration is addressed by its [`ConfigKey`]; its children are the
/// indices `0..count`. The hierarchy is flat: children have no children.
///
/// # Example
///
/// ```
/// use rnd_provider::{ConfigKey, ModelSpecification, RandomProvider};
///
/// let provider = RandomProvider::new();
/// let spec = ModelSpecification::builder().count(3).length(24).build().unwrap();
/// let key = ConfigKey::encode(&spec);
///
/// let children = provider.child_refs(&key).unwrap();
/// assert_eq!(children.len(), 3);
/// let series = provider.resolve(&children[1]).unwrap();
/// assert_eq!(series.values.len(), 24);
/// assert_eq!(series.node_name, "1");
/// ```
#[derive(Debug, Default)]
pub struct RandomProvider {
    cache: BatchCache<ConfigKey, Batch>,
}

impl RandomProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> &'static str {
        SOURCE
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// Human readable name of the provider.
    pub fn provider_name(&self) -> &'static str {
        "Random Arima generator"
    }

    /// Returns the batch of `spec`, generating it on first request.
    pub fn batch(&self, spec: &ModelSpecification) -> Arc<Batch> {
        let key = ConfigKey::encode(spec);
        self.cache.get_or_compute(&key, || compute_batch(spec))
    }

    /// Lists the children of a configuration in ascending index order.
    pub fn child_refs(&self, key: &ConfigKey) -> Result<Vec<ChildRef>, ProviderError> {
        let spec = key.decode()?;
        let canonical = ConfigKey::encode(&spec);
        Ok((0..spec.count())
            .map(|index| ChildRef::new(canonical.clone(), index))
            .collect())
    }

    /// Children of a child. The hierarchy is flat, so this always fails.
    pub fn children_of_child(&self, _child: &ChildRef) -> Result<Vec<ChildRef>, ProviderError> {
        Err(AddressingError::NoHierarchy.into())
    }

    /// Resolves one child into its series.
    ///
    /// # Errors
    ///
    /// Fails when the key does not decode or when the index is not below the
    /// configuration's count.
    #[instrument(skip(self, child), fields(child = %child))]
    pub fn resolve(&self, child: &ChildRef) -> Result<ResolvedSeries, ProviderError> {
        let spec = child.source().decode()?;
        let index = child.index();
        if index >= spec.count() {
            return Err(AddressingError::IndexOutOfRange {
                index,
                count: spec.count(),
            }
            .into());
        }
        let batch = self.batch(&spec);
        let values = batch
            .get(index)
            .ok_or(AddressingError::IndexOutOfRange {
                index,
                count: batch.len(),
            })?
            .to_vec();
        debug!(index, "resolved series");
        Ok(self.stamp(&spec, index, values))
    }

    /// Resolves every child of a configuration, in child order.
    pub fn resolve_all(&self, key: &ConfigKey) -> Result<Vec<ResolvedSeries>, ProviderError> {
        let spec = key.decode()?;
        let batch = self.batch(&spec);
        Ok(batch
            .iter()
            .enumerate()
            .map(|(index, values)| self.stamp(&spec, index, values.to_vec()))
            .collect())
    }

    /// Display name of a configuration, e.g. `"(1,0,0)(0,0,0)12"`.
    pub fn display_name(&self, key: &ConfigKey) -> Result<String, ProviderError> {
        Ok(key.decode()?.to_string())
    }

    /// Display name of a child, `"<configuration> - <index>"`.
    pub fn child_display_name(&self, child: &ChildRef) -> Result<String, ProviderError> {
        let spec = child.source().decode()?;
        Ok(child_display(&spec, child.index()))
    }

    /// Node name of a child: its index.
    pub fn node_name(&self, child: &ChildRef) -> String {
        child.index().to_string()
    }

    /// Drops the cached batch of a configuration. Returns whether one was
    /// cached.
    pub fn invalidate(&self, key: &ConfigKey) -> Result<bool, ProviderError> {
        let spec = key.decode()?;
        Ok(self.cache.invalidate(&ConfigKey::encode(&spec)))
    }

    /// Drops every cached batch.
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn stamp(&self, spec: &ModelSpecification, index: usize, values: Vec<f64>) -> ResolvedSeries {
        let frequency = spec.frequency();
        ResolvedSeries {
            name: child_display(spec, index),
            node_name: index.to_string(),
            moniker: ChildRef::new(ConfigKey::encode(spec), index).moniker(),
            frequency,
            start: Period::start_of_year(frequency, ANCHOR_YEAR),
            values,
        }
    }
}

fn child_display(spec: &ModelSpecification, index: usize) -> String {
    format!("{spec} - {index}")
}
