use std::collections::HashMap;

use itertools::Itertools;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::catalog::{self, CanonicalKey};
use crate::zeto_errors::ZetoError;

/// Accumulated mapping of canonical keys to numeric parameter values.
///
/// A set is *complete* when it holds one value for every catalog field.
/// Keys are always the catalog's own static strings, so membership checks
/// stay cheap and serialization never allocates key storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: HashMap<CanonicalKey, f64>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `key`, returning the previous value.
    /// Keys are idempotently settable: re-inserting the same value is a no-op
    /// apart from the returned previous value.
    pub fn insert(&mut self, key: CanonicalKey, value: f64) -> Option<f64> {
        self.values.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Canonical keys required by the catalog but absent from this set,
    /// sorted alphabetically for stable error reporting.
    pub fn missing_keys(&self) -> Vec<CanonicalKey> {
        catalog::canonical_keys()
            .filter(|key| !self.values.contains_key(key))
            .sorted_unstable()
            .collect()
    }

    /// True once every catalog field has a value.
    pub fn is_complete(&self) -> bool {
        self.missing_keys().is_empty()
    }

    /// Iterate the stored `(key, value)` pairs in catalog order.
    ///
    /// Partial sets yield the subset of fields already answered, still in
    /// catalog order; keys outside the catalog cannot exist by construction.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (CanonicalKey, f64)> + '_ {
        catalog::canonical_keys()
            .filter_map(move |key| self.values.get(key).map(|value| (key, *value)))
    }

    /// Re-check every stored value against its field's inclusive bounds.
    ///
    /// The tabular import path deliberately enforces only parseability and
    /// completeness; callers that additionally need the dialogue path's range
    /// guarantee opt in through this helper.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` if every value lies within its field's `[min, max]`.
    /// * The first offending value as [`ZetoError::OutOfRange`] otherwise,
    ///   scanning in catalog order.
    pub fn validate_ranges(&self) -> Result<(), ZetoError> {
        for field in catalog::list() {
            if let Some(value) = self.get(field.key) {
                if value < field.min || value > field.max {
                    return Err(ZetoError::OutOfRange {
                        key: field.key,
                        value,
                        min: field.min,
                        max: field.max,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Wire contract with the analysis service: a flat JSON object keyed by
/// canonical key, emitted in catalog order for deterministic payloads.
impl Serialize for ParameterSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in self.iter_ordered() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}
