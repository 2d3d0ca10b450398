use std::collections::BTreeSet;

use crate::mapping;

/// How the package converter treats the Frictionless `licenses` list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LicensePolicy {
    /// Promote the first license into `license_id`/`license_title` (and
    /// `license_url` when it has a path), and keep the whole `licenses`
    /// list so it ends up in `extras`.
    #[default]
    Reference,
    /// Promote the first license into `license_id`, `license_title` and
    /// `license_url` (null when absent). A single-element `licenses` list is
    /// fully represented by those fields and is removed.
    Consume,
}

/// Configuration for the converters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    /// License handling
    pub license_policy: LicensePolicy,
    /// Package fields treated as native CKAN fields in addition to the
    /// built-in ones (site specific dataset schemas)
    pub extra_known_keys: BTreeSet<String>,
    /// Package fields that are never moved into `extras`
    pub extra_excluded_keys: BTreeSet<String>,
}

impl ConverterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the license handling policy
    pub fn with_license_policy(mut self, policy: LicensePolicy) -> Self {
        self.license_policy = policy;
        self
    }

    /// Treat `key` as a native CKAN package field
    pub fn with_known_key<S: Into<String>>(mut self, key: S) -> Self {
        self.extra_known_keys.insert(key.into());
        self
    }

    /// Treat every key in `keys` as a native CKAN package field
    pub fn with_known_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_known_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Never move `key` into `extras`
    pub fn with_excluded_key<S: Into<String>>(mut self, key: S) -> Self {
        self.extra_excluded_keys.insert(key.into());
        self
    }

    /// Whether `key` stays at the top level of a converted package
    pub fn keeps_package_key(&self, key: &str) -> bool {
        mapping::is_known_package_key(key)
            || mapping::is_excluded_package_key(key)
            || self.extra_known_keys.contains(key)
            || self.extra_excluded_keys.contains(key)
    }
}
