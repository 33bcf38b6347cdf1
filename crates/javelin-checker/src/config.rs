//! Checker configuration.
//!
//! Properties are modelled like engine properties: a closed enum of knobs,
//! each with a documented default, and a config object that only stores
//! overrides.

use rustc_hash::FxHashMap;

/// Tunable behaviours of the body checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckerProperty {
    /// Report non-empty switch cases that can fall into the next case
    /// (default: true).
    RequireCaseTermination,
    /// Report the first statement after one that cannot complete normally
    /// (default: true).
    ReportUnreachableStatements,
    /// Report reads of variables that are not definitely assigned
    /// (default: true). The assignment ledger is maintained either way.
    TrackDefiniteAssignment,
    /// Report non-void bodies that can complete without returning
    /// (default: true).
    ReportMissingReturn,
}

impl CheckerProperty {
    /// Value used when the property has not been set.
    pub fn default_value(self) -> bool {
        match self {
            CheckerProperty::RequireCaseTermination => true,
            CheckerProperty::ReportUnreachableStatements => true,
            CheckerProperty::TrackDefiniteAssignment => true,
            CheckerProperty::ReportMissingReturn => true,
        }
    }
}

/// Property overrides for one checker run.
///
/// # Example
///
/// ```
/// use javelin_checker::{CheckerConfig, CheckerProperty};
///
/// let config = CheckerConfig::new().with(CheckerProperty::RequireCaseTermination, false);
/// assert!(!config.property(CheckerProperty::RequireCaseTermination));
/// assert!(config.property(CheckerProperty::ReportMissingReturn));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CheckerConfig {
    overrides: FxHashMap<CheckerProperty, bool>,
}

impl CheckerConfig {
    /// Configuration with every property at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property.
    pub fn set_property(&mut self, property: CheckerProperty, value: bool) {
        self.overrides.insert(property, value);
    }

    /// Builder form of [`set_property`](Self::set_property).
    pub fn with(mut self, property: CheckerProperty, value: bool) -> Self {
        self.set_property(property, value);
        self
    }

    /// Current value of a property.
    pub fn property(&self, property: CheckerProperty) -> bool {
        self.overrides
            .get(&property)
            .copied()
            .unwrap_or_else(|| property.default_value())
    }
}
