#![forbid(unsafe_code)]

//! Rule tables: the severity and options mapping at the core of every profile
//!
//! A table maps validated rule ids to entries. Entries serialize in the two
//! shapes the downstream linter accepts: a bare severity string, or an array
//! of the severity followed by option values.

use crate::error::ConfigError;
use crate::types::{RuleId, Severity};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Severity and options for a single rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    severity: Severity,
    options: Vec<Value>,
}

impl RuleEntry {
    /// Creates an entry with the given severity and no options
    pub fn new(severity: Severity) -> Self {
        RuleEntry {
            severity,
            options: Vec::new(),
        }
    }

    /// Entry disabling a rule
    pub fn off() -> Self {
        RuleEntry::new(Severity::Off)
    }

    /// Entry reporting violations without failing the lint run
    pub fn warn() -> Self {
        RuleEntry::new(Severity::Warn)
    }

    /// Entry reporting violations as errors
    pub fn error() -> Self {
        RuleEntry::new(Severity::Error)
    }

    /// Appends option values forwarded opaquely to the linter
    pub fn with_options(mut self, options: impl IntoIterator<Item = Value>) -> Self {
        self.options.extend(options);
        self
    }

    /// Returns the entry's severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the option values, empty for the bare-severity form
    pub fn options(&self) -> &[Value] {
        &self.options
    }
}

impl Serialize for RuleEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.options.is_empty() {
            self.severity.serialize(serializer)
        } else {
            let mut seq = serializer.serialize_seq(Some(self.options.len() + 1))?;
            seq.serialize_element(&self.severity)?;
            for option in &self.options {
                seq.serialize_element(option)?;
            }
            seq.end()
        }
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = RuleEntry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a severity string or a [severity, options...] array")
            }

            fn visit_str<E>(self, value: &str) -> Result<RuleEntry, E>
            where
                E: de::Error,
            {
                let severity = value.parse::<Severity>().map_err(E::custom)?;
                Ok(RuleEntry::new(severity))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<RuleEntry, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut options = Vec::new();
                while let Some(value) = seq.next_element::<Value>()? {
                    options.push(value);
                }
                if options.is_empty() {
                    return Err(de::Error::invalid_length(1, &self));
                }
                Ok(RuleEntry { severity, options })
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

/// A mapping from rule id to severity and options
///
/// Tables compose by override union: applying a later table writes its
/// entries over the earlier ones, key by key. Iteration and serialization
/// follow id order, so equal tables always render identically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable(BTreeMap<RuleId, RuleEntry>);

impl RuleTable {
    /// Creates an empty table
    pub fn new() -> Self {
        RuleTable(BTreeMap::new())
    }

    /// Builds a table from `(id, entry)` pairs, validating every id
    ///
    /// Duplicate ids resolve last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRuleId` if an id does not follow the
    /// `name`, `plugin/name`, `@scope/name` grammar.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, RuleEntry)>,
    ) -> Result<Self, ConfigError> {
        let mut table = RuleTable::new();
        for (id, entry) in entries {
            let id = RuleId::new(id).ok_or_else(|| ConfigError::InvalidRuleId(id.to_string()))?;
            table.set(id, entry);
        }
        Ok(table)
    }

    /// Inserts an entry, returning the displaced one if the id was present
    pub fn set(&mut self, id: RuleId, entry: RuleEntry) -> Option<RuleEntry> {
        self.0.insert(id, entry)
    }

    /// Override union: writes every entry of `overlay` over this table
    pub fn apply(&mut self, overlay: &RuleTable) {
        for (id, entry) in &overlay.0 {
            self.0.insert(id.clone(), entry.clone());
        }
    }

    /// Folds `apply` over the given tables in order, later tables winning
    pub fn merged<'a>(layers: impl IntoIterator<Item = &'a RuleTable>) -> RuleTable {
        let mut table = RuleTable::new();
        for layer in layers {
            table.apply(layer);
        }
        table
    }

    /// Looks up an entry by rule id
    pub fn get(&self, id: &str) -> Option<&RuleEntry> {
        self.0.get(id)
    }

    /// Returns true if the table configures the given rule
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Iterates entries in rule id order
    pub fn iter(&self) -> impl Iterator<Item = (&RuleId, &RuleEntry)> {
        self.0.iter()
    }

    /// Returns the number of configured rules
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no rules are configured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
