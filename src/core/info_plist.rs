//! Info manifest (Info.plist) specifications.
//!
//! A target either uses the host tool's default manifest or extends it with
//! a set of typed key/value overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single plist value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlistValue {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Array(Vec<PlistValue>),
    Dictionary(BTreeMap<String, PlistValue>),
}

impl From<&str> for PlistValue {
    fn from(s: &str) -> Self {
        PlistValue::String(s.to_string())
    }
}

impl From<String> for PlistValue {
    fn from(s: String) -> Self {
        PlistValue::String(s)
    }
}

impl From<bool> for PlistValue {
    fn from(b: bool) -> Self {
        PlistValue::Boolean(b)
    }
}

impl From<i64> for PlistValue {
    fn from(i: i64) -> Self {
        PlistValue::Integer(i)
    }
}

impl PlistValue {
    /// Parse a command-line value, preferring booleans and integers over strings.
    pub fn parse_scalar(raw: &str) -> Self {
        match raw {
            "true" => PlistValue::Boolean(true),
            "false" => PlistValue::Boolean(false),
            _ => raw
                .parse::<i64>()
                .map(PlistValue::Integer)
                .unwrap_or_else(|_| PlistValue::String(raw.to_string())),
        }
    }
}

/// Key/value overrides applied on top of the default manifest.
pub type PlistEntries = BTreeMap<String, PlistValue>;

/// How a target's info manifest is produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoManifest {
    /// The host tool's default manifest.
    #[default]
    Default,

    /// The default manifest extended with the given entries.
    Extending(PlistEntries),
}

impl InfoManifest {
    /// Build a manifest from entries. An empty map is the default manifest.
    pub fn extending(entries: PlistEntries) -> Self {
        if entries.is_empty() {
            InfoManifest::Default
        } else {
            InfoManifest::Extending(entries)
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, InfoManifest::Default)
    }

    /// Look up an override.
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        match self {
            InfoManifest::Default => None,
            InfoManifest::Extending(entries) => entries.get(key),
        }
    }
}
