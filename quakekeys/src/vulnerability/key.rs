//! Classification keys for vulnerability matching.

use std::fmt;
use std::str::FromStr;

use crate::location::LocationRecord;

/// A location attribute that takes part in the vulnerability key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    /// Building class
    Taxonomy,
    /// Occupancy type
    Occupancy,
}

impl KeyField {
    /// Column name in the vulnerability dictionary and in config.
    pub fn name(&self) -> &'static str {
        match self {
            KeyField::Taxonomy => "taxonomy",
            KeyField::Occupancy => "occupancy",
        }
    }

    /// The record's value for this field.
    pub fn value_of<'a>(&self, record: &'a LocationRecord) -> &'a str {
        match self {
            KeyField::Taxonomy => &record.taxonomy,
            KeyField::Occupancy => &record.occupancy,
        }
    }
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "taxonomy" => Ok(KeyField::Taxonomy),
            "occupancy" => Ok(KeyField::Occupancy),
            other => Err(format!(
                "unknown key field '{}' (expected taxonomy or occupancy)",
                other
            )),
        }
    }
}

/// Default key: building class then occupancy.
pub fn default_key_fields() -> Vec<KeyField> {
    vec![KeyField::Taxonomy, KeyField::Occupancy]
}

/// Canonical form of a set of classification values.
///
/// Values are trimmed and upper-cased, so `(" cr/lfinf", "Res ")` and
/// `("CR/LFINF", "RES")` are the same key. Each value is kept as its own
/// component: no separator is ever spliced into the key, so a value that
/// contains `|` cannot collide with a different tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassificationKey(Vec<String>);

impl ClassificationKey {
    /// Build a key from field values in key-field order.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            values
                .into_iter()
                .map(|value| value.as_ref().trim().to_uppercase())
                .collect(),
        )
    }

    /// Normalised values in key-field order.
    pub fn values(&self) -> &[String] {
        &self.0
    }
}

/// Joined with `|` for log output only.
impl fmt::Display for ClassificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("|"))
    }
}
