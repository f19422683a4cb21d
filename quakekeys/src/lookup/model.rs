//! Model identity and peril codes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Hazard type resolved by a lookup engine.
///
/// Serialised as its numeric code in keys files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum PerilId {
    Flood = 1,
    Quake = 2,
    Surge = 3,
    Wind = 4,
}

impl PerilId {
    /// Numeric peril code.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Lower-case peril name.
    pub fn name(&self) -> &'static str {
        match self {
            PerilId::Flood => "flood",
            PerilId::Quake => "quake",
            PerilId::Surge => "surge",
            PerilId::Wind => "wind",
        }
    }
}

impl From<PerilId> for u8 {
    fn from(peril: PerilId) -> Self {
        peril.code()
    }
}

impl fmt::Display for PerilId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PerilId {
    type Err = String;

    /// Accepts a peril name (`quake`) or code (`2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flood" | "1" => Ok(PerilId::Flood),
            "quake" | "earthquake" | "2" => Ok(PerilId::Quake),
            "surge" | "3" => Ok(PerilId::Surge),
            "wind" | "4" => Ok(PerilId::Wind),
            other => Err(format!(
                "unknown peril '{}' (expected flood, quake, surge or wind)",
                other
            )),
        }
    }
}

/// Supplier, name and version of the model a lookup serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model supplier (e.g. "GEMFoundation")
    pub supplier: String,
    /// Model name (e.g. "GMO")
    pub name: String,
    /// Model version, if known
    pub version: Option<String>,
}

impl ModelInfo {
    /// Create model identity.
    pub fn new(supplier: &str, name: &str, version: Option<&str>) -> Self {
        Self {
            supplier: supplier.to_string(),
            name: name.to_string(),
            version: version.map(str::to_string),
        }
    }
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self::new("GEMFoundation", "GMO", None)
    }
}

impl fmt::Display for ModelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.supplier, self.name)?;
        if let Some(version) = &self.version {
            write!(f, "/{}", version)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peril_codes() {
        assert_eq!(PerilId::Flood.code(), 1);
        assert_eq!(PerilId::Quake.code(), 2);
        assert_eq!(PerilId::Surge.code(), 3);
        assert_eq!(PerilId::Wind.code(), 4);
        assert_eq!(u8::from(PerilId::Quake), 2);
    }

    #[test]
    fn test_peril_parse() {
        assert_eq!("quake".parse::<PerilId>(), Ok(PerilId::Quake));
        assert_eq!("EarthQuake".parse::<PerilId>(), Ok(PerilId::Quake));
        assert_eq!("4".parse::<PerilId>(), Ok(PerilId::Wind));
        assert!("hail".parse::<PerilId>().is_err());
        assert_eq!(PerilId::Surge.to_string(), "surge");
    }

    #[test]
    fn test_model_display() {
        assert_eq!(ModelInfo::default().to_string(), "GEMFoundation/GMO");
        let versioned = ModelInfo::new("GEMFoundation", "GMO", Some("0.1"));
        assert_eq!(versioned.to_string(), "GEMFoundation/GMO/0.1");
    }
}
