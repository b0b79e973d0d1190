use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The kind of part a BOM line refers to.
///
/// Part types come from free-form configuration data, so any unrecognized name is kept as-is in `Other`.
/// Names are matched exactly, "extrusion" is `Other("extrusion")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartType {
    Extrusion,
    Hardware,
    Glass,
    Fastener,
    Option,
    Other(String),
}

/// Presentation order of part types, lowest first.
///
/// `Fastener` has no rank of its own and is presented with the unrecognized types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartTypeRank {
    Extrusion,
    Hardware,
    Glass,
    Option,
    Unranked,
}

impl PartType {
    pub fn as_str(&self) -> &str {
        match self {
            PartType::Extrusion => "Extrusion",
            PartType::Hardware => "Hardware",
            PartType::Glass => "Glass",
            PartType::Fastener => "Fastener",
            PartType::Option => "Option",
            PartType::Other(name) => name.as_str(),
        }
    }

    pub fn rank(&self) -> PartTypeRank {
        match self {
            PartType::Extrusion => PartTypeRank::Extrusion,
            PartType::Hardware => PartTypeRank::Hardware,
            PartType::Glass => PartTypeRank::Glass,
            PartType::Option => PartTypeRank::Option,
            PartType::Fastener | PartType::Other(_) => PartTypeRank::Unranked,
        }
    }

    /// Hardware and fasteners may be billed by length (e.g. weather-stripping in LF).
    pub fn is_length_billable(&self) -> bool {
        matches!(self, PartType::Hardware | PartType::Fastener)
    }
}

impl From<&str> for PartType {
    fn from(value: &str) -> Self {
        match value {
            "Extrusion" => PartType::Extrusion,
            "Hardware" => PartType::Hardware,
            "Glass" => PartType::Glass,
            "Fastener" => PartType::Fastener,
            "Option" => PartType::Option,
            other => PartType::Other(other.to_string()),
        }
    }
}

impl From<String> for PartType {
    fn from(value: String) -> Self {
        match PartType::from(value.as_str()) {
            PartType::Other(_) => PartType::Other(value),
            recognized => recognized,
        }
    }
}

impl From<PartType> for String {
    fn from(value: PartType) -> Self {
        match value {
            PartType::Other(name) => name,
            recognized => recognized.as_str().to_string(),
        }
    }
}

impl FromStr for PartType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PartType::from(s))
    }
}

impl Display for PartType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
