//! Compute API versions

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// API version used when generating self links.
///
/// `Other` carries any version string that is not known; self links built
/// with it get the invalid-prefix sentinel instead of a domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    #[default]
    Ga,
    Alpha,
    Beta,
    Other(String),
}

impl Version {
    pub fn as_str(&self) -> &str {
        match self {
            Version::Ga => "ga",
            Version::Alpha => "alpha",
            Version::Beta => "beta",
            Version::Other(s) => s,
        }
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "ga" | "v1" => Version::Ga,
            "alpha" => Version::Alpha,
            "beta" => Version::Beta,
            _ => Version::Other(s.to_string()),
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
