//! Scoped resource keys
//!
//! A Compute Engine resource is addressed by its name plus, for regional and
//! zonal resources, the region or zone it lives in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope of a [`Key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Zonal,
    Regional,
    Global,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KeyType::Zonal => "zonal",
            KeyType::Regional => "regional",
            KeyType::Global => "global",
        };
        f.write_str(s)
    }
}

/// Key for a single resource, tagged with its scope
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum Key {
    Global { name: String },
    Regional { name: String, region: String },
    Zonal { name: String, zone: String },
}

impl Key {
    /// Key for a global resource
    pub fn global(name: impl Into<String>) -> Self {
        Key::Global { name: name.into() }
    }

    /// Key for a resource in `region`
    pub fn regional(name: impl Into<String>, region: impl Into<String>) -> Self {
        Key::Regional {
            name: name.into(),
            region: region.into(),
        }
    }

    /// Key for a resource in `zone`
    pub fn zonal(name: impl Into<String>, zone: impl Into<String>) -> Self {
        Key::Zonal {
            name: name.into(),
            zone: zone.into(),
        }
    }

    /// Build a key from flat fields. A non-empty zone wins over a region;
    /// with both empty the key is global.
    pub fn from_parts(name: &str, zone: &str, region: &str) -> Self {
        if !zone.is_empty() {
            Key::zonal(name, zone)
        } else if !region.is_empty() {
            Key::regional(name, region)
        } else {
            Key::global(name)
        }
    }

    pub fn key_type(&self) -> KeyType {
        match self {
            Key::Global { .. } => KeyType::Global,
            Key::Regional { .. } => KeyType::Regional,
            Key::Zonal { .. } => KeyType::Zonal,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Key::Global { name } | Key::Regional { name, .. } | Key::Zonal { name, .. } => name,
        }
    }

    /// Zone of a zonal key
    pub fn zone(&self) -> Option<&str> {
        match self {
            Key::Zonal { zone, .. } => Some(zone),
            _ => None,
        }
    }

    /// Region of a regional key
    pub fn region(&self) -> Option<&str> {
        match self {
            Key::Regional { region, .. } => Some(region),
            _ => None,
        }
    }

    /// True when every populated field is non-empty
    pub fn valid(&self) -> bool {
        match self {
            Key::Global { name } => !name.is_empty(),
            Key::Regional { name, region } => !name.is_empty() && !region.is_empty(),
            Key::Zonal { name, zone } => !name.is_empty() && !zone.is_empty(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Global { name } => write!(f, "Key{{{:?}}}", name),
            Key::Regional { name, region } => write!(f, "Key{{{:?}, region: {:?}}}", name, region),
            Key::Zonal { name, zone } => write!(f, "Key{{{:?}, zone: {:?}}}", name, zone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_picks_scope() {
        assert_eq!(Key::from_parts("i1", "z1", ""), Key::zonal("i1", "z1"));
        assert_eq!(Key::from_parts("sn", "", "r1"), Key::regional("sn", "r1"));
        assert_eq!(Key::from_parts("fw", "", ""), Key::global("fw"));
        // zone takes precedence
        assert_eq!(Key::from_parts("x", "z1", "r1").key_type(), KeyType::Zonal);
    }

    #[test]
    fn test_accessors() {
        let key = Key::regional("subnet", "us-central1");
        assert_eq!(key.name(), "subnet");
        assert_eq!(key.region(), Some("us-central1"));
        assert_eq!(key.zone(), None);
        assert_eq!(key.key_type(), KeyType::Regional);
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Key::zonal("a", "z"), Key::zonal("a", "z"));
        assert_ne!(Key::zonal("a", "z"), Key::zonal("a", "y"));
        assert_ne!(Key::global("a"), Key::regional("a", "r"));
    }

    #[test]
    fn test_valid() {
        assert!(Key::global("a").valid());
        assert!(!Key::global("").valid());
        assert!(!Key::zonal("a", "").valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::global("fw").to_string(), r#"Key{"fw"}"#);
        assert_eq!(
            Key::zonal("i1", "z1").to_string(),
            r#"Key{"i1", zone: "z1"}"#
        );
    }
}
