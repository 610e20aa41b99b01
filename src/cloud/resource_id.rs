//! Resource identifiers
//!
//! A [`ResourceId`] names one Compute Engine resource (or a project, region or
//! zone) and converts to and from the URL forms the API uses.

use super::path;
use crate::error::{Error, Result};
use crate::meta::{Key, Version};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resource identifier as parsed from a compute resource URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ResourceId {
    pub project_id: String,
    /// Collection name, e.g. `instances`, `regions`, `projects`
    pub resource: String,
    /// Absent for project-only identifiers
    pub key: Option<Key>,
}

impl ResourceId {
    pub fn new(project_id: impl Into<String>, resource: impl Into<String>, key: Key) -> Self {
        Self {
            project_id: project_id.into(),
            resource: resource.into(),
            key: Some(key),
        }
    }

    /// Identifier for the project itself
    pub fn project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            resource: "projects".to_string(),
            key: None,
        }
    }

    /// Compare two possibly absent identifiers. Two absent identifiers are equal.
    pub fn equal(a: Option<&ResourceId>, b: Option<&ResourceId>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Flat key for use in maps. `None` when the identifier has no key.
    pub fn map_key(&self) -> Option<ResourceMapKey> {
        let key = self.key.as_ref()?;
        Some(ResourceMapKey {
            project_id: self.project_id.clone(),
            resource: self.resource.clone(),
            name: key.name().to_string(),
            zone: key.zone().unwrap_or_default().to_string(),
            region: key.region().unwrap_or_default().to_string(),
        })
    }

    pub fn resource_path(&self) -> String {
        path::resource_path(&self.resource, self.key.as_ref())
    }

    pub fn relative_resource_name(&self) -> String {
        path::relative_resource_name(&self.project_id, &self.resource, self.key.as_ref())
    }

    pub fn self_link(&self, version: &Version) -> String {
        path::self_link(version, &self.project_id, &self.resource, self.key.as_ref())
    }
}

/// Displays the relative resource name
impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative_resource_name())
    }
}

impl FromStr for ResourceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_resource_url(s)
    }
}

/// Flattened [`ResourceId`] that can be used as a key in maps.
/// Zone and region are empty when they do not apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ResourceMapKey {
    pub project_id: String,
    pub resource: String,
    pub name: String,
    pub zone: String,
    pub region: String,
}

impl ResourceMapKey {
    pub fn to_id(&self) -> ResourceId {
        ResourceId {
            project_id: self.project_id.clone(),
            resource: self.resource.clone(),
            key: Some(Key::from_parts(&self.name, &self.zone, &self.region)),
        }
    }
}

/// Parse resource URLs of the following forms:
///
/// ```text
/// global/<res>/<name>
/// regions/<region>/<res>/<name>
/// regions/<region>
/// zones/<zone>/<res>/<name>
/// zones/<zone>
/// projects/<proj>
/// projects/<proj>/global/<res>/<name>
/// projects/<proj>/regions/<region>/<res>/<name>
/// projects/<proj>/zones/<zone>/<res>/<name>
/// [https://www.googleapis.com/compute/<ver>]/projects/<proj>/...
/// ```
///
/// Anything before the first `/projects/` is dropped, so the API version of a
/// full URL is not recovered.
pub fn parse_resource_url(url: &str) -> Result<ResourceId> {
    let invalid = || {
        tracing::debug!("rejected resource URL {:?}", url);
        Error::InvalidResourceUrl(url.to_string())
    };

    // Trim prefix off URL leaving "projects/..."
    let trimmed = match url.find("/projects/") {
        Some(idx) => &url[idx + 1..],
        None => url,
    };

    let parts: Vec<&str> = trimmed.split('/').collect();
    if parts.len() < 2 || parts.len() > 6 {
        return Err(invalid());
    }

    let mut id = ResourceId::default();
    let mut scoped = parts.as_slice();
    if let ["projects", project, rest @ ..] = scoped {
        id.resource = "projects".to_string();
        id.project_id = project.to_string();
        if rest.is_empty() {
            return Ok(id);
        }
        scoped = rest;
    }

    let (resource, key) = match scoped {
        ["global", resource, name] => (*resource, Key::global(*name)),
        ["regions", region] => ("regions", Key::global(*region)),
        ["regions", region, resource, name] => (*resource, Key::regional(*name, *region)),
        ["zones", zone] => ("zones", Key::global(*zone)),
        ["zones", zone, resource, name] => (*resource, Key::zonal(*name, *zone)),
        _ => return Err(invalid()),
    };

    id.resource = resource.to_string();
    id.key = Some(key);
    Ok(id)
}
