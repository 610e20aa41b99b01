//! Resource path, relative name and self link generation
//!
//! These functions never fail. Inputs that cannot be expressed produce one of
//! the sentinel strings below, which callers may match on.

use super::domain;
use crate::meta::{Key, Version};

/// Returned by [`resource_path`] for `projects`, which has no scoped path
pub const INVALID_RESOURCE: &str = "invalid-resource";

/// Returned by [`resource_path`] when there is no key to place the resource
pub const INVALID_KEY_TYPE: &str = "invalid-key-type";

/// Returned by [`aggregated_list_key`] when there is no key
pub const UNKNOWN_SCOPE: &str = "unknownScope";

/// Path starting from the location.
/// Example: `regions/us-central1/subnetworks/my-subnet`
pub fn resource_path(resource: &str, key: Option<&Key>) -> String {
    match resource {
        "zones" | "regions" => {
            return match key {
                Some(key) => format!("{}/{}", resource, key.name()),
                None => INVALID_KEY_TYPE.to_string(),
            };
        }
        "projects" => return INVALID_RESOURCE.to_string(),
        _ => {}
    }

    match key {
        Some(Key::Zonal { name, zone }) => format!("zones/{}/{}/{}", zone, resource, name),
        Some(Key::Regional { name, region }) => {
            format!("regions/{}/{}/{}", region, resource, name)
        }
        Some(Key::Global { name }) => format!("global/{}/{}", resource, name),
        None => INVALID_KEY_TYPE.to_string(),
    }
}

/// Path starting from the project.
/// Example: `projects/my-project/regions/us-central1/subnetworks/my-subnet`
pub fn relative_resource_name(project: &str, resource: &str, key: Option<&Key>) -> String {
    match resource {
        "projects" => format!("projects/{}", project),
        _ => format!("projects/{}/{}", project, resource_path(resource, key)),
    }
}

/// Self link URL for the given object, rooted at the process-wide API domain
pub fn self_link(version: &Version, project: &str, resource: &str, key: Option<&Key>) -> String {
    domain::api_domain().self_link(version, project, resource, key)
}

/// Key of the aggregated list bucket the resource is reported under
pub fn aggregated_list_key(key: Option<&Key>) -> String {
    match key {
        Some(Key::Regional { region, .. }) => format!("regions/{}", region),
        Some(Key::Zonal { zone, .. }) => format!("zones/{}", zone),
        Some(Key::Global { .. }) => "global".to_string(),
        None => UNKNOWN_SCOPE.to_string(),
    }
}
