//! # gceref
//!
//! Identifiers for Compute Engine resources and the three string forms they
//! take:
//!
//! - resource path: `zones/<zone>/instances/<name>`
//! - relative resource name: `projects/<project>/zones/<zone>/instances/<name>`
//! - self link: `https://www.googleapis.com/compute/v1/projects/...`
//!
//! Everything here is a pure string transformation except the process-wide
//! API domain, see [`set_api_domain`].

pub mod cloud;
pub mod error;
pub mod meta;

pub use cloud::aggregate::group_by_scope;
pub use cloud::copy::copy_via_json;
pub use cloud::domain::{
    api_domain, set_api_domain, ApiDomain, DEFAULT_API_DOMAIN, INVALID_PREFIX,
};
pub use cloud::path::{
    aggregated_list_key, relative_resource_name, resource_path, self_link, INVALID_KEY_TYPE,
    INVALID_RESOURCE, UNKNOWN_SCOPE,
};
pub use cloud::resource_id::{parse_resource_url, ResourceId, ResourceMapKey};
pub use error::{Error, Result};
pub use meta::{Key, KeyType, Version};
