//! Compute resource identifiers and URLs
//!
//! # Module Structure
//!
//! - [`resource_id`] - `ResourceId`, map keys and URL parsing
//! - [`path`] - Resource paths, relative names, self links
//! - [`domain`] - API domain configuration
//! - [`aggregate`] - Aggregated list buckets
//! - [`copy`] - Field copy through a JSON round trip
//!
//! # Example
//!
//! ```
//! use gceref::{parse_resource_url, Version};
//!
//! let id = parse_resource_url("projects/p1/zones/us-central1-a/instances/vm-1").unwrap();
//! assert_eq!(id.resource, "instances");
//! assert_eq!(id.resource_path(), "zones/us-central1-a/instances/vm-1");
//! assert_eq!(
//!     id.self_link(&Version::Ga),
//!     "https://www.googleapis.com/compute/v1/projects/p1/zones/us-central1-a/instances/vm-1"
//! );
//! ```

pub mod aggregate;
pub mod copy;
pub mod domain;
pub mod path;
pub mod resource_id;
