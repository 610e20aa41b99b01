//! Resource key and API version metadata
//!
//! - [`key`] - Scoped keys (global, regional, zonal)
//! - [`version`] - Compute API versions (GA, alpha, beta)

pub mod key;
pub mod version;

pub use key::{Key, KeyType};
pub use version::Version;
