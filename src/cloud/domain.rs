//! API domain configuration
//!
//! Self links are rooted at `<domain>/compute/{v1|alpha|beta}`. The domain can
//! be passed around explicitly as an [`ApiDomain`], or set once for the whole
//! process with [`set_api_domain`].
//!
//! The process-wide value is meant to be set during start-up, before any other
//! thread builds self links. It sits behind a `RwLock`, so a later change is
//! still safe, but threads racing with it may see either the old or the new
//! domain.

use crate::meta::{Key, Version};
use std::sync::{OnceLock, RwLock};

/// Default root of the Compute API
pub const DEFAULT_API_DOMAIN: &str = "https://www.googleapis.com";

/// Prefix used in place of a domain when the version is not known
pub const INVALID_PREFIX: &str = "invalid-prefix";

/// Version-specific URL prefixes derived from one root domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDomain {
    ga_prefix: String,
    alpha_prefix: String,
    beta_prefix: String,
}

impl ApiDomain {
    pub fn new(domain: &str) -> Self {
        Self {
            ga_prefix: format!("{}/compute/v1", domain),
            alpha_prefix: format!("{}/compute/alpha", domain),
            beta_prefix: format!("{}/compute/beta", domain),
        }
    }

    /// URL prefix for `version`, or [`INVALID_PREFIX`] if the version is unknown
    pub fn prefix(&self, version: &Version) -> &str {
        match version {
            Version::Ga => &self.ga_prefix,
            Version::Alpha => &self.alpha_prefix,
            Version::Beta => &self.beta_prefix,
            Version::Other(_) => INVALID_PREFIX,
        }
    }

    /// Self link rooted at this domain
    pub fn self_link(
        &self,
        version: &Version,
        project: &str,
        resource: &str,
        key: Option<&Key>,
    ) -> String {
        format!(
            "{}/{}",
            self.prefix(version),
            super::path::relative_resource_name(project, resource, key)
        )
    }
}

impl Default for ApiDomain {
    fn default() -> Self {
        Self::new(DEFAULT_API_DOMAIN)
    }
}

static API_DOMAIN: OnceLock<RwLock<ApiDomain>> = OnceLock::new();

fn holder() -> &'static RwLock<ApiDomain> {
    API_DOMAIN.get_or_init(|| RwLock::new(ApiDomain::default()))
}

/// Set the root of the URL for the API for the whole process.
/// The default domain is [`DEFAULT_API_DOMAIN`].
pub fn set_api_domain(domain: &str) {
    let next = ApiDomain::new(domain);
    // A poisoned lock still holds a complete ApiDomain; overwrite it.
    let mut guard = holder().write().unwrap_or_else(|e| e.into_inner());
    *guard = next;
    tracing::info!("API domain set to {}", domain);
}

/// Snapshot of the process-wide API domain
pub fn api_domain() -> ApiDomain {
    holder()
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}
