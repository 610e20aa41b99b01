//! Aggregated list buckets
//!
//! Aggregated list calls report items grouped under `zones/<zone>`,
//! `regions/<region>` or `global`. These helpers build the same grouping from
//! a set of identifiers.

use super::path::aggregated_list_key;
use super::resource_id::ResourceId;
use std::collections::BTreeMap;

/// Group identifiers by their aggregated list key, keeping input order
/// within each bucket. Identifiers without a key land in `unknownScope`.
pub fn group_by_scope<I>(ids: I) -> BTreeMap<String, Vec<ResourceId>>
where
    I: IntoIterator<Item = ResourceId>,
{
    let mut buckets: BTreeMap<String, Vec<ResourceId>> = BTreeMap::new();
    for id in ids {
        buckets
            .entry(aggregated_list_key(id.key.as_ref()))
            .or_default()
            .push(id);
    }
    tracing::trace!("grouped identifiers into {} buckets", buckets.len());
    buckets
}
