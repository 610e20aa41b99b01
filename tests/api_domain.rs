//! Process-wide API domain tests
//!
//! Kept in their own test binary because they change global state. The
//! writes happen in a single #[test] so they cannot race with each other.

use gceref::{
    api_domain, set_api_domain, ApiDomain, Key, ResourceId, Version, DEFAULT_API_DOMAIN,
};

#[test]
fn test_set_api_domain_rewrites_all_prefixes() {
    let id = ResourceId::new("p1", "instances", Key::zonal("i1", "z1"));

    assert_eq!(api_domain(), ApiDomain::default());
    assert_eq!(
        id.self_link(&Version::Ga),
        "https://www.googleapis.com/compute/v1/projects/p1/zones/z1/instances/i1"
    );

    set_api_domain("https://example.com");
    assert_eq!(
        id.self_link(&Version::Ga),
        "https://example.com/compute/v1/projects/p1/zones/z1/instances/i1"
    );
    assert_eq!(
        id.self_link(&Version::Alpha),
        "https://example.com/compute/alpha/projects/p1/zones/z1/instances/i1"
    );
    assert_eq!(
        id.self_link(&Version::Beta),
        "https://example.com/compute/beta/projects/p1/zones/z1/instances/i1"
    );
    assert_eq!(
        id.self_link(&Version::Other("v2".to_string())),
        "invalid-prefix/projects/p1/zones/z1/instances/i1"
    );

    // parsing ignores the domain entirely
    let parsed: ResourceId = id.self_link(&Version::Beta).parse().unwrap();
    assert_eq!(parsed, id);

    set_api_domain(DEFAULT_API_DOMAIN);
    assert_eq!(api_domain(), ApiDomain::default());
}

#[test]
fn test_concurrent_readers_see_a_whole_domain() {
    // Readers only; no writes here, so this does not race with the test above
    // beyond seeing one of its complete domains.
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let link = ResourceId::project("p").self_link(&Version::Alpha);
                assert!(link.ends_with("/compute/alpha/projects/p"), "{}", link);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
