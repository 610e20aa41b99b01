//! Field copy between serde-compatible types

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Copy the field values of `src` into `dest` by encoding `src` to JSON and
/// decoding it as `D`. Fields of `dest` absent from the encoding keep their
/// `#[serde(default)]` values, not the old contents of `dest`.
pub fn copy_via_json<D, S>(dest: &mut D, src: &S) -> Result<()>
where
    D: DeserializeOwned,
    S: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(src)?;
    *dest = serde_json::from_slice(&bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::resource_id::{ResourceId, ResourceMapKey};
    use crate::meta::Key;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Alpha {
        name: String,
        labels: BTreeMap<String, String>,
        alpha_only: Option<String>,
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Ga {
        name: String,
        labels: BTreeMap<String, String>,
    }

    #[test]
    fn test_copy_between_versions() {
        let src = Alpha {
            name: "vm-1".to_string(),
            labels: BTreeMap::from([("env".to_string(), "prod".to_string())]),
            alpha_only: Some("x".to_string()),
        };
        let mut dest = Ga::default();
        copy_via_json(&mut dest, &src).unwrap();
        assert_eq!(dest.name, "vm-1");
        assert_eq!(dest.labels.get("env").map(String::as_str), Some("prod"));
    }

    #[test]
    fn test_copy_resource_id() {
        let src = ResourceId::new("p", "instances", Key::zonal("i", "z"));
        let mut dest = ResourceId::default();
        copy_via_json(&mut dest, &src).unwrap();
        assert_eq!(dest, src);
    }

    #[test]
    fn test_copy_incompatible_shape_fails() {
        let src = vec![1, 2, 3];
        let mut dest = ResourceMapKey::default();
        let err = copy_via_json(&mut dest, &src).unwrap_err();
        assert!(!err.is_invalid_url());
        assert_eq!(dest, ResourceMapKey::default());
    }

    #[test]
    fn test_copy_unencodable_source_fails() {
        // JSON object keys must be strings
        let src: BTreeMap<Vec<u8>, u8> = BTreeMap::from([(vec![1], 1)]);
        let mut dest: BTreeMap<String, u8> = BTreeMap::new();
        assert!(copy_via_json(&mut dest, &src).is_err());
    }
}
