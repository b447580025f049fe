//! Permission payload normalization

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPermissions {
    List(Vec<String>),
    Map(BTreeMap<String, bool>),
}

/// Accepts `["a", "b"]`, `{"a": true, "b": false}` or `null`.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPermissions>::deserialize(deserializer)?;

    Ok(match raw {
        None => BTreeSet::new(),
        Some(RawPermissions::List(names)) => names.into_iter().collect(),
        Some(RawPermissions::Map(flags)) => flags
            .into_iter()
            .filter_map(|(name, granted)| granted.then_some(name))
            .collect(),
    })
}
