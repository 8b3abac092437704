//! Serde adapter for maps with non-string keys. JSON object keys must be
//! strings, so the name indices are written out as sequences of pairs
//! instead, sorted by key to keep the serialized form stable.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub(super) fn serialize<K, V, S>(map: &HashMap<K, V>, ser: S) -> Result<S::Ok, S::Error>
where
    K: Serialize + Ord,
    V: Serialize,
    S: Serializer,
{
    let mut pairs: Vec<_> = map.iter().collect();
    pairs.sort_by(|(left, _), (right, _)| left.cmp(right));

    ser.collect_seq(pairs)
}

pub(super) fn deserialize<'de, K, V, D>(des: D) -> Result<HashMap<K, V>, D::Error>
where
    K: Deserialize<'de> + Eq + std::hash::Hash,
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let pairs: Vec<(K, V)> = Vec::deserialize(des)?;
    Ok(pairs.into_iter().collect())
}
