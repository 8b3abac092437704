use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StringId(u32);

/// Deduplicating string storage. Interned ids are stable for the lifetime of
/// the definition.
///
/// Only the strings are serialized; the index is rebuilt on deserialization
/// so lookups stay constant-time on a loaded definition.
#[derive(Default, Serialize, Deserialize, Debug, Clone)]
#[serde(from = "SerializedInterner")]
pub(crate) struct StringInterner {
    strings: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, StringId>,
}

#[derive(Deserialize)]
struct SerializedInterner {
    strings: Vec<String>,
}

impl From<SerializedInterner> for StringInterner {
    fn from(serialized: SerializedInterner) -> Self {
        let index = serialized
            .strings
            .iter()
            .enumerate()
            .map(|(position, string_value)| (string_value.clone(), StringId(position as u32)))
            .collect();

        Self {
            strings: serialized.strings,
            index,
        }
    }
}

impl StringInterner {
    pub(crate) fn intern(&mut self, string_value: &str) -> StringId {
        if let Some(id) = self.lookup(string_value) {
            return id;
        }

        let id = StringId(self.strings.len() as u32);
        self.strings.push(string_value.to_string());
        self.index.insert(string_value.to_string(), id);

        id
    }

    pub(crate) fn lookup(&self, string_value: &str) -> Option<StringId> {
        self.index.get(string_value).copied()
    }

    pub(crate) fn get(&self, id: StringId) -> &str {
        &self.strings[id.0 as usize]
    }
}
