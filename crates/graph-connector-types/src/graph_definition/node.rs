use serde::{Deserialize, Serialize};

use super::names::StringId;

/// A node entity of the schema model. The generic parameter is `String`
/// while the schema builder constructs the definition, and `StringId` once
/// the definition has interned it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Node<T> {
    pub(super) name: T,
}

impl<T> Copy for Node<T> where T: Copy {}

impl Node<String> {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

impl Node<StringId> {
    pub(crate) fn name(&self) -> StringId {
        self.name
    }
}
