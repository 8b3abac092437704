use serde::{Deserialize, Serialize};

use super::{names::StringId, NodeId};

/// A primitive (scalar) field of a node.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Field<T> {
    pub(super) node_id: NodeId,
    pub(super) name: T,
}

impl<T> Copy for Field<T> where T: Copy {}

impl<T> Field<T> {
    pub(crate) fn node_id(&self) -> NodeId {
        self.node_id
    }
}

impl Field<String> {
    pub fn new(node_id: NodeId, name: impl Into<String>) -> Self {
        Self {
            node_id,
            name: name.into(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

impl Field<StringId> {
    pub(crate) fn name(&self) -> StringId {
        self.name
    }
}
