use serde::{Deserialize, Serialize};

use super::{names::StringId, NodeId};

/// The direction of a relationship edge, seen from the owning node.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationDirection {
    Out,
    In,
}

/// A relationship field of a node: one traversable edge type.
///
/// For union-typed relationships `target_type` holds the union name; the
/// concrete member node is resolved per input key by the translation layer.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RelationField<T> {
    pub(super) node_id: NodeId,
    pub(super) field_name: T,
    pub(super) rel_type: T,
    pub(super) direction: RelationDirection,
    pub(super) target_type: T,
    pub(super) array: bool,
    pub(super) union: bool,
}

impl<T> Copy for RelationField<T> where T: Copy {}

impl<T> RelationField<T> {
    pub(crate) fn node_id(&self) -> NodeId {
        self.node_id
    }
}

impl RelationField<String> {
    pub fn new(
        node_id: NodeId,
        field_name: impl Into<String>,
        rel_type: impl Into<String>,
        direction: RelationDirection,
        target_type: impl Into<String>,
    ) -> Self {
        Self {
            node_id,
            field_name: field_name.into(),
            rel_type: rel_type.into(),
            direction,
            target_type: target_type.into(),
            array: false,
            union: false,
        }
    }

    /// Marks the field as list-valued.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.array = true;
        self
    }

    /// Marks the target as a union of node types.
    #[must_use]
    pub fn union(mut self) -> Self {
        self.union = true;
        self
    }

    pub(crate) fn field_name(&self) -> &str {
        &self.field_name
    }

    pub(crate) fn rel_type(&self) -> &str {
        &self.rel_type
    }

    pub(crate) fn target_type(&self) -> &str {
        &self.target_type
    }
}

impl RelationField<StringId> {
    pub(crate) fn field_name(&self) -> StringId {
        self.field_name
    }

    pub(crate) fn rel_type(&self) -> StringId {
        self.rel_type
    }

    pub(crate) fn target_type(&self) -> StringId {
        self.target_type
    }
}
