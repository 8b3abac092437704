mod interner;

pub(super) use self::interner::{StringId, StringInterner};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{FieldId, NodeId, RelationFieldId};

/// The name index of a definition. Every lookup the builders perform at
/// translation time resolves here in constant time; nothing ever scans the
/// node list by name.
#[derive(Default, Serialize, Deserialize, Debug, Clone)]
pub(super) struct Names {
    interner: StringInterner,
    #[serde(with = "super::as_pairs")]
    nodes: HashMap<StringId, NodeId>,
    #[serde(with = "super::as_pairs")]
    fields: HashMap<(NodeId, StringId), FieldId>,
    #[serde(with = "super::as_pairs")]
    relation_fields: HashMap<(NodeId, StringId), RelationFieldId>,
}

impl Names {
    pub(super) fn intern_node(&mut self, name: &str, node_id: NodeId) {
        let string_id = self.interner.intern(name);
        self.nodes.insert(string_id, node_id);
    }

    pub(super) fn intern_field(&mut self, name: &str, node_id: NodeId, field_id: FieldId) {
        let string_id = self.interner.intern(name);
        self.fields.insert((node_id, string_id), field_id);
    }

    pub(super) fn intern_relation_field(
        &mut self,
        name: &str,
        node_id: NodeId,
        relation_field_id: RelationFieldId,
    ) {
        let string_id = self.interner.intern(name);
        self.relation_fields.insert((node_id, string_id), relation_field_id);
    }

    pub(super) fn intern_string(&mut self, string_value: &str) -> StringId {
        self.interner.intern(string_value)
    }

    pub(super) fn get_name(&self, string_id: StringId) -> &str {
        self.interner.get(string_id)
    }

    pub(super) fn get_node_id(&self, name: &str) -> Option<NodeId> {
        self.interner
            .lookup(name)
            .and_then(|string_id| self.nodes.get(&string_id))
            .copied()
    }

    pub(super) fn get_field_id(&self, node_id: NodeId, name: &str) -> Option<FieldId> {
        self.interner
            .lookup(name)
            .and_then(|string_id| self.fields.get(&(node_id, string_id)))
            .copied()
    }

    pub(super) fn get_relation_field_id(&self, node_id: NodeId, name: &str) -> Option<RelationFieldId> {
        self.interner
            .lookup(name)
            .and_then(|string_id| self.relation_fields.get(&(node_id, string_id)))
            .copied()
    }

    pub(super) fn remap_fields(&mut self, remap: &[u32]) {
        for field_id in self.fields.values_mut() {
            *field_id = FieldId(remap[field_id.0 as usize]);
        }
    }

    pub(super) fn remap_relation_fields(&mut self, remap: &[u32]) {
        for relation_field_id in self.relation_fields.values_mut() {
            *relation_field_id = RelationFieldId(remap[relation_field_id.0 as usize]);
        }
    }
}
