mod as_pairs;
mod auth;
mod field;
mod ids;
mod names;
mod node;
mod relation_field;
mod walkers;

pub use auth::{AuthOperation, AuthRule};
pub use field::Field;
pub use ids::{AuthRuleId, FieldId, NodeId, RelationFieldId};
pub use node::Node;
pub use relation_field::{RelationDirection, RelationField};
pub use walkers::{AuthRuleWalker, FieldWalker, NodeWalker, RelationFieldWalker, Walker};

use names::{Names, StringId};
use serde::{Deserialize, Serialize};

/// Definition of a graph schema: the nodes, their scalar and relationship
/// fields, and their authorization rules, as extracted from the annotated
/// SDL by the schema-building subsystem.
///
/// The definition is immutable once built. All name-based lookups the
/// translation layer performs at every recursion level go through the
/// interned name index, so they stay constant-time on large schemas.
///
/// The structure is serialized for caching between processes; changes here
/// must stay backwards-compatible.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GraphDefinition {
    /// Ordered by insertion; ids are positional.
    nodes: Vec<Node<StringId>>,
    /// Ordered by node id after `finalize`.
    fields: Vec<Field<StringId>>,
    /// Ordered by node id after `finalize`.
    relation_fields: Vec<RelationField<StringId>>,
    /// Ordered by node id after `finalize`.
    auth_rules: Vec<AuthRule>,
    names: Names,
}

impl GraphDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over all nodes of the schema.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeWalker<'_>> + '_ {
        (0..self.nodes.len()).map(move |id| self.walk(NodeId(id as u32)))
    }

    /// Find the node with the given type name.
    pub fn find_node(&self, type_name: &str) -> Option<NodeWalker<'_>> {
        self.names.get_node_id(type_name).map(|node_id| self.walk(node_id))
    }

    /// Adds a node to the definition.
    pub fn push_node(&mut self, node: Node<String>) -> NodeId {
        let id = self.next_node_id();
        self.names.intern_node(node.name(), id);

        let name = self.names.intern_string(node.name());
        self.nodes.push(Node { name });

        id
    }

    /// Adds a scalar field to the definition.
    pub fn push_field(&mut self, field: Field<String>) -> FieldId {
        let id = self.next_field_id();
        self.names.intern_field(field.name(), field.node_id(), id);

        let name = self.names.intern_string(field.name());
        self.fields.push(Field {
            node_id: field.node_id(),
            name,
        });

        id
    }

    /// Adds a relationship field to the definition.
    pub fn push_relation_field(&mut self, field: RelationField<String>) -> RelationFieldId {
        let id = self.next_relation_field_id();
        self.names.intern_relation_field(field.field_name(), field.node_id(), id);

        self.relation_fields.push(RelationField {
            node_id: field.node_id(),
            field_name: self.names.intern_string(field.field_name()),
            rel_type: self.names.intern_string(field.rel_type()),
            direction: field.direction,
            target_type: self.names.intern_string(field.target_type()),
            array: field.array,
            union: field.union,
        });

        id
    }

    /// Adds an authorization rule to the definition.
    pub fn push_auth_rule(&mut self, rule: AuthRule) -> AuthRuleId {
        let id = AuthRuleId(self.auth_rules.len() as u32);
        self.auth_rules.push(rule);

        id
    }

    /// Finalizes the definition: sorts the per-node collections so walkers
    /// can slice them by owning node, remapping the name index accordingly.
    pub fn finalize(&mut self) {
        let remap = sort_by_node(&mut self.fields, |field| field.node_id());
        self.names.remap_fields(&remap);

        let remap = sort_by_node(&mut self.relation_fields, |field| field.node_id());
        self.names.remap_relation_fields(&remap);

        sort_by_node(&mut self.auth_rules, |rule| rule.node_id());
    }

    /// Walk an item in the definition by its id.
    pub fn walk<Id>(&self, id: Id) -> Walker<'_, Id> {
        Walker {
            id,
            definition: self,
        }
    }

    fn next_node_id(&self) -> NodeId {
        NodeId(self.nodes.len() as u32)
    }

    fn next_field_id(&self) -> FieldId {
        FieldId(self.fields.len() as u32)
    }

    fn next_relation_field_id(&self) -> RelationFieldId {
        RelationFieldId(self.relation_fields.len() as u32)
    }
}

/// Stable-sorts `items` by owning node id and returns the old-index to
/// new-index mapping for id remapping.
fn sort_by_node<T>(items: &mut Vec<T>, key: impl Fn(&T) -> NodeId) -> Vec<u32> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|index| key(&items[*index]));

    let mut remap = vec![0; items.len()];
    for (new_index, old_index) in order.iter().enumerate() {
        remap[*old_index] = new_index as u32;
    }

    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(order.into_iter().map(|index| {
        slots[index].take().expect("every slot is taken exactly once")
    }));

    remap
}
