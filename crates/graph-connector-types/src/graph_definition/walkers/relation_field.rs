use super::{NodeWalker, Walker};
use crate::graph_definition::{names::StringId, RelationDirection, RelationField, RelationFieldId};

/// Definition of a relationship field.
pub type RelationFieldWalker<'a> = Walker<'a, RelationFieldId>;

impl<'a> RelationFieldWalker<'a> {
    fn get(self) -> &'a RelationField<StringId> {
        &self.definition.relation_fields[self.id.0 as usize]
    }

    /// The GraphQL field name of the relationship.
    pub fn field_name(self) -> &'a str {
        self.get_name(self.get().field_name())
    }

    /// The edge label in emitted query text.
    pub fn rel_type(self) -> &'a str {
        self.get_name(self.get().rel_type())
    }

    pub fn direction(self) -> RelationDirection {
        self.get().direction
    }

    /// Whether the field is list-valued.
    pub fn is_list(self) -> bool {
        self.get().array
    }

    /// Whether the target is a union of node types.
    pub fn is_union(self) -> bool {
        self.get().union
    }

    /// The target type name. For unions this is the union name, not a node.
    pub fn target_type_name(self) -> &'a str {
        self.get_name(self.get().target_type())
    }

    /// The node the relationship points at. `None` for unions, whose member
    /// node is resolved per input key.
    pub fn target(self) -> Option<NodeWalker<'a>> {
        if self.is_union() {
            return None;
        }

        self.definition.find_node(self.target_type_name())
    }

    /// The node owning the relationship field.
    pub fn owner(self) -> NodeWalker<'a> {
        self.walk(self.get().node_id())
    }
}
